use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Test accounts whose bills the review dashboard hides in production.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestUsers {
    #[serde(default)]
    pub users: Vec<String>,
}

impl TestUsers {
    /// Case-insensitive membership check.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.eq_ignore_ascii_case(email))
    }

    /// Returns the excluded emails for a reviewer: every test account plus
    /// the reviewer themself.
    #[must_use]
    pub fn excluding(&self, reviewer_email: &str) -> Vec<String> {
        let mut excluded = self.users.clone();
        if !self.contains(reviewer_email) {
            excluded.push(reviewer_email.to_string());
        }
        excluded
    }
}

/// Load and validate the test users list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_test_users(path: &Path) -> Result<TestUsers, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::UsersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let users: TestUsers = serde_yaml::from_str(&content).map_err(ConfigError::UsersFileParse)?;

    validate_test_users(&users)?;

    Ok(users)
}

fn validate_test_users(users: &TestUsers) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for email in &users.users {
        if email.trim().is_empty() {
            return Err(ConfigError::Validation(
                "test user email must be non-empty".to_string(),
            ));
        }

        if !email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "test user '{email}' is not an email address"
            )));
        }

        if !seen.insert(email.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate test user: '{email}'"
            )));
        }
    }

    Ok(())
}
