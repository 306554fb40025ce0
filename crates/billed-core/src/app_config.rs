use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Root URL of the bills store API, e.g. `http://localhost:5678/`.
    pub api_url: String,
    pub api_token: Option<String>,
    /// Email of the signed-in user; required to upload receipts.
    pub user_email: Option<String>,
    pub env: Environment,
    pub log_level: String,
    pub test_users_path: PathBuf,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .field("user_email", &self.user_email)
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("test_users_path", &self.test_users_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
