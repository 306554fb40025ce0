use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read test users file {path}: {source}")]
    UsersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse test users file: {0}")]
    UsersFileParse(#[from] serde_yaml::Error),

    #[error("test users validation error: {0}")]
    Validation(String),
}

/// Rejection reasons for a receipt file picked by the employee.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported receipt extension \"{extension}\" for {file_name}")]
    UnsupportedExtension {
        file_name: String,
        extension: String,
    },
}
