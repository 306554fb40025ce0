use thiserror::Error;

/// Errors returned by the bills store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or TLS failure, or a 5xx status, from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid store URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// An update was attempted for a bill that has no store id.
    #[error("bill has no id to update")]
    MissingSelector,

    /// The store answered 4xx. Holds `"Erreur <code>"` and the body, if any.
    #[error("store rejected the request: {0}")]
    Rejected(String),
}
