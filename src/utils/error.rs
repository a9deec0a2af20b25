use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by the server in a response body (`error` field or
    /// non-success payload).
    #[error("Server error: {message}")]
    ServerError { message: String },

    /// Client-side validation failure; nothing was sent.
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, UiError>;
