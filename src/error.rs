use thiserror::Error;

/// Errors that can occur while loading, storing or submitting recipes
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure talking to the recipe API
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("{message} ({status})")]
    Status { status: u16, message: String },

    /// The request did not complete within the configured timeout
    #[error("Request took too long! Timeout after {0} seconds")]
    Timeout(u64),

    /// The API payload did not have the expected shape
    #[error("Unexpected response payload: {0}")]
    Transform(String),

    /// User supplied data could not be accepted
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the durable store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// True for every failure that originates from talking to the API,
    /// including payloads that could not be transformed.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_) | AppError::Status { .. } | AppError::Timeout(_) | AppError::Transform(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transform(err.to_string())
    }
}
