use thiserror::Error;

/// Main error type for the coach service
#[derive(Error, Debug)]
pub enum CoachError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Request validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Upstream dependency errors (completion API, sports feeds)
    #[error("Upstream service error: {0}")]
    Upstream(String),

    // Persistence errors
    #[error("Store error: {0}")]
    Store(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for CoachError
pub type Result<T> = std::result::Result<T, CoachError>;
