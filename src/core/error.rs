/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for line item presentation
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Provider data that does not satisfy a business rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
