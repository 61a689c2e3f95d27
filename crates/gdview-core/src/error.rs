//! Error types module
//!
//! All errors are unified under the `AppError` enum which can represent
//! storage, configuration, validation, and lookup failures.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Storage(_) => 502,
            AppError::Config(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Storage and config details can leak backend internals; keep them generic
            AppError::Storage(_) => "Storage backend request failed".to_string(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Storage(_) => LogLevel::Warn,
            AppError::Config(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_by_variant() {
        assert_eq!(AppError::InvalidInput("x".into()).http_status_code(), 400);
        assert_eq!(AppError::NotFound("x".into()).http_status_code(), 404);
        assert_eq!(AppError::Storage("x".into()).http_status_code(), 502);
        assert_eq!(AppError::Internal("x".into()).http_status_code(), 500);
    }

    #[test]
    fn storage_client_message_is_generic() {
        let err = AppError::Storage("access denied for key AKIA...".into());
        assert!(!err.client_message().contains("AKIA"));
    }
}
