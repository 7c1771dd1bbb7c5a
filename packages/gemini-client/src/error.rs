//! Error types for the Gemini client.

use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// Whether this error carries the transient-overload signature:
    /// HTTP 503 or an upstream message mentioning overload/UNAVAILABLE.
    ///
    /// Callers can retry these; every other kind should propagate.
    pub fn is_overloaded(&self) -> bool {
        match self {
            GeminiError::Api { status, message } => {
                *status == 503
                    || message.contains("503")
                    || message.contains("overloaded")
                    || message.contains("UNAVAILABLE")
            }
            _ => false,
        }
    }
}
