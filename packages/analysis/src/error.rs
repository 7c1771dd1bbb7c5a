//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. The UI collaborator only ever
//! renders the `Display` text, but the variants stay distinguishable for
//! library consumers and tests.

use thiserror::Error;

/// Errors that can occur during analysis operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty or whitespace-only URL submitted
    #[error("no URL provided")]
    EmptyUrl,

    /// Non-transient inference service error (auth, quota, malformed request)
    #[error("inference service error: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service still overloaded after all retry attempts
    #[error("analysis service unreachable after {attempts} attempts")]
    Unreachable { attempts: u32 },

    /// Response payload failed to parse after envelope extraction
    #[error("malformed analysis payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Signup with an email that already has an account
    #[error("user already exists")]
    AccountExists,

    /// Login with an unknown email or wrong password
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
