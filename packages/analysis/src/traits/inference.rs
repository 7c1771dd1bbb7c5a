//! Inference trait for the external generative-AI service.
//!
//! Implementations wrap a specific provider and expose the two things the
//! pipeline needs back: the primary text payload and any grounding citations
//! the provider's search tool produced.

use async_trait::async_trait;

/// A single inference call with search grounding enabled.
#[async_trait]
pub trait Inference: Send + Sync {
    /// Run one generation for the given prompt.
    ///
    /// One call per attempt; the retry wrapper owns attempt accounting.
    async fn generate(&self, prompt: &str) -> InferenceResult;
}

/// Result of one inference attempt.
pub type InferenceResult = std::result::Result<InferenceResponse, InferenceError>;

/// Response from an inference attempt.
#[derive(Debug, Clone, Default)]
pub struct InferenceResponse {
    /// Primary text payload (may be wrapped in commentary or fencing)
    pub text: String,

    /// Grounding citations from the provider's search side-channel
    pub grounding: Vec<Citation>,
}

impl InferenceResponse {
    /// A text-only response with no grounding.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grounding: Vec::new(),
        }
    }

    /// Attach a grounding citation.
    pub fn with_citation(mut self, uri: impl Into<String>, title: Option<String>) -> Self {
        self.grounding.push(Citation {
            uri: uri.into(),
            title,
        });
        self
    }
}

/// A grounding citation: URI plus optional display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub uri: String,
    pub title: Option<String>,
}

/// Error from one inference attempt.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct InferenceError {
    /// Upstream error message, surfaced verbatim to the caller
    pub message: String,

    /// Transient-overload signature: retryable service-unavailable class
    pub transient: bool,
}

impl InferenceError {
    /// A transient overload error (503 class) - the retry wrapper backs off.
    pub fn overloaded(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: true,
        }
    }

    /// A non-transient error (auth, quota, malformed request) - propagates
    /// immediately.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: false,
        }
    }
}
