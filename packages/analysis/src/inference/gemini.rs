//! Gemini implementation of the Inference trait.
//!
//! Adapts [`gemini_client::GeminiClient`] to the pipeline's seam: every call
//! runs with the Google Search grounding tool enabled, and web grounding
//! chunks map onto citations.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError, GenerateRequest};

use crate::traits::inference::{Citation, Inference, InferenceError, InferenceResult, InferenceResponse};

/// Gemini-backed inference provider.
#[derive(Clone)]
pub struct GeminiInference {
    client: GeminiClient,
}

impl GeminiInference {
    /// Wrap a configured Gemini client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, InferenceError> {
        let client = GeminiClient::from_env().map_err(map_error)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Inference for GeminiInference {
    async fn generate(&self, prompt: &str) -> InferenceResult {
        let request = GenerateRequest::from_prompt(prompt).with_google_search();
        let response = self
            .client
            .generate_content(request)
            .await
            .map_err(map_error)?;

        let grounding = response
            .grounding_chunks()
            .unwrap_or_default()
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .map(|web| Citation {
                uri: web.uri.clone(),
                title: web.title.clone(),
            })
            .collect();

        Ok(InferenceResponse {
            text: response.text(),
            grounding,
        })
    }
}

fn map_error(err: GeminiError) -> InferenceError {
    if err.is_overloaded() {
        InferenceError::overloaded(err.to_string())
    } else {
        InferenceError::fatal(err.to_string())
    }
}
