//! The analyzer: prompt -> transport/retry -> envelope -> normalize.

use tracing::debug;

use crate::error::Result;
use crate::pipeline::{build_analysis_prompt, call_with_backoff, extract_envelope, normalize_report};
use crate::traits::clock::{Sleeper, TokioSleeper};
use crate::traits::inference::Inference;
use crate::types::report::AnalysisResult;

/// Orchestrates one analysis end to end.
///
/// Generic over the inference provider and the wait primitive so both can be
/// faked in tests. Each invocation is independent and stateless apart from
/// the input URL; at most one request is in flight per user action (the UI
/// collaborator disables re-submission while analyzing) and there is no
/// cancellation - a submitted analysis runs to completion or failure.
///
/// # Example
///
/// ```rust,ignore
/// use analysis::{Analyzer, GeminiInference};
/// use gemini_client::GeminiClient;
///
/// let inference = GeminiInference::new(GeminiClient::from_env()?);
/// let analyzer = Analyzer::new(inference);
/// let report = analyzer.analyze("https://shop.example/product/123").await?;
/// ```
pub struct Analyzer<I, S = TokioSleeper> {
    inference: I,
    sleeper: S,
}

impl<I: Inference> Analyzer<I> {
    /// Create an analyzer with the production tokio-backed sleeper.
    pub fn new(inference: I) -> Self {
        Self {
            inference,
            sleeper: TokioSleeper,
        }
    }
}

impl<I: Inference, S: Sleeper> Analyzer<I, S> {
    /// Create an analyzer with an injected wait primitive.
    pub fn with_sleeper(inference: I, sleeper: S) -> Self {
        Self { inference, sleeper }
    }

    /// Analyze a product/review URL into a fraud report.
    ///
    /// The single inbound operation for the UI collaborator. Either returns
    /// a fully-populated [`AnalysisResult`] or fails with a described error;
    /// never a partial result.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        let prompt = build_analysis_prompt(url)?;
        debug!(url = url.trim(), "starting analysis");

        let response = call_with_backoff(&self.inference, &self.sleeper, &prompt).await?;

        let envelope = extract_envelope(&response.text);
        let result = normalize_report(envelope, &response.grounding)?;

        debug!(
            url = url.trim(),
            product = %result.product_name,
            score = result.overall_score,
            "analysis complete"
        );
        Ok(result)
    }
}
