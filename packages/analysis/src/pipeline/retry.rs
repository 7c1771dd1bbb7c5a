//! Transport retry wrapper with bounded exponential backoff.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::traits::clock::Sleeper;
use crate::traits::inference::{Inference, InferenceResponse};

/// Maximum total attempts per analysis (first call plus two retries).
pub const MAX_ATTEMPTS: u32 = 3;

/// Invoke the inference call, retrying transient overload errors.
///
/// After a failed attempt N (transient, attempts remaining) the task suspends
/// for `2^(N-1)` seconds through the injected [`Sleeper`], so a fully
/// overloaded service costs 1s + 2s of backoff before failing. The final
/// attempt's failure surfaces without a delay. Non-transient errors propagate
/// immediately; exhaustion yields [`AnalysisError::Unreachable`], distinct
/// from the upstream error.
pub async fn call_with_backoff<I, S>(
    inference: &I,
    sleeper: &S,
    prompt: &str,
) -> Result<InferenceResponse>
where
    I: Inference + ?Sized,
    S: Sleeper + ?Sized,
{
    for attempt in 1..=MAX_ATTEMPTS {
        match inference.generate(prompt).await {
            Ok(response) => {
                debug!(attempt, "inference attempt succeeded");
                return Ok(response);
            }
            Err(err) if !err.transient => {
                warn!(attempt, error = %err, "inference failed, not retrying");
                return Err(AnalysisError::Inference(Box::new(err)));
            }
            Err(err) if attempt < MAX_ATTEMPTS => {
                let delay = Duration::from_secs(2u64.pow(attempt - 1));
                warn!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "inference service overloaded, backing off"
                );
                sleeper.sleep(delay).await;
            }
            Err(err) => {
                warn!(attempt, error = %err, "inference service still overloaded, giving up");
            }
        }
    }

    Err(AnalysisError::Unreachable {
        attempts: MAX_ATTEMPTS,
    })
}
