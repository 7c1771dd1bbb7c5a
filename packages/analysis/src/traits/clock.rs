//! Injectable wait primitive for retry backoff.
//!
//! Backoff delays are real wall-clock suspensions in production but must be
//! observable in tests without actually waiting, so the pipeline sleeps
//! through this seam instead of calling `tokio::time::sleep` directly.

use async_trait::async_trait;
use std::time::Duration;

/// Non-blocking wait capability.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend the calling task for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
