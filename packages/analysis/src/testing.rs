//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the analysis library
//! without making real inference calls or waiting on real backoff timers.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::clock::Sleeper;
use crate::traits::inference::{Inference, InferenceError, InferenceResponse, InferenceResult};

/// A mock inference provider scripted with per-attempt outcomes.
///
/// Outcomes are consumed front to back, one per `generate` call; prompts are
/// recorded for assertions. An exhausted script fails the call rather than
/// panicking inside the pipeline.
#[derive(Default, Clone)]
pub struct MockInference {
    script: Arc<Mutex<VecDeque<InferenceResult>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockInference {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, response: InferenceResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a text-only successful response.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(InferenceResponse::from_text(text))
    }

    /// Queue a failed attempt.
    pub fn with_error(self, error: InferenceError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Inference for MockInference {
    async fn generate(&self, prompt: &str) -> InferenceResult {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(InferenceError::fatal("mock script exhausted")))
    }
}

/// A sleeper that records requested durations without waiting.
#[derive(Default, Clone)]
pub struct MockSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl MockSleeper {
    /// Create a new recording sleeper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Sum of all requested durations.
    pub fn total(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Sleeper for MockSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
