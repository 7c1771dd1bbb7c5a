//! Analysis view state machine.
//!
//! The UI collaborator drives a single analysis through
//! `Idle -> Analyzing -> (Complete | Error)`, with a reset transition back to
//! `Idle`. Transitions are explicit methods; no partial states are exposed.

use crate::types::report::AnalysisResult;

/// State of one analysis as consumed by the UI collaborator.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    /// No analysis in flight
    #[default]
    Idle,

    /// Request submitted, awaiting the pipeline
    Analyzing,

    /// Normalization succeeded
    Complete(AnalysisResult),

    /// Unrecovered failure from transport or normalization
    Error(String),
}

impl AnalysisState {
    /// Enter `Analyzing` on request submission.
    ///
    /// Only valid from `Idle`; re-submission while a request is in flight is
    /// rejected (the caller disables it, this enforces it).
    pub fn start(&mut self) -> bool {
        match self {
            AnalysisState::Idle => {
                *self = AnalysisState::Analyzing;
                true
            }
            _ => false,
        }
    }

    /// Enter `Complete` with the normalized result.
    pub fn complete(&mut self, result: AnalysisResult) -> bool {
        match self {
            AnalysisState::Analyzing => {
                *self = AnalysisState::Complete(result);
                true
            }
            _ => false,
        }
    }

    /// Enter `Error` with a human-readable message.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        match self {
            AnalysisState::Analyzing => {
                *self = AnalysisState::Error(message.into());
                true
            }
            _ => false,
        }
    }

    /// Return to `Idle` from a terminal state.
    pub fn reset(&mut self) -> bool {
        match self {
            AnalysisState::Complete(_) | AnalysisState::Error(_) => {
                *self = AnalysisState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Whether a request is in flight.
    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_result() -> AnalysisResult {
        AnalysisResult {
            product_name: "Widget".into(),
            overall_score: 10,
            verdict: "Authentic".into(),
            summary: "fine".into(),
            key_insights: vec![],
            reviews: vec![],
            rating_distribution: vec![],
            sources: None,
        }
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut state = AnalysisState::default();
        assert!(state.start());
        assert!(state.is_analyzing());
        assert!(state.complete(dummy_result()));
        assert!(state.reset());
        assert_eq!(state, AnalysisState::Idle);
    }

    #[test]
    fn test_error_path_transitions() {
        let mut state = AnalysisState::Idle;
        assert!(state.start());
        assert!(state.fail("service unreachable"));
        assert_eq!(state, AnalysisState::Error("service unreachable".into()));
        assert!(state.reset());
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut state = AnalysisState::Idle;
        // Cannot complete or fail without starting
        assert!(!state.complete(dummy_result()));
        assert!(!state.fail("nope"));
        assert!(!state.reset());

        assert!(state.start());
        // Cannot re-submit while analyzing
        assert!(!state.start());
        assert!(!state.reset());
    }
}
