//! Analysis pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Prompt construction (fixed analyst template around the input URL)
//! - Transport with bounded exponential-backoff retry
//! - Envelope extraction (stripping non-JSON wrapping from the reply)
//! - Normalization into a typed report with deduplicated sources

pub mod analyzer;
pub mod envelope;
pub mod normalize;
pub mod prompt;
pub mod retry;

pub use analyzer::Analyzer;
pub use envelope::extract_envelope;
pub use normalize::{default_rating_distribution, normalize_report};
pub use prompt::{build_analysis_prompt, ANALYSIS_PROMPT};
pub use retry::{call_with_backoff, MAX_ATTEMPTS};
