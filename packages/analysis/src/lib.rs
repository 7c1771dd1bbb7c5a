//! Fraud Analysis Pipeline Library
//!
//! Given a product/review URL, this library builds a search-grounded prompt,
//! calls a generative-AI inference service with bounded retry, extracts the
//! JSON envelope from the free-text reply, and normalizes it into a typed
//! fraud report. A mock account layer persists analysis history per user
//! through an injected key-value storage capability.
//!
//! The analysis itself is delegated entirely to the inference service; this
//! library owns the mechanics around it - prompt template, transport retry,
//! envelope extraction, normalization, and history CRUD.
//!
//! # Usage
//!
//! ```rust,ignore
//! use analysis::{Analyzer, GeminiInference};
//! use gemini_client::GeminiClient;
//!
//! let inference = GeminiInference::new(GeminiClient::from_env()?);
//! let analyzer = Analyzer::new(inference);
//!
//! let report = analyzer.analyze("https://shop.example/product/123").await?;
//! println!("{}: {}/100", report.product_name, report.overall_score);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Inference, KeyValueStore, Sleeper)
//! - [`types`] - Report, history, and state types
//! - [`pipeline`] - Prompt, retry, envelope extraction, normalization
//! - [`inference`] - Inference provider implementations (Gemini)
//! - [`accounts`] - Mock account/history service
//! - [`stores`] - Storage implementations (MemoryStore)
//! - [`testing`] - Mock implementations for testing

pub mod accounts;
pub mod error;
pub mod inference;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use accounts::AccountService;
pub use error::{AnalysisError, Result};
pub use inference::GeminiInference;
pub use pipeline::{
    build_analysis_prompt, call_with_backoff, default_rating_distribution, extract_envelope,
    normalize_report, Analyzer, ANALYSIS_PROMPT, MAX_ATTEMPTS,
};
pub use stores::MemoryStore;
pub use traits::{
    clock::{Sleeper, TokioSleeper},
    inference::{Citation, Inference, InferenceError, InferenceResponse},
    store::KeyValueStore,
};
pub use types::{
    history::{HistoryItem, User, HISTORY_CAP},
    report::{AnalysisResult, AnalysisSource, RatingBucket, ReviewAnalysis, Sentiment},
    state::AnalysisState,
};
