//! Inference provider implementations.

pub mod gemini;

pub use gemini::GeminiInference;
