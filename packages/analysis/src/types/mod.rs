//! Data types for the analysis library.

pub mod history;
pub mod report;
pub mod state;
