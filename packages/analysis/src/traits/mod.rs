//! Core trait abstractions for the analysis library.
//!
//! These traits define the interfaces that applications implement
//! to provide inference, storage, and timing capabilities.

pub mod clock;
pub mod inference;
pub mod store;
