//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod transcript_format;
pub mod validation;

pub use transcript_format::TranscriptFormat;
