//! Transcript format value object

use serde::{Deserialize, Serialize};

/// How the conversation is printed after the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    /// Print nothing (default)
    #[default]
    None,
    /// Human-readable lines
    Text,
    /// JSON array of messages
    Json,
}
