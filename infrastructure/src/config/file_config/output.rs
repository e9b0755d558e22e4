//! Output configuration from TOML (`[output]` section)

use chatpane_domain::TranscriptFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// What to print to stdout once the session ends
    pub transcript: TranscriptFormat,
}
