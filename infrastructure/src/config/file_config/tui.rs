//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Icon glyphs drawn next to each message
///
/// An empty string hides the icon for that sender.
///
/// # Example
///
/// ```toml
/// [tui.icons]
/// user = "🧑"
/// assistant = "🤖"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIconConfig {
    pub user: String,
    pub assistant: String,
}

impl Default for FileIconConfig {
    fn default() -> Self {
        Self {
            user: "🧑".to_string(),
            assistant: "🤖".to_string(),
        }
    }
}

/// TUI configuration
///
/// # Example
///
/// ```toml
/// [tui]
/// max_input_height = 5
/// tick_ms = 250
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Maximum height for the input area in text lines (default: 5)
    pub max_input_height: u16,
    /// Redraw interval for status expiry and the pending indicator
    pub tick_ms: u64,
    pub icons: FileIconConfig,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            max_input_height: 5,
            tick_ms: 250,
            icons: FileIconConfig::default(),
        }
    }
}
