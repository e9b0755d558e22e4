//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod conversation;
mod output;
mod responder;
mod tui;

pub use conversation::{FileConversationConfig, FileSeedMessage};
pub use output::FileOutputConfig;
pub use responder::{FileReplyRule, FileResponderConfig};
pub use tui::{FileIconConfig, FileTuiConfig};

use chatpane_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Messages shown when the session starts
    pub conversation: FileConversationConfig,
    /// Assistant reply settings
    pub responder: FileResponderConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is non-fatal: the offending entry is skipped when the
    /// configuration is converted.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.conversation.to_conversation().1);
        issues.extend(self.responder.to_rules().1);
        issues
    }
}
