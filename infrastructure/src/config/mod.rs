//! Configuration file loading for chatpane
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `CHATPANE_*` environment variables
//! 3. Project root: `./chatpane.toml` or `./.chatpane.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/chatpane/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConversationConfig, FileIconConfig, FileOutputConfig, FileReplyRule,
    FileResponderConfig, FileSeedMessage, FileTuiConfig,
};
pub use loader::{ConfigError, ConfigLoader};
