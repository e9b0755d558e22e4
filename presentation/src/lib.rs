//! Presentation layer for chatpane
//!
//! This crate contains the CLI definition, the terminal chat UI, and the
//! transcript formatter used after the UI closes.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, ResponderArg, TranscriptArg};
pub use config::{IconSet, TuiConfig};
pub use output::transcript::TranscriptFormatter;
pub use tui::ChatApp;
