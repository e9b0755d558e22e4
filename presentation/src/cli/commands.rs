//! CLI command definitions

use chatpane_domain::TranscriptFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Responder that produces replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResponderArg {
    /// Keyword rules with canned replies
    Rules,
    /// Repeat the user's message back
    Echo,
    /// Never reply
    Unavailable,
}

/// Transcript printed to stdout after the UI closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TranscriptArg {
    /// Print nothing
    None,
    /// One line per message
    Text,
    /// JSON array of messages
    Json,
}

impl From<TranscriptArg> for TranscriptFormat {
    fn from(arg: TranscriptArg) -> Self {
        match arg {
            TranscriptArg::None => TranscriptFormat::None,
            TranscriptArg::Text => TranscriptFormat::Text,
            TranscriptArg::Json => TranscriptFormat::Json,
        }
    }
}

/// CLI arguments for chatpane
#[derive(Parser, Debug)]
#[command(name = "chatpane")]
#[command(author, version, about = "A minimal chat window for the terminal")]
#[command(long_about = r#"
chatpane shows a conversation as a scrolling list of messages with an input
box underneath. Every message you send gets a reply from a local responder.

Configuration files are loaded from (in priority order):
1. --config <path>                       Explicit config file
2. CHATPANE_* environment variables      e.g. CHATPANE_RESPONDER__KIND=echo
3. ./chatpane.toml                       Project-level config
4. ~/.config/chatpane/config.toml        Global config

Example:
  chatpane
  chatpane --responder echo --empty
  chatpane --transcript json > session.json
"#)]
pub struct Cli {
    /// Responder that produces replies (overrides config)
    #[arg(short, long, value_enum, value_name = "KIND")]
    pub responder: Option<ResponderArg>,

    /// Start with an empty conversation instead of the seeded one
    #[arg(long)]
    pub empty: bool,

    /// Print the conversation to stdout after exiting
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub transcript: Option<TranscriptArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
