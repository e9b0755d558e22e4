//! Infrastructure layer for chatpane
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod responders;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileConversationConfig, FileIconConfig,
    FileOutputConfig, FileReplyRule, FileResponderConfig, FileSeedMessage, FileTuiConfig,
};
pub use logging::TracingObserver;
pub use responders::{
    EchoResponder, ReplyRule, ResponderKind, RuleResponder, UnavailableResponder, build_responder,
};
