//! Application layer for chatpane
//!
//! This crate contains the message store, the submit use case, port
//! definitions, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_observer::ConversationObserver,
    responder::{Responder, ResponderError},
};
pub use store::MessageStore;
pub use use_cases::submit_message::{
    ReplyOutcome, ReplyRequest, SubmitMessageUseCase, SubmitOutcome,
};
