//! Domain layer for chatpane
//!
//! This crate contains the core entities and value objects of a chat session.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Message**: one chat entry with text, sender, and a unique id
//! - **Conversation**: the ordered, append-only sequence of messages in a session
//! - **Sender**: who wrote a message; controls visual presentation only

pub mod config;
pub mod conversation;
pub mod core;
pub mod message;

// Re-export commonly used types
pub use config::{
    TranscriptFormat,
    validation::{ConfigIssue, ConfigIssueCode},
};
pub use conversation::entities::Conversation;
pub use core::error::DomainError;
pub use message::{
    entities::{Message, Sender},
    value_objects::{MessageId, MessageText},
};
