//! Conversation domain.
//!
//! - [`entities::Conversation`]: the ordered, append-only list of messages

pub mod entities;
