//! Chat message domain.
//!
//! - [`entities::Message`]: a single immutable chat entry
//! - [`entities::Sender`]: who wrote the message
//! - [`value_objects::MessageId`]: session-unique message identifier
//! - [`value_objects::MessageText`]: trimmed, non-empty submission text

pub mod entities;
pub mod value_objects;
