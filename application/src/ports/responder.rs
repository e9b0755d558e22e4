//! Responder port
//!
//! Defines the interface for producing assistant replies.

use async_trait::async_trait;
use chatpane_domain::Message;
use thiserror::Error;

/// Errors that can occur while producing a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    #[error("Responder unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Nothing to reply to")]
    EmptyConversation,
}

/// Produces the assistant's reply to a conversation
///
/// This port defines how the application layer asks for a reply.
/// Implementations (adapters) live in the infrastructure layer.
/// A reply may be slow or fail; callers must tolerate both.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short name shown in the UI and in logs
    fn name(&self) -> &str;

    /// Produce reply text for the conversation so far (oldest first)
    async fn reply(&self, conversation: &[Message]) -> Result<String, ResponderError>;
}
