//! Message store: the single owned source of truth for a session.
//!
//! The store wraps a [`Conversation`] and adds a revision counter plus
//! observer notification. It is owned by the UI loop and passed by
//! reference to whatever needs to read or append.

use crate::ports::conversation_observer::ConversationObserver;
use chatpane_domain::{Conversation, DomainError, Message};
use std::sync::Arc;
use tracing::trace;

/// Append-only store of the session's messages
pub struct MessageStore {
    conversation: Conversation,
    revision: u64,
    observers: Vec<Arc<dyn ConversationObserver>>,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::with_conversation(Conversation::new())
    }

    /// Start from an existing conversation (e.g. seeded messages).
    ///
    /// Seeding does not notify observers; the revision starts at 0.
    pub fn with_conversation(conversation: Conversation) -> Self {
        Self {
            conversation,
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be called after every append
    pub fn subscribe(&mut self, observer: Arc<dyn ConversationObserver>) {
        self.observers.push(observer);
    }

    /// Append a message to the end and notify observers
    pub fn append(&mut self, message: Message) -> Result<(), DomainError> {
        self.conversation.append(message)?;
        self.revision += 1;

        if let Some(last) = self.conversation.last() {
            trace!(
                id = %last.id(),
                sender = %last.sender(),
                revision = self.revision,
                "Message appended"
            );
            for observer in &self.observers {
                observer.on_append(last, self.revision);
            }
        }
        Ok(())
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn len(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }

    /// Number of appends since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Owned copy of the messages, for handing to a background task
    pub fn snapshot(&self) -> Vec<Message> {
        self.conversation.messages().to_vec()
    }
}
