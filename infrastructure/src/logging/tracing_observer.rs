//! Conversation observer that writes appends to the tracing log.
//!
//! Message bodies are logged at `trace` only; `debug` carries the id,
//! sender and length so that verbose logs stay readable.

use chatpane_application::ConversationObserver;
use chatpane_domain::Message;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

/// Logs every appended message
#[derive(Debug, Default)]
pub struct TracingObserver {
    appended: AtomicUsize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of appends observed so far
    pub fn appended(&self) -> usize {
        self.appended.load(Ordering::Relaxed)
    }
}

impl ConversationObserver for TracingObserver {
    fn on_append(&self, message: &Message, revision: u64) {
        self.appended.fetch_add(1, Ordering::Relaxed);
        debug!(
            id = %message.id(),
            sender = %message.sender(),
            chars = message.text().chars().count(),
            revision,
            "Conversation grew"
        );
        trace!(id = %message.id(), text = message.text(), "Message body");
    }
}
