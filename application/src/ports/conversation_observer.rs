//! Port for reacting to conversation changes.
//!
//! The message store calls every registered [`ConversationObserver`] after
//! each append. The UI uses this to schedule a redraw; logging adapters use
//! it to record the conversation as it grows.

use chatpane_domain::Message;

/// Observer notified after each message is appended.
///
/// `on_append` is synchronous and non-fallible so that observers cannot
/// disrupt the append itself.
pub trait ConversationObserver: Send + Sync {
    /// Called after `message` became the last entry; `revision` is the
    /// store revision that includes it.
    fn on_append(&self, message: &Message, revision: u64);
}

