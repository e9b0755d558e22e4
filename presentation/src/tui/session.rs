//! Chat session: key actions applied to the store and view state
//!
//! Owns the `MessageStore` and `TuiState` and is driven by `ChatApp`.
//! Kept free of terminal I/O so the whole submit flow can be tested.

use super::keys::Action;
use super::state::TuiState;
use chatpane_application::{
    ConversationObserver, MessageStore, ReplyOutcome, ReplyRequest, SubmitMessageUseCase,
};
use chatpane_domain::Message;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Marks the view dirty whenever the store changes
#[derive(Debug, Default)]
pub struct RedrawObserver {
    dirty: AtomicBool,
}

impl RedrawObserver {
    /// Take the dirty flag, resetting it
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn request(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}

impl ConversationObserver for RedrawObserver {
    fn on_append(&self, _message: &Message, _revision: u64) {
        self.request();
    }
}

pub struct ChatSession {
    store: MessageStore,
    use_case: Arc<SubmitMessageUseCase>,
    redraw: Arc<RedrawObserver>,
    pub state: TuiState,
}

impl ChatSession {
    pub fn new(mut store: MessageStore, use_case: Arc<SubmitMessageUseCase>) -> Self {
        let redraw = Arc::new(RedrawObserver::default());
        store.subscribe(redraw.clone());
        // First frame
        redraw.request();

        let state = TuiState::new(use_case.responder_name());
        Self {
            store,
            use_case,
            redraw,
            state,
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn into_store(self) -> MessageStore {
        self.store
    }

    /// Messages for reading alongside view state for writing, for rendering
    pub fn view_mut(&mut self) -> (&MessageStore, &mut TuiState) {
        (&self.store, &mut self.state)
    }

    /// Whether a redraw is due; resets the flag
    pub fn take_redraw(&self) -> bool {
        self.redraw.take()
    }

    pub fn request_redraw(&self) {
        self.redraw.request();
    }

    /// Apply a key action.
    ///
    /// Returns a reply request when the action appended a user message; the
    /// caller runs it with [`ChatSession::reply`] and hands the outcome back
    /// to [`ChatSession::reply_arrived`].
    pub fn handle_action(&mut self, action: Action) -> Option<ReplyRequest> {
        if action == Action::Submit {
            return self.submit();
        }

        let state = &mut self.state;
        match action {
            Action::Submit => {}
            Action::Quit => state.should_quit = true,
            Action::InsertChar(c) => state.input.insert_char(c),
            Action::InsertNewline => state.input.insert_newline(),
            Action::DeleteChar => state.input.delete_char(),
            Action::CursorLeft => state.input.cursor_left(),
            Action::CursorRight => state.input.cursor_right(),
            Action::CursorStart => state.input.cursor_home(),
            Action::CursorEnd => state.input.cursor_end(),
            Action::ScrollUp => state.list.scroll_up(1),
            Action::ScrollDown => state.list.scroll_down(1),
            Action::PageUp => state.list.page_up(),
            Action::PageDown => state.list.page_down(),
            Action::ScrollTop => state.list.scroll_to_top(),
            Action::ScrollBottom => state.list.scroll_to_bottom(),
            Action::None => return None,
        }
        self.request_redraw();
        None
    }

    /// Submit the input field; the buffer is only cleared on success
    fn submit(&mut self) -> Option<ReplyRequest> {
        let request = self.use_case.begin(&mut self.store, self.state.input.text())?;
        self.state.input.clear();
        self.state.pending_replies += 1;
        debug!(pending = self.state.pending_replies, "Reply requested");
        Some(request)
    }

    /// Future producing the reply; owns its inputs so it can be spawned
    pub fn reply(
        &self,
        request: ReplyRequest,
    ) -> impl Future<Output = ReplyOutcome> + Send + use<> {
        self.use_case.reply(request)
    }

    /// Append a finished reply, or flash why there is none
    pub fn reply_arrived(&mut self, outcome: ReplyOutcome) {
        self.state.pending_replies = self.state.pending_replies.saturating_sub(1);
        let reason = match &outcome.result {
            Ok(_) => "blank reply".to_string(),
            Err(e) => e.to_string(),
        };

        if self.use_case.complete(&mut self.store, outcome).is_none() {
            self.state.set_flash(format!("No reply ({})", reason));
        }
        self.request_redraw();
    }

    /// A reply task died before producing an outcome
    pub fn reply_lost(&mut self, reason: &str) {
        self.state.pending_replies = self.state.pending_replies.saturating_sub(1);
        self.state.set_flash(format!("No reply ({})", reason));
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatpane_application::{Responder, ResponderError};
    use chatpane_domain::{Conversation, MessageId, Sender};

    struct FixedResponder(Result<String, ResponderError>);

    #[async_trait]
    impl Responder for FixedResponder {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn reply(&self, _conversation: &[Message]) -> Result<String, ResponderError> {
            self.0.clone()
        }
    }

    fn seeded_store() -> MessageStore {
        let conversation = Conversation::from_messages(vec![
            Message::new(MessageId::new("id1"), "Hello Chatbot", Sender::User),
            Message::new(MessageId::new("id2"), "Hello! How can I help you", Sender::Assistant),
            Message::new(MessageId::new("id3"), "can u get me todays date", Sender::User),
            Message::new(MessageId::new("id4"), "Today is October 10, 2023", Sender::Assistant),
        ])
        .unwrap();
        MessageStore::with_conversation(conversation)
    }

    fn session(result: Result<String, ResponderError>) -> ChatSession {
        let use_case = SubmitMessageUseCase::new(Arc::new(FixedResponder(result)));
        ChatSession::new(seeded_store(), Arc::new(use_case))
    }

    fn type_text(session: &mut ChatSession, text: &str) {
        for c in text.chars() {
            session.handle_action(Action::InsertChar(c));
        }
    }

    #[tokio::test]
    async fn test_submit_and_reply() {
        let mut session = session(Ok("hi there".into()));
        type_text(&mut session, "hello");

        let request = session.handle_action(Action::Submit).unwrap();
        assert_eq!(session.store().len(), 5);
        assert_eq!(session.state.input.text(), "");
        assert_eq!(session.state.pending_replies, 1);

        let last = session.store().messages().last().unwrap();
        assert_eq!((last.sender(), last.text()), (Sender::User, "hello"));

        let outcome = session.reply(request).await;
        session.reply_arrived(outcome);

        assert_eq!(session.store().len(), 6);
        assert_eq!(session.state.pending_replies, 0);
        let last = session.store().messages().last().unwrap();
        assert_eq!((last.sender(), last.text()), (Sender::Assistant, "hi there"));
        assert!(session.state.flash().is_none());
    }

    #[test]
    fn test_whitespace_submit_keeps_buffer() {
        let mut session = session(Ok("unused".into()));
        type_text(&mut session, "   ");

        assert!(session.handle_action(Action::Submit).is_none());
        assert_eq!(session.store().len(), 4);
        assert_eq!(session.state.input.text(), "   ");
        assert_eq!(session.state.pending_replies, 0);
    }

    #[tokio::test]
    async fn test_failed_reply_flashes() {
        let mut session = session(Err(ResponderError::Unavailable("offline".into())));
        type_text(&mut session, "test");

        let request = session.handle_action(Action::Submit).unwrap();
        let outcome = session.reply(request).await;
        session.reply_arrived(outcome);

        assert_eq!(session.store().len(), 5);
        let last = session.store().messages().last().unwrap();
        assert_eq!((last.sender(), last.text()), (Sender::User, "test"));
        assert!(session.state.flash().unwrap().starts_with("No reply ("));
    }

    #[tokio::test]
    async fn test_blank_reply_flashes() {
        let mut session = session(Ok("  ".into()));
        type_text(&mut session, "hello");

        let request = session.handle_action(Action::Submit).unwrap();
        let outcome = session.reply(request).await;
        session.reply_arrived(outcome);

        assert_eq!(session.store().len(), 5);
        assert_eq!(session.state.flash(), Some("No reply (blank reply)"));
    }

    #[test]
    fn test_appends_request_redraw() {
        let mut session = session(Ok("x".into()));
        assert!(session.take_redraw());
        assert!(!session.take_redraw());

        type_text(&mut session, "a");
        assert!(session.take_redraw());

        session.handle_action(Action::Submit);
        assert!(session.take_redraw());
    }

    #[test]
    fn test_quit_and_reply_lost() {
        let mut session = session(Ok("x".into()));
        type_text(&mut session, "hello");
        session.handle_action(Action::Submit);

        session.reply_lost("task panicked");
        assert_eq!(session.state.pending_replies, 0);
        assert_eq!(session.state.flash(), Some("No reply (task panicked)"));

        session.handle_action(Action::Quit);
        assert!(session.state.should_quit);
        assert_eq!(session.into_store().len(), 5);
    }
}
