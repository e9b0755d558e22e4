//! TUI view state
//!
//! Everything the widgets need besides the messages themselves, which live
//! in the application's `MessageStore`.

use super::input_field::InputField;
use super::widgets::message_list::MessageListState;
use std::time::{Duration, Instant};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

#[derive(Debug, Default)]
pub struct TuiState {
    pub input: InputField,
    pub list: MessageListState,
    /// Transient status line message and when it was set
    pub flash_message: Option<(String, Instant)>,
    /// Replies spawned but not yet completed
    pub pending_replies: usize,
    pub responder_name: String,
    pub should_quit: bool,
    spinner_frame: usize,
}

impl TuiState {
    pub fn new(responder_name: impl Into<String>) -> Self {
        Self {
            responder_name: responder_name.into(),
            ..Self::default()
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    pub fn flash(&self) -> Option<&str> {
        self.flash_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    // -- Pending indicator --

    /// Advance the spinner; returns whether anything visible changed
    pub fn tick_spinner(&mut self) -> bool {
        if self.pending_replies == 0 {
            return false;
        }
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        true
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}
