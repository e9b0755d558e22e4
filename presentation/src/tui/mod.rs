//! TUI (Text User Interface) module for chatpane
//!
//! A single-pane chat window built on ratatui: the conversation on top,
//! an input box below, and a status bar showing pending replies.

mod app;
mod input_field;
mod keys;
mod session;
mod state;
mod widgets;

pub use app::ChatApp;
pub use input_field::{InputField, InputState};
pub use keys::{Action, KeyHandler};
pub use session::{ChatSession, RedrawObserver};
pub use state::TuiState;
pub use widgets::{
    MainLayout,
    message_list::{MessageList, MessageListState},
    message_row::{RowVariant, render_message},
};
