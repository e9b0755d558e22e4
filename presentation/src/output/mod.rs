//! Output formatters for printing the conversation after the TUI exits

pub mod transcript;
