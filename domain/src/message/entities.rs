//! Message entities

use super::value_objects::{MessageId, MessageText};
use serde::{Deserialize, Serialize};

/// Origin of a message.
///
/// Only affects how a message is displayed, never how it is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    User,
    /// Default variant: unknown labels are displayed as assistant messages.
    #[default]
    Assistant,
}

impl Sender {
    /// Parse a sender label.
    ///
    /// Never fails: `"robot"` is accepted as an alias of `"assistant"`, and
    /// any unrecognized label maps to the default variant.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "user" => Self::User,
            _ => Self::Assistant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Sender {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> Self {
        sender.as_str().to_string()
    }
}

/// A chat message (Entity)
///
/// Immutable once created; identity is the [`MessageId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    message: String,
    sender: Sender,
}

impl Message {
    pub fn new(id: MessageId, message: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            message: message.into(),
            sender,
        }
    }

    /// New user message with a freshly generated id
    pub fn user(text: MessageText) -> Self {
        Self::new(MessageId::generate(), text.into_string(), Sender::User)
    }

    /// New assistant message with a freshly generated id
    pub fn assistant(text: MessageText) -> Self {
        Self::new(MessageId::generate(), text.into_string(), Sender::Assistant)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_from_label() {
        assert_eq!(Sender::from_label("user"), Sender::User);
        assert_eq!(Sender::from_label("USER"), Sender::User);
        assert_eq!(Sender::from_label("assistant"), Sender::Assistant);
        assert_eq!(Sender::from_label("robot"), Sender::Assistant);
    }

    #[test]
    fn test_unknown_sender_falls_back_to_default() {
        assert_eq!(Sender::from_label("moderator"), Sender::default());
        assert_eq!(Sender::from_label(""), Sender::Assistant);
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user(MessageText::parse("hello").unwrap());
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.text(), "hello");

        let reply = Message::assistant(MessageText::parse("hi there").unwrap());
        assert_eq!(reply.sender(), Sender::Assistant);
        assert_ne!(msg.id(), reply.id());
    }

    #[test]
    fn test_deserialize_with_unknown_sender() {
        let json = r#"{"id":"id9","message":"beep","sender":"droid"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id().as_str(), "id9");
        assert_eq!(msg.sender(), Sender::Assistant);
    }

    #[test]
    fn test_serialize_uses_canonical_label() {
        let msg = Message::new(MessageId::new("id2"), "hi", Sender::from_label("robot"));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["message"], "hi");
    }
}
