//! Conversation entity

use crate::core::error::DomainError;
use crate::message::entities::Message;
use crate::message::value_objects::MessageId;

/// Ordered sequence of messages in a session (Entity)
///
/// Append is the only mutation. Order is insertion order and ids are
/// unique within the conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a conversation from existing messages, in order.
    ///
    /// Fails on the first duplicated id.
    pub fn from_messages(
        messages: impl IntoIterator<Item = Message>,
    ) -> Result<Self, DomainError> {
        let mut conversation = Self::new();
        for message in messages {
            conversation.append(message)?;
        }
        Ok(conversation)
    }

    /// Append a message to the end of the conversation
    pub fn append(&mut self, message: Message) -> Result<(), DomainError> {
        if self.contains_id(message.id()) {
            return Err(DomainError::DuplicateMessageId(message.id().to_string()));
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn contains_id(&self, id: &MessageId) -> bool {
        self.messages.iter().any(|m| m.id() == id)
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::entities::Sender;

    fn msg(id: &str, text: &str, sender: Sender) -> Message {
        Message::new(MessageId::new(id), text, sender)
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.append(msg("a", "one", Sender::User)).unwrap();
        conversation.append(msg("b", "two", Sender::Assistant)).unwrap();
        conversation.append(msg("c", "three", Sender::User)).unwrap();

        let texts: Vec<&str> = conversation.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(conversation.last().unwrap().id().as_str(), "c");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut conversation = Conversation::new();
        conversation.append(msg("a", "one", Sender::User)).unwrap();

        let err = conversation
            .append(msg("a", "again", Sender::Assistant))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateMessageId("a".to_string()));
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_from_messages() {
        let conversation = Conversation::from_messages(vec![
            msg("id1", "Hello Chatbot", Sender::User),
            msg("id2", "Hello! How can I help you", Sender::Assistant),
        ])
        .unwrap();
        assert_eq!(conversation.len(), 2);
        assert!(conversation.contains_id(&MessageId::new("id2")));
    }

    #[test]
    fn test_from_messages_with_duplicates() {
        let result = Conversation::from_messages(vec![
            msg("id1", "a", Sender::User),
            msg("id1", "b", Sender::User),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
        assert_eq!((&conversation).into_iter().count(), 0);
    }
}
