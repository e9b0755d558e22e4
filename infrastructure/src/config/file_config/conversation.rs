//! Seed conversation from TOML (`[conversation]` section)

use chatpane_domain::{
    ConfigIssue, ConfigIssueCode, Conversation, DomainError, Message, MessageId, MessageText,
    Sender,
};
use serde::{Deserialize, Serialize};

/// One seeded message
///
/// `sender` accepts `"user"`, `"assistant"` or `"robot"`; anything else
/// is shown as an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSeedMessage {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub sender: Sender,
}

impl FileSeedMessage {
    fn new(id: &str, message: &str, sender: Sender) -> Self {
        Self {
            id: id.to_string(),
            message: message.to_string(),
            sender,
        }
    }
}

/// Conversation shown when a session starts
///
/// # Example
///
/// ```toml
/// [[conversation.seed]]
/// id = "id1"
/// message = "Hello Chatbot"
/// sender = "user"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    pub seed: Vec<FileSeedMessage>,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                FileSeedMessage::new("id1", "Hello Chatbot", Sender::User),
                FileSeedMessage::new("id2", "Hello! How can I help you", Sender::Assistant),
                FileSeedMessage::new("id3", "can u get me todays date", Sender::User),
                FileSeedMessage::new("id4", "Today is October 10, 2023", Sender::Assistant),
            ],
        }
    }
}

impl FileConversationConfig {
    /// Build the seed conversation, skipping blank and duplicated entries.
    pub fn to_conversation(&self) -> (Conversation, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut conversation = Conversation::new();

        for seed in &self.seed {
            let Some(text) = MessageText::parse(&seed.message) else {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::BlankSeedMessage {
                        id: seed.id.clone(),
                    },
                    format!("conversation.seed: message '{}' is blank, entry skipped", seed.id),
                ));
                continue;
            };

            let message = Message::new(MessageId::new(&seed.id), text.into_string(), seed.sender);
            if let Err(DomainError::DuplicateMessageId(id)) = conversation.append(message) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateSeedId { id: id.clone() },
                    format!("conversation.seed: duplicate id '{}', entry skipped", id),
                ));
            }
        }

        (conversation, issues)
    }
}
