//! Transcript formatter

use chatpane_domain::{Conversation, Sender, TranscriptFormat};
use colored::Colorize;

/// Formats a finished conversation for stdout
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Format in the requested format; `None` for [`TranscriptFormat::None`]
    pub fn format(
        conversation: &Conversation,
        format: TranscriptFormat,
    ) -> Result<Option<String>, serde_json::Error> {
        match format {
            TranscriptFormat::None => Ok(None),
            TranscriptFormat::Text => Ok(Some(Self::format_text(conversation))),
            TranscriptFormat::Json => Self::format_json(conversation).map(Some),
        }
    }

    /// One `[sender] text` block per message
    pub fn format_text(conversation: &Conversation) -> String {
        let mut output = String::new();
        for message in conversation {
            let label = format!("[{}]", message.sender());
            let label = match message.sender() {
                Sender::User => label.cyan().bold(),
                Sender::Assistant => label.green().bold(),
            };

            let mut lines = message.text().lines();
            output.push_str(&format!("{} {}\n", label, lines.next().unwrap_or_default()));
            // Indent continuation lines under the text
            let indent = " ".repeat(message.sender().as_str().len() + 3);
            for line in lines {
                output.push_str(&format!("{}{}\n", indent, line));
            }
        }
        output
    }

    /// Pretty-printed JSON array of `{id, message, sender}`
    pub fn format_json(conversation: &Conversation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(conversation.messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_domain::{Message, MessageId};

    fn conversation() -> Conversation {
        Conversation::from_messages(vec![
            Message::new(MessageId::new("id1"), "Hello Chatbot", Sender::User),
            Message::new(MessageId::new("id2"), "line one\nline two", Sender::Assistant),
        ])
        .unwrap()
    }

    #[test]
    fn test_none_prints_nothing() {
        let out = TranscriptFormatter::format(&conversation(), TranscriptFormat::None).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_text_format() {
        colored::control::set_override(false);
        let out = TranscriptFormatter::format_text(&conversation());
        assert_eq!(
            out,
            "[user] Hello Chatbot\n[assistant] line one\n            line two\n"
        );
    }

    #[test]
    fn test_json_format() {
        let out = TranscriptFormatter::format(&conversation(), TranscriptFormat::Json)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["id"], "id1");
        assert_eq!(value[0]["sender"], "user");
        assert_eq!(value[1]["message"], "line one\nline two");
        assert_eq!(value[1]["sender"], "assistant");
    }
}
