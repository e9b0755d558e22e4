//! Responder configuration from TOML (`[responder]` section)

use crate::responders::{ReplyRule, ResponderKind};
use chatpane_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// A keyword rule as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReplyRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl FileReplyRule {
    fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply: reply.to_string(),
        }
    }
}

/// Responder configuration
///
/// # Example
///
/// ```toml
/// [responder]
/// kind = "rules"            # "rules", "echo" or "unavailable"
/// timeout_seconds = 30
/// reply_delay_ms = 400
/// fallback = "Sorry, I didn't get that."
///
/// [[responder.rules]]
/// keywords = ["weather"]
/// reply = "I can't see outside, sorry!"
/// ```
///
/// Replies may contain `{date}` and `{time}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderConfig {
    pub kind: ResponderKind,
    /// Give up on a reply after this many seconds (0 disables the limit)
    pub timeout_seconds: Option<u64>,
    /// Simulated thinking time before each reply
    pub reply_delay_ms: u64,
    /// Reply used when no rule matches
    pub fallback: String,
    pub rules: Vec<FileReplyRule>,
}

impl Default for FileResponderConfig {
    fn default() -> Self {
        Self {
            kind: ResponderKind::Rules,
            timeout_seconds: Some(30),
            reply_delay_ms: 400,
            fallback: "Sorry, I didn't quite understand that. Currently, I only know how to \
                       say hello or get today's date. Let me know how I can help!"
                .to_string(),
            rules: vec![
                FileReplyRule::new(&["hello", "hi", "hey"], "Hello! How can I help you?"),
                FileReplyRule::new(&["how are you"], "Doing great! How can I help you?"),
                FileReplyRule::new(&["date", "today"], "Today is {date}"),
                FileReplyRule::new(&["time"], "It is {time}"),
                FileReplyRule::new(
                    &["thank", "thanks", "thank you"],
                    "No problem! Let me know if you need help with anything else!",
                ),
            ],
        }
    }
}

impl FileResponderConfig {
    /// Convert TOML rules, skipping rules without keywords or reply.
    pub fn to_rules(&self) -> (Vec<ReplyRule>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut rules = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let keywords: Vec<&str> = rule
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .collect();

            if keywords.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyRuleKeywords { index },
                    format!("responder.rules[{}]: no keywords, rule skipped", index),
                ));
                continue;
            }
            if rule.reply.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::BlankRuleReply { index },
                    format!("responder.rules[{}]: reply is blank, rule skipped", index),
                ));
                continue;
            }

            rules.push(ReplyRule::new(keywords, rule.reply.trim()));
        }

        (rules, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let (rules, issues) = FileResponderConfig::default().to_rules();
        assert!(issues.is_empty());
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn test_invalid_rules_skipped() {
        let config = FileResponderConfig {
            rules: vec![
                FileReplyRule::new(&["", "  "], "never used"),
                FileReplyRule::new(&["ping"], "  "),
                FileReplyRule::new(&["ping"], "pong"),
            ],
            ..Default::default()
        };

        let (rules, issues) = config.to_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyRuleKeywords { index: 0 });
        assert_eq!(issues[1].code, ConfigIssueCode::BlankRuleReply { index: 1 });
    }

    #[test]
    fn test_deserialize_kind() {
        let toml_str = r#"
kind = "echo"
reply_delay_ms = 0
"#;
        let config: FileResponderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.kind, ResponderKind::Echo);
        assert_eq!(config.reply_delay_ms, 0);
        // Unset fields keep their defaults
        assert_eq!(config.timeout_seconds, Some(30));
        assert!(!config.rules.is_empty());
    }
}
