//! Keyword rule responder
//!
//! Looks at the latest user message and answers with the reply of the
//! first rule whose keyword appears in it. Single-word keywords match whole
//! words; multi-word keywords match as a phrase.

use super::{latest_user_text, simulate_delay};
use async_trait::async_trait;
use chatpane_application::{Responder, ResponderError};
use chatpane_domain::Message;
use chrono::{Local, NaiveDate, NaiveTime};
use std::time::Duration;
use tracing::debug;

/// A keyword rule and its canned reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRule {
    keywords: Vec<String>,
    reply: String,
}

impl ReplyRule {
    pub fn new<S: AsRef<str>>(
        keywords: impl IntoIterator<Item = S>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| normalize(k.as_ref()))
                .filter(|k| !k.is_empty())
                .collect(),
            reply: reply.into(),
        }
    }

    /// Whether any keyword occurs in the already-normalized text
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| {
            if keyword.contains(' ') {
                format!(" {} ", normalized).contains(&format!(" {} ", keyword))
            } else {
                normalized.split(' ').any(|word| word == keyword)
            }
        })
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// Lowercase, replace punctuation with spaces, collapse runs of spaces
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '\'' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rule-based responder with `{date}` / `{time}` placeholders
pub struct RuleResponder {
    rules: Vec<ReplyRule>,
    fallback: String,
    delay: Duration,
    clock: Option<(NaiveDate, NaiveTime)>,
}

impl RuleResponder {
    pub fn new(rules: Vec<ReplyRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
            delay: Duration::ZERO,
            clock: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Pin the date and time used for placeholders
    pub fn with_clock(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.clock = Some((date, time));
        self
    }

    /// Pick the reply template for a user message
    fn select(&self, text: &str) -> &str {
        let normalized = normalize(text);
        match self.rules.iter().position(|rule| rule.matches(&normalized)) {
            Some(index) => {
                debug!(rule = index, "Reply rule matched");
                self.rules[index].reply()
            }
            None => &self.fallback,
        }
    }

    fn fill(&self, template: &str) -> String {
        if !template.contains('{') {
            return template.to_string();
        }
        let (date, time) = self.clock.unwrap_or_else(|| {
            let now = Local::now();
            (now.date_naive(), now.time())
        });
        template
            .replace("{date}", &date.format("%B %-d, %Y").to_string())
            .replace("{time}", &time.format("%H:%M").to_string())
    }
}

#[async_trait]
impl Responder for RuleResponder {
    fn name(&self) -> &str {
        "rules"
    }

    async fn reply(&self, conversation: &[Message]) -> Result<String, ResponderError> {
        let text = latest_user_text(conversation).ok_or(ResponderError::EmptyConversation)?;
        let reply = self.fill(self.select(text));
        simulate_delay(self.delay).await;
        Ok(reply)
    }
}
