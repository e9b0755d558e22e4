//! Responder adapters
//!
//! Local implementations of the [`Responder`] port. None of them touch the
//! network; they stand in for a real assistant backend.

mod echo;
mod rules;
mod unavailable;

pub use echo::EchoResponder;
pub use rules::{ReplyRule, RuleResponder};
pub use unavailable::UnavailableResponder;

use crate::config::FileResponderConfig;
use chatpane_application::Responder;
use chatpane_domain::{Message, Sender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Which responder adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderKind {
    /// Keyword rules with canned replies (default)
    #[default]
    Rules,
    /// Repeat the user's message back
    Echo,
    /// Always fail, to exercise the no-reply path
    Unavailable,
}

impl ResponderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Echo => "echo",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the responder selected by `kind` from its configuration
pub fn build_responder(kind: ResponderKind, config: &FileResponderConfig) -> Arc<dyn Responder> {
    let delay = Duration::from_millis(config.reply_delay_ms);
    info!(responder = %kind, delay_ms = config.reply_delay_ms, "Building responder");

    match kind {
        ResponderKind::Rules => {
            // Invalid rules are reported by FileConfig::validate()
            let (rules, _) = config.to_rules();
            Arc::new(RuleResponder::new(rules, config.fallback.clone()).with_delay(delay))
        }
        ResponderKind::Echo => Arc::new(EchoResponder::new().with_delay(delay)),
        ResponderKind::Unavailable => Arc::new(UnavailableResponder::new()),
    }
}

/// Text of the most recent user message, if any
pub(crate) fn latest_user_text(conversation: &[Message]) -> Option<&str> {
    conversation
        .iter()
        .rev()
        .find(|m| m.sender() == Sender::User)
        .map(|m| m.text())
}

/// Sleep for a simulated thinking delay (no-op when zero)
pub(crate) async fn simulate_delay(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_domain::MessageId;

    #[test]
    fn test_latest_user_text_skips_assistant() {
        let conversation = vec![
            Message::new(MessageId::new("1"), "first", Sender::User),
            Message::new(MessageId::new("2"), "second", Sender::User),
            Message::new(MessageId::new("3"), "reply", Sender::Assistant),
        ];
        assert_eq!(latest_user_text(&conversation), Some("second"));
        assert_eq!(latest_user_text(&[]), None);
    }

    #[test]
    fn test_build_responder_names() {
        let config = FileResponderConfig::default();
        assert_eq!(build_responder(ResponderKind::Rules, &config).name(), "rules");
        assert_eq!(build_responder(ResponderKind::Echo, &config).name(), "echo");
        assert_eq!(
            build_responder(ResponderKind::Unavailable, &config).name(),
            "unavailable"
        );
    }
}
