//! Echo responder

use super::{latest_user_text, simulate_delay};
use async_trait::async_trait;
use chatpane_application::{Responder, ResponderError};
use chatpane_domain::Message;
use std::time::Duration;

/// Replies with the user's latest message
#[derive(Debug, Default)]
pub struct EchoResponder {
    delay: Duration,
}

impl EchoResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Responder for EchoResponder {
    fn name(&self) -> &str {
        "echo"
    }

    async fn reply(&self, conversation: &[Message]) -> Result<String, ResponderError> {
        let text = latest_user_text(conversation).ok_or(ResponderError::EmptyConversation)?;
        simulate_delay(self.delay).await;
        Ok(format!("You said: {}", text))
    }
}
