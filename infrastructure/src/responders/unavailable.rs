//! Responder that never answers

use async_trait::async_trait;
use chatpane_application::{Responder, ResponderError};
use chatpane_domain::Message;

/// Always fails with [`ResponderError::Unavailable`]
#[derive(Debug, Default)]
pub struct UnavailableResponder;

impl UnavailableResponder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Responder for UnavailableResponder {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn reply(&self, _conversation: &[Message]) -> Result<String, ResponderError> {
        Err(ResponderError::Unavailable(
            "responder disabled by configuration".to_string(),
        ))
    }
}
