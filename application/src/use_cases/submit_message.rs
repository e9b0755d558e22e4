//! Submit Message use case
//!
//! Turns raw input into a user message, asks the responder for a reply,
//! and appends the reply as an assistant message.
//!
//! The flow is split in three steps so the UI can keep accepting input
//! while a reply is pending:
//!
//! ```text
//! begin(store, raw)  ──► ReplyRequest ──► reply(request) (spawned)
//!                                              │
//! complete(store, outcome) ◄── ReplyOutcome ◄──┘
//! ```
//!
//! Only `begin` and `complete` touch the store, and both run on the UI
//! loop, so appends are always serialized.

use crate::config::BehaviorConfig;
use crate::ports::responder::{Responder, ResponderError};
use crate::store::MessageStore;
use chatpane_domain::{Message, MessageId, MessageText};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A reply to be produced for a freshly appended user message
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    /// Id of the user message that triggered the request
    pub user_message: MessageId,
    /// The conversation as it was right after the user message was appended
    pub conversation: Vec<Message>,
}

/// Result of asking the responder for a reply
#[derive(Debug, Clone)]
pub struct ReplyOutcome {
    pub user_message: MessageId,
    pub result: Result<String, ResponderError>,
}

/// Overall result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty or whitespace-only; nothing changed
    Ignored,
    /// User message appended and the assistant replied
    Replied { user: MessageId, reply: MessageId },
    /// User message appended but no reply was appended
    NoReply {
        user: MessageId,
        error: ResponderError,
    },
}

/// Use case for submitting a message and collecting the reply
pub struct SubmitMessageUseCase {
    responder: Arc<dyn Responder>,
    behavior: BehaviorConfig,
}

impl SubmitMessageUseCase {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }

    /// Validate and append the user message.
    ///
    /// Returns `None` (and leaves the store untouched) when `raw` is empty
    /// or whitespace-only.
    pub fn begin(&self, store: &mut MessageStore, raw: &str) -> Option<ReplyRequest> {
        let text = MessageText::parse(raw)?;
        let message = Message::user(text);
        let id = message.id().clone();

        if let Err(e) = store.append(message) {
            // Freshly generated ids never collide; treat it like invalid input.
            warn!("Dropping submission: {}", e);
            return None;
        }
        debug!(id = %id, "User message appended");

        Some(ReplyRequest {
            user_message: id,
            conversation: store.snapshot(),
        })
    }

    /// Ask the responder for a reply.
    ///
    /// The returned future owns everything it needs, so it can be spawned
    /// onto a task while the store keeps changing.
    pub fn reply(
        &self,
        request: ReplyRequest,
    ) -> impl Future<Output = ReplyOutcome> + Send + use<> {
        let responder = Arc::clone(&self.responder);
        let timeout = self.behavior.timeout;

        async move {
            let ReplyRequest {
                user_message,
                conversation,
            } = request;

            let result = if conversation.is_empty() {
                Err(ResponderError::EmptyConversation)
            } else {
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, responder.reply(&conversation))
                        .await
                        .unwrap_or(Err(ResponderError::Timeout)),
                    None => responder.reply(&conversation).await,
                }
            };

            ReplyOutcome {
                user_message,
                result,
            }
        }
    }

    /// Append the reply as an assistant message.
    ///
    /// Failed or blank replies append nothing. Returns the id of the
    /// appended assistant message.
    pub fn complete(&self, store: &mut MessageStore, outcome: ReplyOutcome) -> Option<MessageId> {
        let text = match outcome.result {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    user_message = %outcome.user_message,
                    responder = self.responder.name(),
                    "No reply: {}",
                    e
                );
                return None;
            }
        };

        let Some(text) = MessageText::parse(&text) else {
            warn!(
                user_message = %outcome.user_message,
                "Responder returned a blank reply"
            );
            return None;
        };

        let message = Message::assistant(text);
        let id = message.id().clone();
        match store.append(message) {
            Ok(()) => {
                info!(reply = %id, in_reply_to = %outcome.user_message, "Assistant replied");
                Some(id)
            }
            Err(e) => {
                warn!("Dropping reply: {}", e);
                None
            }
        }
    }

    /// Run the whole submission in sequence: begin, reply, complete
    pub async fn execute(&self, store: &mut MessageStore, raw: &str) -> SubmitOutcome {
        let Some(request) = self.begin(store, raw) else {
            return SubmitOutcome::Ignored;
        };
        let user = request.user_message.clone();

        let outcome = self.reply(request).await;
        let error = outcome.result.as_ref().err().cloned();

        match self.complete(store, outcome) {
            Some(reply) => SubmitOutcome::Replied { user, reply },
            None => SubmitOutcome::NoReply {
                user,
                error: error.unwrap_or_else(|| {
                    ResponderError::RequestFailed("blank reply".to_string())
                }),
            },
        }
    }
}
