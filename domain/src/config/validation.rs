//! Configuration issues detected while validating loaded settings.
//!
//! Validation never aborts loading: each problem becomes a [`ConfigIssue`]
//! warning that the caller reports, and the offending entry is skipped or
//! replaced by its default.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A seeded message reuses an id already present in the seed.
    DuplicateSeedId { id: String },
    /// A seeded message has blank text.
    BlankSeedMessage { id: String },
    /// A responder rule has no usable keywords.
    EmptyRuleKeywords { index: usize },
    /// A responder rule has a blank reply.
    BlankRuleReply { index: usize },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
