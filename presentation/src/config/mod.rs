//! Presentation-level configuration
//!
//! Values are populated from infrastructure config at startup.

use chatpane_domain::Sender;
use std::time::Duration;

/// Icon glyphs shown next to each row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    user: Option<String>,
    assistant: Option<String>,
}

impl IconSet {
    /// Build from raw glyphs; an empty or blank glyph means "no icon"
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: non_blank(user.into()),
            assistant: non_blank(assistant.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn for_sender(&self, sender: Sender) -> Option<&str> {
        match sender {
            Sender::User => self.user.as_deref(),
            Sender::Assistant => self.assistant.as_deref(),
        }
    }
}

fn non_blank(glyph: String) -> Option<String> {
    let trimmed = glyph.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// TUI configuration
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Maximum number of text lines the input box grows to
    pub max_input_height: u16,
    /// Interval for flash expiry and the pending-reply spinner
    pub tick: Duration,
    /// How long a status flash stays visible
    pub flash_ttl: Duration,
    pub icons: IconSet,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            max_input_height: 5,
            tick: Duration::from_millis(250),
            flash_ttl: Duration::from_secs(5),
            icons: IconSet::new("🧑", "🤖"),
        }
    }
}
