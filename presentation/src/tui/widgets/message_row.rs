//! Message row: maps one message to the lines the list draws for it
//!
//! User messages sit on the right with their icon trailing; assistant
//! messages sit on the left with their icon leading.

use crate::config::IconSet;
use chatpane_domain::{Message, Sender};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
};

/// Visual variant of a row, chosen by sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVariant {
    /// Sent by the user (right-aligned)
    Outgoing,
    /// Sent by the assistant (left-aligned)
    Incoming,
}

impl RowVariant {
    pub fn for_sender(sender: Sender) -> Self {
        match sender {
            Sender::User => Self::Outgoing,
            Sender::Assistant => Self::Incoming,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Self::Outgoing => Alignment::Right,
            Self::Incoming => Alignment::Left,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Outgoing => Color::Cyan,
            Self::Incoming => Color::Green,
        }
    }
}

/// Render one message as styled lines, followed by a blank spacer line
pub fn render_message(message: &Message, icons: &IconSet) -> Vec<Line<'static>> {
    let variant = RowVariant::for_sender(message.sender());
    let icon = icons.for_sender(message.sender());
    let style = Style::default().fg(variant.color());

    // Continuation lines get blank padding as wide as "icon + space"
    let padding = icon.map(|glyph| " ".repeat(Span::raw(glyph).width() + 1));

    let mut lines: Vec<Line<'static>> = message
        .text()
        .split('\n')
        .enumerate()
        .map(|(i, text)| {
            let body = Span::styled(text.to_string(), style);
            let gutter = match (icon, &padding) {
                (Some(glyph), _) if i == 0 => Some(match variant {
                    RowVariant::Outgoing => format!(" {}", glyph),
                    RowVariant::Incoming => format!("{} ", glyph),
                }),
                (_, Some(pad)) => Some(pad.clone()),
                _ => None,
            };

            let spans = match (variant, gutter) {
                (_, None) => vec![body],
                (RowVariant::Outgoing, Some(gutter)) => vec![body, Span::raw(gutter)],
                (RowVariant::Incoming, Some(gutter)) => vec![Span::raw(gutter), body],
            };
            Line::from(spans).alignment(variant.alignment())
        })
        .collect();

    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_domain::MessageId;

    fn msg(text: &str, sender: Sender) -> Message {
        Message::new(MessageId::new("m"), text, sender)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_user_row_right_aligned_icon_trailing() {
        let lines = render_message(&msg("hello", Sender::User), &IconSet::new("U", "A"));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(line_text(&lines[0]), "hello U");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_assistant_row_left_aligned_icon_leading() {
        let lines = render_message(&msg("hi there", Sender::Assistant), &IconSet::new("U", "A"));

        assert_eq!(lines[0].alignment, Some(Alignment::Left));
        assert_eq!(line_text(&lines[0]), "A hi there");
        assert_eq!(lines[0].spans[1].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_missing_icon_still_renders() {
        let lines = render_message(&msg("hello", Sender::User), &IconSet::none());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(line_text(&lines[0]), "hello");
    }

    #[test]
    fn test_multiline_icon_on_first_line_only() {
        let lines = render_message(&msg("one\ntwo", Sender::Assistant), &IconSet::new("U", "AB"));

        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "AB one");
        assert_eq!(line_text(&lines[1]), "   two");
    }

    #[test]
    fn test_spacer_after_row() {
        let lines = render_message(&msg("x", Sender::User), &IconSet::none());
        assert!(lines.last().is_some_and(|line| line.spans.is_empty()));
    }

    #[test]
    fn test_variant_for_sender() {
        assert_eq!(RowVariant::for_sender(Sender::User), RowVariant::Outgoing);
        assert_eq!(RowVariant::for_sender(Sender::Assistant), RowVariant::Incoming);
    }
}
