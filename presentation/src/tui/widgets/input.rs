//! Input widget: text input area with a state-aware prompt
//!
//! Multiline input is split on `\n` and rendered as one `Line` per text
//! line. The prompt is shown on the first line only; continuation lines get
//! a "  " indent.

use crate::tui::input_field::{InputField, InputState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const CONTINUATION: &str = "  ";

pub struct InputWidget<'a> {
    field: &'a InputField,
}

impl<'a> InputWidget<'a> {
    pub fn new(field: &'a InputField) -> Self {
        Self { field }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Submitting an empty field does nothing, so dim it
        let (color, title) = match self.field.state() {
            InputState::Empty => (Color::DarkGray, " Message "),
            InputState::HasText => (Color::Green, " Message (Enter to send) "),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        let text = self.field.text();
        let cursor = self.field.cursor();
        let lines = build_lines(text, cursor, color);

        // Keep the cursor line visible when the text outgrows the box
        let inner_height = area.height.saturating_sub(2) as usize;
        let cursor_line = text[..cursor].matches('\n').count();
        let scroll = (cursor_line + 1).saturating_sub(inner_height);

        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}

/// Build prompt-prefixed lines with a block cursor
fn build_lines(text: &str, cursor: usize, color: Color) -> Vec<Line<'static>> {
    let prefix_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let cursor_style = Style::default().fg(Color::Black).bg(color);
    let text_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    let mut line_start = 0;

    for (i, line_text) in text.split('\n').enumerate() {
        let line_end = line_start + line_text.len();
        let prefix = if i == 0 { PROMPT } else { CONTINUATION };
        let mut spans = vec![Span::styled(prefix, prefix_style)];

        if (line_start..=line_end).contains(&cursor) {
            let (before, after) = line_text.split_at(cursor - line_start);
            spans.push(Span::styled(before.to_string(), text_style));

            let mut rest = after.chars();
            match rest.next() {
                // Cursor at end of line: block cursor on a space
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    spans.push(Span::styled(ch.to_string(), cursor_style));
                    spans.push(Span::styled(rest.as_str().to_string(), text_style));
                }
            }
        } else {
            spans.push(Span::styled(line_text.to_string(), text_style));
        }

        lines.push(Line::from(spans));
        line_start = line_end + 1;
    }

    lines
}
