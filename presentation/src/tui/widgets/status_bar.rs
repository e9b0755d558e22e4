//! Status bar widget: pending indicator + key hints + flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &str = "Enter:send  ↑↓/PgUp/PgDn:scroll  Esc:quit";

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: ready / waiting indicator
        let (indicator, color) = match self.state.pending_replies {
            0 => (" READY ".to_string(), Color::Green),
            n => (
                format!(" {} WAITING ({}) ", self.state.spinner(), n),
                Color::Yellow,
            ),
        };
        let indicator_width = Span::raw(indicator.as_str()).width() as u16;
        let indicator_line = Line::from(Span::styled(
            indicator,
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Right: flash message, or key hints, right-aligned
        let (right_text, right_color) = match self.state.flash() {
            Some(flash) => (flash, Color::LightRed),
            None => (HINTS, Color::White),
        };
        let right_width = Span::raw(right_text).width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(right_color).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
