//! Header widget: responder name and message count

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    responder: &'a str,
    message_count: usize,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(responder: &'a str, message_count: usize) -> Self {
        Self {
            responder,
            message_count,
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let noun = if self.message_count == 1 {
            "message"
        } else {
            "messages"
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.responder,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} {}", self.message_count, noun),
                Style::default().fg(Color::White),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" chatpane ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
