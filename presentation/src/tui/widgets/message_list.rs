//! Message list: the scrolling conversation pane
//!
//! The list remembers which store revision it last drew. When the revision
//! changes (a message was appended) the view snaps to the bottom so the
//! newest message is visible. Manual scrolling only lasts until the next
//! append.

use super::message_row::render_message;
use crate::config::IconSet;
use chatpane_domain::Message;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, StatefulWidget, Widget, Wrap},
};

const EMPTY_HINT: &str = "No messages yet. Type below and press Enter.";

#[derive(Debug, Default, Clone)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    offset: usize,
    /// Total content height (in lines)
    content_height: usize,
    viewport_height: usize,
    /// Store revision reflected by the last render
    rendered_revision: Option<u64>,
    /// Keep following the bottom across resizes
    pinned: bool,
}

impl MessageListState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn rendered_revision(&self) -> Option<u64> {
        self.rendered_revision
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        self.pinned = self.is_at_bottom();
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
        self.pinned = self.is_at_bottom();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.pinned = self.is_at_bottom();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.pinned = true;
    }

    /// Record the measured geometry and settle the scroll position.
    ///
    /// A revision the list has not drawn yet moves the view to the bottom;
    /// otherwise the offset is only clamped to the new geometry.
    pub fn settle(&mut self, revision: u64, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;

        if self.rendered_revision != Some(revision) {
            self.rendered_revision = Some(revision);
            self.scroll_to_bottom();
        } else if self.pinned {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}

/// Widget for rendering the ordered message list
pub struct MessageList<'a> {
    messages: &'a [Message],
    icons: &'a IconSet,
    revision: u64,
    block: Option<Block<'a>>,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], icons: &'a IconSet, revision: u64) -> Self {
        Self {
            messages,
            icons,
            revision,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = self.block.unwrap_or_default();
        let inner = block.inner(area);

        if self.messages.is_empty() {
            state.settle(self.revision, 0, inner.height as usize);
            let hint = Line::styled(
                EMPTY_HINT,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
            Paragraph::new(hint)
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        // Measure each row on its own, wrapped exactly the way it is drawn.
        // Wrapping never crosses lines, so the rows add up to the whole list.
        let wrap = Wrap { trim: false };
        let rows: Vec<(Vec<Line<'static>>, usize)> = self
            .messages
            .iter()
            .map(|message| {
                let lines = render_message(message, self.icons);
                let height = Paragraph::new(lines.clone()).wrap(wrap).line_count(inner.width);
                (lines, height)
            })
            .collect();
        let content_height = rows.iter().map(|(_, height)| height).sum();
        state.settle(self.revision, content_height, inner.height as usize);

        // Only hand the visible window to the paragraph, so the residual
        // scroll stays within one row no matter how long the list grows.
        let (lines, scroll) = visible_window(rows, state.offset, inner.height as usize);
        Paragraph::new(lines)
            .wrap(wrap)
            .block(block)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}

/// Lines of the rows that overlap `offset..offset + viewport_height`, and
/// the scroll left over inside the first of them
fn visible_window(
    rows: Vec<(Vec<Line<'static>>, usize)>,
    offset: usize,
    viewport_height: usize,
) -> (Vec<Line<'static>>, usize) {
    let end = offset.saturating_add(viewport_height);
    let mut top = 0;
    let mut skipped = 0;
    let mut lines = Vec::new();

    for (row, height) in rows {
        if top >= end {
            break;
        }
        if top + height <= offset {
            skipped += height;
        } else {
            lines.extend(row);
        }
        top += height;
    }

    (lines, offset - skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_domain::{MessageId, Sender};
    use ratatui::widgets::Borders;

    fn seeded() -> Vec<Message> {
        vec![
            Message::new(MessageId::new("id1"), "Hello Chatbot", Sender::User),
            Message::new(MessageId::new("id2"), "Hello! How can I help you", Sender::Assistant),
            Message::new(MessageId::new("id3"), "can u get me todays date", Sender::User),
            Message::new(MessageId::new("id4"), "Today is October 10, 2023", Sender::Assistant),
        ]
    }

    fn numbered(count: usize) -> Vec<Message> {
        (0..count)
            .map(|i| {
                Message::new(
                    MessageId::new(format!("m{i}")),
                    format!("message {i}"),
                    Sender::User,
                )
            })
            .collect()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn find_row(buf: &Buffer, needle: &str) -> Option<u16> {
        (0..buf.area.height).find(|&y| row(buf, y).contains(needle))
    }

    fn draw(
        messages: &[Message],
        revision: u64,
        state: &mut MessageListState,
        width: u16,
        height: u16,
    ) -> Buffer {
        let icons = IconSet::new("U", "A");
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        MessageList::new(messages, &icons, revision)
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_seeded_conversation_renders_in_order() {
        let messages = seeded();
        let mut state = MessageListState::default();
        let buf = draw(&messages, 0, &mut state, 40, 12);

        let ys: Vec<u16> = messages
            .iter()
            .map(|m| find_row(&buf, m.text()).unwrap())
            .collect();
        assert!(ys.windows(2).all(|pair| pair[0] < pair[1]), "rows out of order: {ys:?}");

        // Alternating variants: user on the right, assistant on the left
        for (message, y) in messages.iter().zip(&ys) {
            let line = row(&buf, *y);
            let inner = line.trim_matches('│');
            match message.sender() {
                Sender::User => {
                    assert!(inner.trim_end().ends_with(&format!("{} U", message.text())));
                }
                Sender::Assistant => {
                    assert!(inner.starts_with(&format!("A {}", message.text())));
                }
            }
        }
    }

    #[test]
    fn test_every_message_drawn_once() {
        let messages = numbered(3);
        let mut state = MessageListState::default();
        let buf = draw(&messages, 0, &mut state, 30, 10);

        for message in &messages {
            let hits = (0..buf.area.height)
                .filter(|&y| row(&buf, y).contains(message.text()))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_first_render_starts_at_bottom() {
        let messages = numbered(10);
        let mut state = MessageListState::default();
        let buf = draw(&messages, 0, &mut state, 30, 6);

        // 10 rows * 2 lines, 4 visible
        assert_eq!(state.content_height(), 20);
        assert!(state.is_at_bottom());
        assert_eq!(state.offset(), 16);
        assert!(find_row(&buf, "message 9").is_some());
        assert!(find_row(&buf, "message 0").is_none());
    }

    #[test]
    fn test_snaps_to_bottom_after_every_append() {
        let mut messages = numbered(10);
        let mut state = MessageListState::default();
        draw(&messages, 0, &mut state, 30, 6);

        for revision in 1..=3u64 {
            state.scroll_to_top();
            assert!(!state.is_at_bottom());

            messages.push(Message::new(
                MessageId::generate(),
                format!("appended {revision}"),
                Sender::Assistant,
            ));
            let buf = draw(&messages, revision, &mut state, 30, 6);

            assert!(state.is_at_bottom());
            assert_eq!(state.rendered_revision(), Some(revision));
            assert!(find_row(&buf, &format!("appended {revision}")).is_some());
        }
    }

    #[test]
    fn test_manual_scroll_kept_without_append() {
        let messages = numbered(10);
        let mut state = MessageListState::default();
        draw(&messages, 0, &mut state, 30, 6);

        state.scroll_up(5);
        draw(&messages, 0, &mut state, 30, 6);
        assert_eq!(state.offset(), 11);

        state.page_down();
        state.page_down();
        assert!(state.is_at_bottom());
    }

    #[test]
    fn test_bottom_visible_past_u16_lines() {
        // 2 lines per row, well past what a u16 scroll can reach
        let messages = numbered(40_000);
        let mut state = MessageListState::default();
        let buf = draw(&messages, 0, &mut state, 30, 6);

        assert_eq!(state.content_height(), 80_000);
        assert_eq!(state.offset(), 79_996);
        assert!(find_row(&buf, "message 39999").is_some());
        assert!(find_row(&buf, "message 39997").is_none());

        state.scroll_up(70_000);
        let buf = draw(&messages, 0, &mut state, 30, 6);
        assert_eq!(state.offset(), 9_996);
        assert!(find_row(&buf, "message 4998").is_some());
        assert!(find_row(&buf, "message 39999").is_none());
    }

    #[test]
    fn test_window_starts_mid_row() {
        let rows = vec![
            (vec![Line::from("a1"), Line::from("a2")], 2),
            (vec![Line::from("b1"), Line::from("b2"), Line::from("b3")], 3),
            (vec![Line::from("c1")], 1),
            (vec![Line::from("d1")], 1),
        ];

        let (lines, scroll) = visible_window(rows, 3, 2);
        let text: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(text, vec!["b1", "b2", "b3"]);
        assert_eq!(scroll, 1);
    }

    #[test]
    fn test_wrapped_lines_counted() {
        let messages = vec![Message::new(
            MessageId::new("long"),
            "word ".repeat(20),
            Sender::Assistant,
        )];
        let mut state = MessageListState::default();
        draw(&messages, 0, &mut state, 22, 6);

        // 100 chars in a 20-wide pane wraps onto several lines
        assert!(state.content_height() > 2);
        assert!(state.is_at_bottom());
    }

    #[test]
    fn test_empty_list_renders_hint() {
        let mut state = MessageListState::default();
        let buf = draw(&[], 0, &mut state, 60, 5);

        assert_eq!(state.content_height(), 0);
        assert_eq!(state.offset(), 0);
        assert!(find_row(&buf, "No messages yet").is_some());
    }

    #[test]
    fn test_missing_icons_render_rows() {
        let messages = seeded();
        let icons = IconSet::none();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let mut state = MessageListState::default();
        MessageList::new(&messages, &icons, 0).render(area, &mut buf, &mut state);

        assert!(find_row(&buf, "Hello Chatbot").is_some());
        assert!(find_row(&buf, "Today is October 10, 2023").is_some());
    }
}
