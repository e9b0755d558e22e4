//! Input field: the editable buffer under the message list
//!
//! The cursor is a byte offset into the buffer, always on a char boundary.

/// Whether the field holds anything worth submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Nothing but whitespace; submit is a no-op
    Empty,
    HasText,
}

#[derive(Debug, Clone, Default)]
pub struct InputField {
    buffer: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InputState {
        if self.buffer.trim().is_empty() {
            InputState::Empty
        } else {
            InputState::HasText
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a newline at the cursor
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor (Backspace)
    pub fn delete_char(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Number of text lines, counting a trailing newline as an empty line
    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }

    /// Empty the buffer after a successful submit
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}
