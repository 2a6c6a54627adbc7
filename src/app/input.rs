//! Text input buffer and cursor management

/// Editable text buffer backing the translation text field
#[derive(Debug, Default)]
pub struct InputState {
    /// Input buffer
    pub buffer: String,

    /// Cursor position within `buffer` (byte offset)
    pub cursor: usize,
}

impl InputState {
    /// Create an empty input state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Clear the input buffer and reset cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Set the input buffer content and move cursor to end
    pub fn set(&mut self, content: String) {
        self.cursor = content.len();
        self.buffer = content;
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.buffer[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.buffer.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to the start of the buffer
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the buffer
    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Split the buffer at the cursor
    #[must_use]
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }
}
