//! Single-line editing state behind the search input.

/// Character buffer plus cursor.
///
/// Cursor positions are char indices, so multi-byte input never splits a
/// code point.
#[derive(Debug, Default, Clone)]
pub struct TextEditState {
    chars: Vec<char>,
    cursor: usize,
}

impl TextEditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value as a String.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Current cursor position (char index, 0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Empty the buffer.  Returns true if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.chars.is_empty();
        self.chars.clear();
        self.cursor = 0;
        changed
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Insert `s` at the cursor, skipping control characters (pasted
    /// newlines, tabs).  Returns the number of chars inserted.
    pub fn insert_str(&mut self, s: &str) -> usize {
        let before = self.chars.len();
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
        self.chars.len() - before
    }

    /// Delete character before cursor (backspace).
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete character at cursor (delete key).
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}
