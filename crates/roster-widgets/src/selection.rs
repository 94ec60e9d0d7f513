//! Highlight and scroll state for the suggestion list.

/// Tracks the highlighted row and scroll offset for `count` items of which
/// `visible` fit on screen.
#[derive(Debug, Clone)]
pub struct SelectionState {
    cursor: usize,
    offset: usize,
    count: usize,
    visible: usize,
}

impl SelectionState {
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            visible,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Replace the item count and go back to the first row.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.ensure_visible();
    }

    /// Move up, wrapping to the last row.
    pub fn move_up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.count - 1
        } else {
            self.cursor - 1
        };
        self.ensure_visible();
    }

    /// Move down, wrapping to the first row.
    pub fn move_down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= self.count {
            0
        } else {
            self.cursor + 1
        };
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.visible == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut s = SelectionState::new(3, 8);
        s.move_up();
        assert_eq!(s.cursor(), 2);
        s.move_down();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut s = SelectionState::new(5, 2);
        s.move_down();
        s.move_down();
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.offset(), 1);
        s.move_up();
        s.move_up();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut s = SelectionState::new(0, 4);
        s.move_down();
        s.move_up();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn reset_returns_to_top() {
        let mut s = SelectionState::new(5, 2);
        s.move_up();
        s.reset(1);
        assert_eq!((s.cursor(), s.offset()), (0, 0));
    }
}
