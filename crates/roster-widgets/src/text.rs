//! Display-width helpers for fitting names into a row.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_width` columns, ending in `tail` when cut.
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    let (budget, suffix) = if tail_width >= max_width {
        (max_width, "")
    } else {
        (max_width - tail_width, tail)
    };

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > budget {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push_str(suffix);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate("Bob", 10, "…"), "Bob");
    }

    #[test]
    fn long_text_gets_tail() {
        assert_eq!(truncate("Alexandrine", 6, "…"), "Alexa…");
        assert_eq!(display_width(&truncate("Alexandrine", 6, "…")), 6);
    }

    #[test]
    fn wide_chars_never_overflow() {
        let cut = truncate("日本語の名前", 5, "…");
        assert!(display_width(&cut) <= 5);
    }
}
