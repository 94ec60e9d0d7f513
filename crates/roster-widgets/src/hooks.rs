//! Stable markers for the parts of the autocomplete a harness may locate.
//!
//! [`Autocomplete::regions`](crate::autocomplete::Autocomplete::regions)
//! reports where each visible part was drawn, tagged with one of these hooks.
//! The string forms never change between releases.

use ratatui::layout::{Position, Rect};
use std::fmt;

/// A locatable part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// The text field the query is typed into.
    SearchInput,
    /// The block holding every suggestion row.
    SuggestionsList,
    /// One suggestion row.
    SuggestionItem,
    /// The notice shown when nothing matches.
    NoSuggestionsMessage,
}

impl Hook {
    pub fn as_str(self) -> &'static str {
        match self {
            Hook::SearchInput => "search-input",
            Hook::SuggestionsList => "suggestions-list",
            Hook::SuggestionItem => "suggestion-item",
            Hook::NoSuggestionsMessage => "no-suggestions-message",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a hook was drawn.
///
/// `index` is the row's position in the filtered view for
/// [`Hook::SuggestionItem`] and `None` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub hook: Hook,
    pub area: Rect,
    pub index: Option<usize>,
}

impl Region {
    pub(crate) fn new(hook: Hook, area: Rect) -> Self {
        Self {
            hook,
            area,
            index: None,
        }
    }

    pub(crate) fn item(index: usize, area: Rect) -> Self {
        Self {
            hook: Hook::SuggestionItem,
            area,
            index: Some(index),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}
