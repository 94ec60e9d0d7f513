//! The candidate type the autocomplete searches over.

use serde::{Deserialize, Serialize};

/// Anything that can be matched by name.
///
/// [`filter`](crate::filter::filter) only needs a name to search, so callers
/// with their own record types can implement this instead of converting to
/// [`Person`].
pub trait Searchable {
    /// The text the query is matched against.
    fn name(&self) -> &str;
}

/// A selectable person.
///
/// Supplied by the caller and never mutated by the widget.  `slug` is the
/// caller's unique identifier; uniqueness is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub slug: String,
}

impl Person {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

impl Searchable for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Searchable for &str {
    fn name(&self) -> &str {
        self
    }
}

impl Searchable for String {
    fn name(&self) -> &str {
        self
    }
}
