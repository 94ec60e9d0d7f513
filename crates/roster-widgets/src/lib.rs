//! Widgets for the **roster** people picker.
//!
//! [`Autocomplete`](autocomplete::Autocomplete) implements
//! [`roster_core::Component`], so it can be embedded inside any
//! [`roster_core::Model`] and placed freely within [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`autocomplete`] | Debounced search input with a suggestion dropdown |
//! | [`person`] | The [`Person`](person::Person) record and the [`Searchable`](person::Searchable) trait |
//! | [`filter`] | Case-insensitive substring filtering |
//! | [`hooks`] | Stable locators for the rendered parts |
//! | [`selection`] | Highlight and scroll state for lists |
//! | [`text_edit`] | Single-line editing buffer |
//! | [`text`] | Display-width helpers |

pub mod autocomplete;
pub mod filter;
pub mod hooks;
pub mod person;
pub mod selection;
pub mod text;
pub mod text_edit;

pub use autocomplete::Autocomplete;
pub use hooks::{Hook, Region};
pub use person::{Person, Searchable};
