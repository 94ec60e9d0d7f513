//! **roster** -- a debounced people-search autocomplete for the terminal.
//!
//! This is the umbrella crate; one dependency brings in the runtime and the
//! widget:
//!
//! ```toml
//! [dependencies]
//! roster = "0.1"
//! ```
//!
//! * Everything public in [`roster_core`] is available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Debouncer`], [`Program`],
//!   [`run`], [`run_with`], and so on).
//! * The [`widgets`] module re-exports [`roster_widgets`], home of
//!   [`Autocomplete`](widgets::Autocomplete) and [`Person`](widgets::Person).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so hosts do not
//!   need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use roster::widgets::{autocomplete, Autocomplete, Person};
//! use roster::{Command, Component, Model, Subscription};
//! use ratatui::Frame;
//!
//! struct App {
//!     search: Autocomplete,
//!     chosen: Option<Person>,
//! }
//!
//! enum Msg {
//!     Search(autocomplete::Message),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = Vec<Person>;
//!
//!     fn init(people: Vec<Person>) -> (Self, Command<Msg>) {
//!         let app = App { search: Autocomplete::new(people), chosen: None };
//!         (app, Command::message(Msg::Search(autocomplete::Message::Focus)))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Search(autocomplete::Message::Selected(person)) => {
//!                 self.chosen = person;
//!                 Command::none()
//!             }
//!             Msg::Search(m) => self.search.update(m).map(Msg::Search),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.search.view(frame, area);
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         self.search
//!             .subscriptions()
//!             .into_iter()
//!             .map(|sub| sub.map(Msg::Search))
//!             .collect()
//!     }
//! }
//! ```
//!
//! A complete host with keyboard and mouse input lives in
//! `demos/people_picker.rs` (`cargo run --example people_picker`).

pub use roster_core::*;
pub mod widgets {
    pub use roster_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
