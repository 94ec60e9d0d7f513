//! Elm-architecture runtime for **roster**.
//!
//! `roster-core` provides the traits, types, and runtime that host the
//! people-search widget: a program is a pure **init -> update -> view**
//! cycle, with side effects pushed to the edges through [`Command`]s and
//! [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal events, timers), diffed by id |
//! | [`Debouncer`] | Trailing-edge debounce expressed as a cancellable timer subscription |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |

pub mod command;
pub mod component;
pub mod debounce;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use debounce::{DebounceTick, Debouncer, DEFAULT_DELAY};
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, After};

/// Run a roster application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
