//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard, mouse, resize,
//!   focus, and paste events from the terminal.
//! - **One-shot timers** ([`After`]) -- the building block for
//!   [`Debouncer`](crate::debounce::Debouncer).

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
