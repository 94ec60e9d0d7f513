use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Marker type for the terminal-events subscription id.
pub struct TerminalEvents;

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure returns `Some(Msg)` to forward an event to the runtime
/// or `None` to discard it.  Read errors from the terminal are dropped.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // The EventStream is created inside the task: constructing one on every
    // subscriptions() call would poke crossterm's global reader each cycle.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            tokio::spawn(async move {
                let mut events = EventStream::new();
                while let Some(result) = events.next().await {
                    let Ok(event) = result else {
                        continue;
                    };
                    if let Some(msg) = map(TerminalEvent::from(event)) {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
            })
            .abort_handle()
        }),
    }
}
