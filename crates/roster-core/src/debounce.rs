//! Trailing-edge debouncing as a scoped timer resource.
//!
//! A [`Debouncer`] holds at most one pending value.  While a value is
//! pending it declares a one-shot [`After`] subscription whose id is unique to
//! the debouncer instance and the current generation.  Because the runtime
//! reconciles subscriptions by id, every [`push`](Debouncer::push) aborts the
//! superseded timer and starts a new one, and a debouncer that stops being
//! declared (cancelled, replaced, or dropped with its component) has its timer
//! aborted.  [`settle`](Debouncer::settle) additionally rejects any
//! [`DebounceTick`] that was already queued when it was superseded.
//!
//! # Example
//!
//! ```rust,ignore
//! fn update(&mut self, msg: Msg) -> Command<Msg> {
//!     match msg {
//!         Msg::Typed(text) => { self.debounce.push(text); }
//!         Msg::Quiet(tick) => {
//!             if let Some(text) = self.debounce.settle(tick) {
//!                 self.applied = text;
//!             }
//!         }
//!     }
//!     Command::none()
//! }
//!
//! fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!     self.debounce.subscription(Msg::Quiet).into_iter().collect()
//! }
//! ```

use crate::subscription::{subscribe, Subscription};
use crate::subscriptions::After;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Proof that a debounce timer elapsed.
///
/// Carries the identity of the debouncer and the generation it was scheduled
/// for; only the matching debouncer at the matching generation accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTick {
    instance: u64,
    generation: u64,
}

/// Delays publication of a value until `delay` has passed with no newer value.
///
/// No leading-edge publication and no max-wait cap.
#[derive(Debug)]
pub struct Debouncer<T> {
    instance: u64,
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with its own identity.
    pub fn new(delay: Duration) -> Self {
        Self {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of values pushed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value that will be published if nothing newer arrives.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// The tick the currently scheduled timer will deliver, if any.
    pub fn pending_tick(&self) -> Option<DebounceTick> {
        self.pending.as_ref().map(|_| self.current_tick())
    }

    /// Schedule `value`, superseding whatever was pending.
    pub fn push(&mut self, value: T) {
        self.generation += 1;
        self.pending = Some(value);
        tracing::trace!(
            instance = self.instance,
            generation = self.generation,
            delay_ms = self.delay.as_millis() as u64,
            "debounce scheduled"
        );
    }

    /// Drop the pending value, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        let dropped = self.pending.take();
        if dropped.is_some() {
            tracing::trace!(
                instance = self.instance,
                generation = self.generation,
                "debounce cancelled"
            );
        }
        dropped
    }

    /// Accept a timer firing.
    ///
    /// Returns the pending value when `tick` belongs to this debouncer and to
    /// the latest push; anything else is stale and yields `None`.
    pub fn settle(&mut self, tick: DebounceTick) -> Option<T> {
        if tick != self.current_tick() {
            tracing::trace!(
                instance = self.instance,
                generation = self.generation,
                stale_generation = tick.generation,
                "ignoring stale debounce tick"
            );
            return None;
        }
        let value = self.pending.take();
        if value.is_some() {
            tracing::trace!(
                instance = self.instance,
                generation = self.generation,
                "debounce settled"
            );
        }
        value
    }

    /// The timer subscription for the pending value, if there is one.
    pub fn subscription<Msg: Send + 'static>(
        &self,
        map: impl Fn(DebounceTick) -> Msg + Send + Sync + 'static,
    ) -> Option<Subscription<Msg>> {
        let tick = self.pending_tick()?;
        let mut hasher = DefaultHasher::new();
        tick.hash(&mut hasher);
        Some(subscribe(After::keyed(self.delay, hasher.finish())).map(move |_| map(tick)))
    }

    fn current_tick(&self) -> DebounceTick {
        DebounceTick {
            instance: self.instance,
            generation: self.generation,
        }
    }
}
