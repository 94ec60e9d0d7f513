use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use std::time::{Duration, Instant};

/// A one-shot delay that fires once after the specified duration.
///
/// Emits a single [`Instant`] when the delay elapses, then completes.  The
/// timer runs only while it is declared: a model that stops returning it from
/// `subscriptions()` gets it aborted, and one that returns an `After` with a
/// different key gets the old one aborted and a fresh one started.
///
/// # Example
///
/// ```rust,ignore
/// use roster_core::subscription::subscribe;
/// use roster_core::subscriptions::After;
///
/// // Restart the countdown whenever `self.generation` changes.
/// let sub = subscribe(After::keyed(Duration::from_millis(300), self.generation))
///     .map(|_| Msg::Quiet);
/// ```
pub struct After {
    /// How long to wait before firing.
    pub duration: Duration,
    key: u64,
}

impl After {
    /// A delay identified by its duration alone.
    pub fn new(duration: Duration) -> Self {
        Self::keyed(duration, 0)
    }

    /// A delay identified by its duration and a caller-chosen key.
    pub fn keyed(duration: Duration, key: u64) -> Self {
        Self { duration, key }
    }
}

impl SubscriptionSource for After {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::hashed::<Self>((self.duration, self.key))
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        Box::pin(futures::stream::once(async move {
            tokio::time::sleep(self.duration).await;
            Instant::now()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn ids_differ_by_key_and_duration() {
        let ms = Duration::from_millis;
        assert_eq!(After::new(ms(10)).id(), After::keyed(ms(10), 0).id());
        assert_ne!(After::keyed(ms(10), 1).id(), After::keyed(ms(10), 2).id());
        assert_ne!(After::keyed(ms(10), 1).id(), After::keyed(ms(20), 1).id());
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once() {
        let start = tokio::time::Instant::now();
        let mut stream = After::new(Duration::from_millis(300)).stream();
        assert!(stream.next().await.is_some());
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(stream.next().await.is_none());
    }
}
