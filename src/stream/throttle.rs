//! Latest-wins stream throttling.

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

/// Extension trait adding rate capping to any stream of updates.
pub trait ThrottleExt: Stream {
    /// Emit at most one item per interval.
    ///
    /// Latest-wins: when several items arrive within one interval, only the
    /// most recent survives. That matches telemetry semantics, where a stale
    /// reading is worth less than a fresh one.
    fn throttle(self, duration: Duration) -> Throttle<Self>
    where
        Self: Sized,
    {
        Throttle::new(self, duration)
    }
}

impl<T: Stream> ThrottleExt for T {}

pin_project! {
    /// Stream combinator capping the emission rate.
    pub struct Throttle<S: Stream> {
        #[pin]
        inner: S,
        interval: Interval,
        latest: Option<S::Item>,
    }
}

impl<S: Stream> Throttle<S> {
    pub fn new(inner: S, duration: Duration) -> Self {
        let mut interval = interval(duration);
        // Skip missed ticks instead of bursting to catch up.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { inner, interval, latest: None }
    }

    /// Drain everything the inner stream has ready, keeping only the newest
    /// item. Returns true once the inner stream has ended.
    fn drain(mut inner: Pin<&mut S>, latest: &mut Option<S::Item>, cx: &mut Context<'_>) -> bool {
        loop {
            match inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => *latest = Some(item),
                Poll::Ready(None) => return true,
                Poll::Pending => return false,
            }
        }
    }
}

impl<S: Stream> Stream for Throttle<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        ready!(this.interval.poll_tick(cx));

        let ended = Self::drain(this.inner, this.latest, cx);
        match this.latest.take() {
            Some(item) => Poll::Ready(Some(item)),
            None if ended => Poll::Ready(None),
            // An idle interval emits nothing; the stream stays alive and the
            // timer or the inner stream wakes us again.
            None => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn throttle_keeps_only_the_latest_item() {
        let items = futures::stream::iter(1..=10u32);
        let mut throttled = items.throttle(Duration::from_millis(100));

        // The burst is fully buffered before the first tick completes, so
        // only the newest value comes out.
        assert_eq!(throttled.next().await, Some(10));
        assert_eq!(throttled.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn items_spread_across_intervals_all_come_through() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<u32>();
        let stream = tokio_stream::wrappers::UnboundedReceiverStream::new(rx);
        let mut throttled = stream.throttle(Duration::from_millis(50));

        tx.send(1).unwrap();
        assert_eq!(throttled.next().await, Some(1));
        tx.send(2).unwrap();
        tx.send(3).unwrap();
        assert_eq!(throttled.next().await, Some(3));
        drop(tx);
        assert_eq!(throttled.next().await, None);
    }
}
