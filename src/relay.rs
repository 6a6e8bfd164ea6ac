//! In-process streaming relay: fans decoded records out to subscribers.
//!
//! Built on a bounded `tokio::sync::broadcast` channel. Telemetry is
//! latest-value-biased, so a subscriber that falls behind loses the oldest
//! queued updates (the channel overwrites them) rather than growing an
//! unbounded backlog or stalling the receive loop. Subscribers connect and
//! disconnect freely during an in-flight broadcast.

use std::time::Duration;

use futures::Stream;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::StreamExt;
use tracing::trace;

use crate::sink::{PacketSink, TelemetryUpdate};
use crate::stream::ThrottleExt;

/// Nominal inbound rate of the game's telemetry stream.
const SOURCE_HZ: f64 = 60.0;

/// Update rate requested by a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpdateRate {
    /// Every update the relay publishes (~60Hz inbound).
    Native,
    /// At most `hz` updates per second, latest-wins. Rates at or above the
    /// source rate collapse to `Native`; `Max(0)` is clamped to `Max(1)`.
    Max(u32),
}

impl UpdateRate {
    /// Normalize against the source frequency.
    pub fn normalize(self) -> Self {
        match self {
            UpdateRate::Native => UpdateRate::Native,
            UpdateRate::Max(0) => UpdateRate::Max(1),
            UpdateRate::Max(hz) if hz as f64 >= SOURCE_HZ => UpdateRate::Native,
            UpdateRate::Max(hz) => UpdateRate::Max(hz),
        }
    }

    /// Throttle interval, if throttling is needed.
    pub fn throttle_interval(self) -> Option<Duration> {
        match self.normalize() {
            UpdateRate::Native => None,
            UpdateRate::Max(hz) => Some(Duration::from_secs_f64(1.0 / hz as f64)),
        }
    }
}

/// Broadcast relay between the receive loop and its subscribers.
#[derive(Debug, Clone)]
pub struct TelemetryRelay {
    tx: broadcast::Sender<TelemetryUpdate>,
}

impl TelemetryRelay {
    /// Create a relay whose per-subscriber queue holds at most `capacity`
    /// updates before laggards start losing the oldest ones.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish one update to all current subscribers. Never blocks; with no
    /// subscribers the update is discarded.
    pub fn publish(&self, update: TelemetryUpdate) {
        let _ = self.tx.send(update);
    }

    /// Subscribe at the native rate.
    ///
    /// Lag is absorbed inside the stream: when a subscriber falls behind,
    /// the skipped count is traced and the stream resumes at the oldest
    /// retained update.
    pub fn subscribe(&self) -> impl Stream<Item = TelemetryUpdate> + Send + 'static {
        BroadcastStream::new(self.tx.subscribe()).filter_map(|item| match item {
            Ok(update) => Some(update),
            Err(BroadcastStreamRecvError::Lagged(missed)) => {
                trace!(missed, "slow subscriber dropped updates");
                None
            }
        })
    }

    /// Subscribe with an update-rate cap, latest-wins within each interval.
    pub fn subscribe_at(
        &self,
        rate: UpdateRate,
    ) -> std::pin::Pin<Box<dyn Stream<Item = TelemetryUpdate> + Send + 'static>> {
        match rate.throttle_interval() {
            None => Box::pin(self.subscribe()),
            // Qualified call: tokio-stream's StreamExt also has a throttle.
            Some(interval) => Box::pin(ThrottleExt::throttle(self.subscribe(), interval)),
        }
    }
}

#[async_trait::async_trait]
impl PacketSink for TelemetryRelay {
    async fn deliver(&self, update: TelemetryUpdate) {
        self.publish(update);
    }
}
