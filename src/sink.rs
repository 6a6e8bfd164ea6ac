//! Sink trait for decoded records.

use std::sync::Arc;

use crate::dispatch::DecodeFailure;
use crate::packets::TelemetryPacket;

/// One message handed downstream per accepted datagram: either a decoded
/// record or a decode-failure descriptor. Records are shared via `Arc` so a
/// broadcast to many subscribers never copies the packet.
#[derive(Debug, Clone)]
pub enum TelemetryUpdate {
    Packet(Arc<TelemetryPacket>),
    DecodeFailure(DecodeFailure),
}

impl TelemetryUpdate {
    /// The decoded record, if this update carries one.
    pub fn packet(&self) -> Option<&TelemetryPacket> {
        match self {
            TelemetryUpdate::Packet(packet) => Some(packet),
            TelemetryUpdate::DecodeFailure(_) => None,
        }
    }
}

/// Downstream sink for the receive loop.
///
/// The receive loop is sequential, so `deliver` must be non-blocking or
/// bounded: a slow subscriber must never stall datagram intake. The relay
/// satisfies this by dropping for laggards instead of buffering.
#[async_trait::async_trait]
pub trait PacketSink: Send + Sync + 'static {
    /// Hand one update downstream. Called exactly once per accepted datagram.
    async fn deliver(&self, update: TelemetryUpdate);
}
