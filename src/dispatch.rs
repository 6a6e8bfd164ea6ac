//! Per-datagram classification and decoding.
//!
//! The dispatcher is stateless across datagrams: each receive is classified
//! by its header, decoded against the layout registry, and routed exactly
//! once. Failure policy follows the protocol's latest-value bias:
//!
//! - truncated header or body: the datagram is dropped and a failure
//!   descriptor is emitted for observability;
//! - unknown packet id: dropped with a debug signal only, since newer game
//!   versions may legitimately send ids we do not know;
//! - unknown event tag: the event record is degraded (header and raw tag
//!   kept, payload absent) rather than dropped, because the notification is
//!   still useful without its details.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::packets::{
    CarSetupPacket, CarStatusPacket, CarTelemetryPacket, EventPacket, EventPayload,
    LapDataPacket, MotionPacket, PacketHeader, PacketKind, ParticipantsPacket, SessionPacket,
    TelemetryPacket,
};
use crate::packets::event::RawEvent;
use crate::schema::LayoutRegistry;
use crate::{Result, TelemetryError};

/// Serializable descriptor of one dropped datagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeFailure {
    /// Raw packet id, when the header decoded far enough to know it.
    pub packet_id: Option<u8>,
    pub datagram_len: usize,
    pub detail: String,
}

/// Outcome of processing one datagram.
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// Fully (or, for events with unknown tags, partially) decoded record.
    Packet(TelemetryPacket),
    /// Datagram dropped; descriptor for the error channel.
    Failure(DecodeFailure),
    /// Unknown packet kind, dropped silently apart from the debug signal.
    Skipped { id: u8 },
}

/// Classifies datagrams and decodes them into typed records.
#[derive(Debug, Clone)]
pub struct PacketDispatcher {
    registry: Arc<LayoutRegistry>,
}

impl PacketDispatcher {
    pub fn new(registry: Arc<LayoutRegistry>) -> Self {
        Self { registry }
    }

    /// Decode one datagram into a typed record.
    ///
    /// Pure and allocation-local: the record copies everything it needs, so
    /// the caller may reuse the buffer immediately. Datagrams longer than
    /// the registry length are tolerated; only the known prefix is read.
    pub fn decode(&self, datagram: &[u8]) -> Result<TelemetryPacket> {
        let header = PacketHeader::decode(datagram)?;
        let layout = self.registry.layout_for_id(header.packet_id)?;
        let kind = layout.kind;

        let required = layout.encoded_len();
        if datagram.len() < required {
            return Err(TelemetryError::truncated_body(kind, required, datagram.len()));
        }
        let body = &datagram[PacketHeader::ENCODED_LEN..required];

        let packet = match kind {
            PacketKind::Motion => TelemetryPacket::Motion(MotionPacket::decode(header, body)?),
            PacketKind::Session => TelemetryPacket::Session(SessionPacket::decode(header, body)?),
            PacketKind::LapData => TelemetryPacket::LapData(LapDataPacket::decode(header, body)?),
            PacketKind::Event => TelemetryPacket::Event(self.decode_event(header, body)?),
            PacketKind::Participants => {
                TelemetryPacket::Participants(ParticipantsPacket::decode(header, body)?)
            }
            PacketKind::CarSetup => {
                TelemetryPacket::CarSetup(CarSetupPacket::decode(header, body)?)
            }
            PacketKind::CarTelemetry => {
                TelemetryPacket::CarTelemetry(CarTelemetryPacket::decode(header, body)?)
            }
            PacketKind::CarStatus => {
                TelemetryPacket::CarStatus(CarStatusPacket::decode(header, body)?)
            }
        };
        Ok(packet)
    }

    /// Event bodies resolve their payload by tag after the fixed layout.
    /// An unregistered tag degrades the record instead of failing it.
    fn decode_event(&self, header: PacketHeader, body: &[u8]) -> Result<EventPacket> {
        let raw = RawEvent::decode(body)?;
        let payload = match EventPayload::resolve(&raw.code, &raw.details) {
            Ok(payload) => Some(payload),
            Err(error) => {
                debug!(frame = header.frame_identifier, %error, "event payload unresolved");
                None
            }
        };
        Ok(EventPacket::from_parts(header, raw.code, payload))
    }

    /// Decode one datagram and apply the drop/degrade policy.
    pub fn dispatch(&self, datagram: &[u8]) -> Dispatch {
        match self.decode(datagram) {
            Ok(packet) => {
                trace!(kind = ?packet.kind(), len = datagram.len(), "packet decoded");
                Dispatch::Packet(packet)
            }
            Err(TelemetryError::UnknownPacketKind { id }) => {
                debug!(id, len = datagram.len(), "skipping unknown packet kind");
                Dispatch::Skipped { id }
            }
            Err(error) => {
                warn!(%error, len = datagram.len(), "dropping undecodable datagram");
                let packet_id = if datagram.len() >= PacketHeader::ENCODED_LEN {
                    Some(datagram[5])
                } else {
                    None
                };
                Dispatch::Failure(DecodeFailure {
                    packet_id,
                    datagram_len: datagram.len(),
                    detail: error.to_string(),
                })
            }
        }
    }
}
