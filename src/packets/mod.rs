//! Decoded packet types for the F1 2019 UDP protocol.
//!
//! Each kind is an immutable value record: decoded from one datagram, handed
//! to the sink, then dropped. Nothing here borrows the receive buffer.
//!
//! All records derive `serde::Serialize` with stable snake_case field names,
//! so every packet is representable as an ordered field-name to
//! scalar/array mapping without runtime reflection. The concrete output
//! format is the subscriber's concern.

pub(crate) mod event;
mod header;
mod lap;
mod motion;
mod participants;
mod session;
mod setup;
mod status;
mod telemetry;

pub use event::{EventPacket, EventPayload};
pub use header::PacketHeader;
pub use lap::{LapData, LapDataPacket};
pub use motion::{CarMotionData, MotionPacket};
pub use participants::{ParticipantData, ParticipantsPacket};
pub use session::{MarshalZone, SessionPacket};
pub use setup::{CarSetupData, CarSetupPacket};
pub use status::{CarStatusData, CarStatusPacket};
pub use telemetry::{CarTelemetryData, CarTelemetryPacket};

use serde::Serialize;

/// Fixed size of the per-car arrays in the F1 2019 protocol.
pub const CAR_COUNT: usize = 20;

/// The eight packet kinds of the F1 2019 protocol, in wire id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PacketKind {
    Motion = 0,
    Session = 1,
    LapData = 2,
    Event = 3,
    Participants = 4,
    CarSetup = 5,
    CarTelemetry = 6,
    CarStatus = 7,
}

impl PacketKind {
    /// Number of known kinds.
    pub const COUNT: usize = 8;

    /// All kinds in wire id order.
    pub const ALL: [PacketKind; PacketKind::COUNT] = [
        PacketKind::Motion,
        PacketKind::Session,
        PacketKind::LapData,
        PacketKind::Event,
        PacketKind::Participants,
        PacketKind::CarSetup,
        PacketKind::CarTelemetry,
        PacketKind::CarStatus,
    ];

    /// Map a raw wire id to a kind. Ids above 7 are unknown.
    pub fn from_id(id: u8) -> Option<Self> {
        PacketKind::ALL.get(id as usize).copied()
    }

    /// The wire id of this kind.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// One fully-decoded datagram, tagged by kind.
///
/// Serializes internally tagged (`"packet": "lap_data"`, ...) so the kind is
/// a distinguishable discriminant in the interchange representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "packet", rename_all = "snake_case")]
pub enum TelemetryPacket {
    Motion(MotionPacket),
    Session(SessionPacket),
    LapData(LapDataPacket),
    Event(EventPacket),
    Participants(ParticipantsPacket),
    CarSetup(CarSetupPacket),
    CarTelemetry(CarTelemetryPacket),
    CarStatus(CarStatusPacket),
}

impl TelemetryPacket {
    /// The kind of this packet.
    pub fn kind(&self) -> PacketKind {
        match self {
            TelemetryPacket::Motion(_) => PacketKind::Motion,
            TelemetryPacket::Session(_) => PacketKind::Session,
            TelemetryPacket::LapData(_) => PacketKind::LapData,
            TelemetryPacket::Event(_) => PacketKind::Event,
            TelemetryPacket::Participants(_) => PacketKind::Participants,
            TelemetryPacket::CarSetup(_) => PacketKind::CarSetup,
            TelemetryPacket::CarTelemetry(_) => PacketKind::CarTelemetry,
            TelemetryPacket::CarStatus(_) => PacketKind::CarStatus,
        }
    }

    /// The shared header of this packet.
    pub fn header(&self) -> &PacketHeader {
        match self {
            TelemetryPacket::Motion(p) => &p.header,
            TelemetryPacket::Session(p) => &p.header,
            TelemetryPacket::LapData(p) => &p.header,
            TelemetryPacket::Event(p) => &p.header,
            TelemetryPacket::Participants(p) => &p.header,
            TelemetryPacket::CarSetup(p) => &p.header,
            TelemetryPacket::CarTelemetry(p) => &p.header,
            TelemetryPacket::CarStatus(p) => &p.header,
        }
    }
}
