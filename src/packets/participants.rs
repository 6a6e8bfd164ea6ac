//! Participants packet (id 4): driver list for the session.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-participant block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantData {
    /// 1 = AI controlled, 0 = human.
    pub ai_controlled: u8,
    pub driver_id: u8,
    pub team_id: u8,
    pub race_number: u8,
    pub nationality: u8,
    /// Driver name, null-terminated UTF-8 in a fixed 48-byte slot on the
    /// wire; truncated by the game with U+2026 when too long.
    pub name: String,
    /// The player's UDP privacy setting: 0 = restricted, 1 = public.
    pub your_telemetry: u8,
}

impl ParticipantData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            ai_controlled: r.u8()?,
            driver_id: r.u8()?,
            team_id: r.u8()?,
            race_number: r.u8()?,
            nationality: r.u8()?,
            name: r.fixed_string::<48>()?,
            your_telemetry: r.u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantsPacket {
    pub header: PacketHeader,
    /// Count of meaningful entries in `participants`.
    pub num_active_cars: u8,
    pub participants: Vec<ParticipantData>,
}

impl ParticipantsPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::Participants);
        let num_active_cars = r.u8()?;
        let mut participants = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            participants.push(ParticipantData::decode(&mut r)?);
        }
        Ok(Self { header, num_active_cars, participants })
    }
}
