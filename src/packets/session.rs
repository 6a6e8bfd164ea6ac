//! Session packet (id 1): track, weather and session timing. Sent twice per
//! second.

use crate::codec::PayloadReader;
use crate::packets::{PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Number of marshal zone slots on the wire; `num_marshal_zones` says how
/// many are meaningful.
pub(crate) const MARSHAL_ZONE_SLOTS: usize = 21;

/// One marshal zone slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarshalZone {
    /// Fraction (0..1) of the way through the lap the zone starts.
    pub zone_start: f32,
    /// -1 = invalid/unknown, 0 = none, 1 = green, 2 = blue, 3 = yellow, 4 = red.
    pub zone_flag: i8,
}

impl MarshalZone {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self { zone_start: r.f32()?, zone_flag: r.i8()? })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPacket {
    pub header: PacketHeader,
    pub weather: u8,
    pub track_temperature: i8,
    pub air_temperature: i8,
    pub total_laps: u8,
    /// Track length in metres.
    pub track_length: u16,
    pub session_type: u8,
    pub track_id: i8,
    pub formula: u8,
    pub session_time_left: u16,
    pub session_duration: u16,
    pub pit_speed_limit: u8,
    pub game_paused: u8,
    pub is_spectating: u8,
    pub spectator_car_index: u8,
    pub sli_pro_native_support: u8,
    /// Count of meaningful entries in `marshal_zones`.
    pub num_marshal_zones: u8,
    pub marshal_zones: Vec<MarshalZone>,
    pub safety_car_status: u8,
    pub network_game: u8,
}

impl SessionPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::Session);
        let weather = r.u8()?;
        let track_temperature = r.i8()?;
        let air_temperature = r.i8()?;
        let total_laps = r.u8()?;
        let track_length = r.u16()?;
        let session_type = r.u8()?;
        let track_id = r.i8()?;
        let formula = r.u8()?;
        let session_time_left = r.u16()?;
        let session_duration = r.u16()?;
        let pit_speed_limit = r.u8()?;
        let game_paused = r.u8()?;
        let is_spectating = r.u8()?;
        let spectator_car_index = r.u8()?;
        let sli_pro_native_support = r.u8()?;
        let num_marshal_zones = r.u8()?;
        // All 21 slots are always present on the wire regardless of the count.
        let mut marshal_zones = Vec::with_capacity(MARSHAL_ZONE_SLOTS);
        for _ in 0..MARSHAL_ZONE_SLOTS {
            marshal_zones.push(MarshalZone::decode(&mut r)?);
        }
        Ok(Self {
            header,
            weather,
            track_temperature,
            air_temperature,
            total_laps,
            track_length,
            session_type,
            track_id,
            formula,
            session_time_left,
            session_duration,
            pit_speed_limit,
            game_paused,
            is_spectating,
            spectator_car_index,
            sli_pro_native_support,
            num_marshal_zones,
            marshal_zones,
            safety_car_status: r.u8()?,
            network_game: r.u8()?,
        })
    }
}
