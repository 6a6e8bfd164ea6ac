//! Lap data packet (id 2): lap times and positions for all cars.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-car lap block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapData {
    /// Last lap time in seconds.
    pub last_lap_time: f32,
    pub current_lap_time: f32,
    pub best_lap_time: f32,
    pub sector1_time: f32,
    pub sector2_time: f32,
    /// Distance around the current lap in metres; negative before the line
    /// is first crossed.
    pub lap_distance: f32,
    /// Total distance travelled in the session in metres.
    pub total_distance: f32,
    pub safety_car_delta: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    /// 0 = none, 1 = pitting, 2 = in pit area.
    pub pit_status: u8,
    pub sector: u8,
    pub current_lap_invalid: u8,
    pub penalties: u8,
    pub grid_position: u8,
    pub driver_status: u8,
    pub result_status: u8,
}

impl LapData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            last_lap_time: r.f32()?,
            current_lap_time: r.f32()?,
            best_lap_time: r.f32()?,
            sector1_time: r.f32()?,
            sector2_time: r.f32()?,
            lap_distance: r.f32()?,
            total_distance: r.f32()?,
            safety_car_delta: r.f32()?,
            car_position: r.u8()?,
            current_lap_num: r.u8()?,
            pit_status: r.u8()?,
            sector: r.u8()?,
            current_lap_invalid: r.u8()?,
            penalties: r.u8()?,
            grid_position: r.u8()?,
            driver_status: r.u8()?,
            result_status: r.u8()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapDataPacket {
    pub header: PacketHeader,
    pub lap_data: Vec<LapData>,
}

impl LapDataPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::LapData);
        let mut lap_data = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            lap_data.push(LapData::decode(&mut r)?);
        }
        Ok(Self { header, lap_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> PacketHeader {
        PacketHeader {
            packet_format: 2019,
            game_major_version: 1,
            game_minor_version: 22,
            packet_version: 1,
            packet_id: 2,
            session_uid: 7,
            session_time: 1.0,
            frame_identifier: 1,
            player_car_index: 0,
        }
    }

    fn encode_lap_entry(total_distance: f32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(41);
        for value in [91.2f32, 30.1, 90.0, 28.5, 31.0, 100.0, total_distance, 0.0] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes.extend_from_slice(&[3, 12, 0, 1, 0, 0, 5, 4, 2]);
        bytes
    }

    #[test]
    fn car_zero_total_distance_is_bit_exact() {
        let mut body = Vec::new();
        body.extend_from_slice(&encode_lap_entry(123.45));
        for _ in 1..CAR_COUNT {
            body.extend_from_slice(&encode_lap_entry(0.0));
        }

        let packet = LapDataPacket::decode(header(), &body).unwrap();
        assert_eq!(packet.lap_data.len(), CAR_COUNT);
        assert_eq!(packet.lap_data[0].total_distance.to_bits(), 123.45f32.to_bits());
        assert_eq!(packet.lap_data[0].car_position, 3);
        assert_eq!(packet.lap_data[0].result_status, 2);
    }

    #[test]
    fn short_body_fails_with_truncated_body() {
        let body = encode_lap_entry(0.0); // one entry instead of twenty
        let err = LapDataPacket::decode(header(), &body).unwrap_err();
        assert!(matches!(
            err,
            crate::TelemetryError::TruncatedBody { kind: PacketKind::LapData, .. }
        ));
    }
}
