//! Car telemetry packet (id 6): live telemetry for all cars. Wheel arrays
//! are ordered RL, RR, FL, FR.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-car telemetry block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarTelemetryData {
    /// Speed in kilometres per hour.
    pub speed: u16,
    /// Applied throttle, 0.0 to 1.0.
    pub throttle: f32,
    /// Steering, -1.0 (full lock left) to 1.0 (full lock right).
    pub steer: f32,
    pub brake: f32,
    pub clutch: u8,
    /// Selected gear: 1-8, N = 0, R = -1.
    pub gear: i8,
    pub engine_rpm: u16,
    pub drs: u8,
    pub rev_lights_percent: u8,
    pub brakes_temperature: [u16; 4],
    pub tyres_surface_temperature: [u16; 4],
    pub tyres_inner_temperature: [u16; 4],
    pub engine_temperature: u16,
    pub tyres_pressure: [f32; 4],
    pub surface_type: [u8; 4],
}

impl CarTelemetryData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            speed: r.u16()?,
            throttle: r.f32()?,
            steer: r.f32()?,
            brake: r.f32()?,
            clutch: r.u8()?,
            gear: r.i8()?,
            engine_rpm: r.u16()?,
            drs: r.u8()?,
            rev_lights_percent: r.u8()?,
            brakes_temperature: r.u16_array()?,
            tyres_surface_temperature: r.u16_array()?,
            tyres_inner_temperature: r.u16_array()?,
            engine_temperature: r.u16()?,
            tyres_pressure: r.f32_array()?,
            surface_type: r.u8_array()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarTelemetryPacket {
    pub header: PacketHeader,
    pub car_telemetry_data: Vec<CarTelemetryData>,
    /// Bit flags for currently pressed buttons.
    pub button_status: u32,
}

impl CarTelemetryPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::CarTelemetry);
        let mut car_telemetry_data = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            car_telemetry_data.push(CarTelemetryData::decode(&mut r)?);
        }
        Ok(Self { header, car_telemetry_data, button_status: r.u32()? })
    }
}
