//! Car setup packet (id 5): setup values for every car in the race.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-car setup block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSetupData {
    pub front_wing: u8,
    pub rear_wing: u8,
    /// Differential adjustment on throttle (percentage).
    pub on_throttle: u8,
    pub off_throttle: u8,
    pub front_camber: f32,
    pub rear_camber: f32,
    pub front_toe: f32,
    pub rear_toe: f32,
    pub front_suspension: u8,
    pub rear_suspension: u8,
    pub front_anti_roll_bar: u8,
    pub rear_anti_roll_bar: u8,
    pub front_suspension_height: u8,
    pub rear_suspension_height: u8,
    pub brake_pressure: u8,
    pub brake_bias: u8,
    pub front_tyre_pressure: f32,
    pub rear_tyre_pressure: f32,
    pub ballast: u8,
    pub fuel_load: f32,
}

impl CarSetupData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            front_wing: r.u8()?,
            rear_wing: r.u8()?,
            on_throttle: r.u8()?,
            off_throttle: r.u8()?,
            front_camber: r.f32()?,
            rear_camber: r.f32()?,
            front_toe: r.f32()?,
            rear_toe: r.f32()?,
            front_suspension: r.u8()?,
            rear_suspension: r.u8()?,
            front_anti_roll_bar: r.u8()?,
            rear_anti_roll_bar: r.u8()?,
            front_suspension_height: r.u8()?,
            rear_suspension_height: r.u8()?,
            brake_pressure: r.u8()?,
            brake_bias: r.u8()?,
            front_tyre_pressure: r.f32()?,
            rear_tyre_pressure: r.f32()?,
            ballast: r.u8()?,
            fuel_load: r.f32()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSetupPacket {
    pub header: PacketHeader,
    pub car_setups: Vec<CarSetupData>,
}

impl CarSetupPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::CarSetup);
        let mut car_setups = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            car_setups.push(CarSetupData::decode(&mut r)?);
        }
        Ok(Self { header, car_setups })
    }
}
