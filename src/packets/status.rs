//! Car status packet (id 7): fuel, tyres, damage and ERS for all cars.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-car status block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarStatusData {
    /// 0 (off) - 2 (high).
    pub traction_control: u8,
    pub anti_lock_brakes: u8,
    /// 0 = lean, 1 = standard, 2 = rich, 3 = max.
    pub fuel_mix: u8,
    pub front_brake_bias: u8,
    pub pit_limiter_status: u8,
    /// Current fuel mass in kilograms.
    pub fuel_in_tank: f32,
    pub fuel_capacity: f32,
    /// Fuel remaining expressed in laps (the MFD value).
    pub fuel_remaining_laps: f32,
    pub max_rpm: u16,
    pub idle_rpm: u16,
    pub max_gears: u8,
    pub drs_allowed: u8,
    pub tyres_wear: [u8; 4],
    pub actual_tyre_compound: u8,
    pub tyre_visual_compound: u8,
    pub tyres_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub engine_damage: u8,
    pub gear_box_damage: u8,
    /// -1 = invalid/unknown, 0 = none, 1 = green, 2 = blue, 3 = yellow, 4 = red.
    pub vehicle_fia_flags: i8,
    /// ERS store energy in Joules.
    pub ers_store_energy: f32,
    pub ers_deploy_mode: u8,
    pub ers_harvested_this_lap_mguk: f32,
    pub ers_harvested_this_lap_mguh: f32,
    pub ers_deployed_this_lap: f32,
}

impl CarStatusData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            traction_control: r.u8()?,
            anti_lock_brakes: r.u8()?,
            fuel_mix: r.u8()?,
            front_brake_bias: r.u8()?,
            pit_limiter_status: r.u8()?,
            fuel_in_tank: r.f32()?,
            fuel_capacity: r.f32()?,
            fuel_remaining_laps: r.f32()?,
            max_rpm: r.u16()?,
            idle_rpm: r.u16()?,
            max_gears: r.u8()?,
            drs_allowed: r.u8()?,
            tyres_wear: r.u8_array()?,
            actual_tyre_compound: r.u8()?,
            tyre_visual_compound: r.u8()?,
            tyres_damage: r.u8_array()?,
            front_left_wing_damage: r.u8()?,
            front_right_wing_damage: r.u8()?,
            rear_wing_damage: r.u8()?,
            engine_damage: r.u8()?,
            gear_box_damage: r.u8()?,
            vehicle_fia_flags: r.i8()?,
            ers_store_energy: r.f32()?,
            ers_deploy_mode: r.u8()?,
            ers_harvested_this_lap_mguk: r.f32()?,
            ers_harvested_this_lap_mguh: r.f32()?,
            ers_deployed_this_lap: r.f32()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarStatusPacket {
    pub header: PacketHeader,
    pub car_status_data: Vec<CarStatusData>,
}

impl CarStatusPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::CarStatus);
        let mut car_status_data = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            car_status_data.push(CarStatusData::decode(&mut r)?);
        }
        Ok(Self { header, car_status_data })
    }
}
