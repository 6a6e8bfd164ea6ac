//! Motion packet (id 0): world-space motion for all cars plus extra
//! player-car physics. Only sent while the player is in control.

use crate::codec::PayloadReader;
use crate::packets::{CAR_COUNT, PacketHeader, PacketKind};
use crate::Result;
use serde::Serialize;

/// Per-car motion block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarMotionData {
    pub world_position_x: f32,
    pub world_position_y: f32,
    pub world_position_z: f32,
    pub world_velocity_x: f32,
    pub world_velocity_y: f32,
    pub world_velocity_z: f32,
    pub world_forward_dir_x: u16,
    pub world_forward_dir_y: u16,
    pub world_forward_dir_z: u16,
    pub world_right_dir_x: u16,
    pub world_right_dir_y: u16,
    pub world_right_dir_z: u16,
    pub g_force_lateral: f32,
    pub g_force_longitudinal: f32,
    pub g_force_vertical: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl CarMotionData {
    fn decode(r: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            world_position_x: r.f32()?,
            world_position_y: r.f32()?,
            world_position_z: r.f32()?,
            world_velocity_x: r.f32()?,
            world_velocity_y: r.f32()?,
            world_velocity_z: r.f32()?,
            world_forward_dir_x: r.u16()?,
            world_forward_dir_y: r.u16()?,
            world_forward_dir_z: r.u16()?,
            world_right_dir_x: r.u16()?,
            world_right_dir_y: r.u16()?,
            world_right_dir_z: r.u16()?,
            g_force_lateral: r.f32()?,
            g_force_longitudinal: r.f32()?,
            g_force_vertical: r.f32()?,
            yaw: r.f32()?,
            pitch: r.f32()?,
            roll: r.f32()?,
        })
    }
}

/// Motion packet. Wheel arrays are ordered RL, RR, FL, FR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionPacket {
    pub header: PacketHeader,
    pub car_motion_data: Vec<CarMotionData>,
    pub suspension_position: [f32; 4],
    pub suspension_velocity: [f32; 4],
    pub suspension_acceleration: [f32; 4],
    pub wheel_speed: [f32; 4],
    pub wheel_slip: [f32; 4],
    pub local_velocity_x: f32,
    pub local_velocity_y: f32,
    pub local_velocity_z: f32,
    pub angular_velocity_x: f32,
    pub angular_velocity_y: f32,
    pub angular_velocity_z: f32,
    pub angular_acceleration_x: f32,
    pub angular_acceleration_y: f32,
    pub angular_acceleration_z: f32,
    pub front_wheels_angle: f32,
}

impl MotionPacket {
    pub(crate) fn decode(header: PacketHeader, body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::Motion);
        let mut car_motion_data = Vec::with_capacity(CAR_COUNT);
        for _ in 0..CAR_COUNT {
            car_motion_data.push(CarMotionData::decode(&mut r)?);
        }
        Ok(Self {
            header,
            car_motion_data,
            suspension_position: r.f32_array()?,
            suspension_velocity: r.f32_array()?,
            suspension_acceleration: r.f32_array()?,
            wheel_speed: r.f32_array()?,
            wheel_slip: r.f32_array()?,
            local_velocity_x: r.f32()?,
            local_velocity_y: r.f32()?,
            local_velocity_z: r.f32()?,
            angular_velocity_x: r.f32()?,
            angular_velocity_y: r.f32()?,
            angular_velocity_z: r.f32()?,
            angular_acceleration_x: r.f32()?,
            angular_acceleration_y: r.f32()?,
            angular_acceleration_z: r.f32()?,
            front_wheels_angle: r.f32()?,
        })
    }
}
