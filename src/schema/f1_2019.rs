//! Field tables for the F1 2019 UDP protocol (packetFormat 2019).
//!
//! Field order and widths follow the documented wire format. Several packets
//! are padded by the game beyond the logical record; the lengths derived from
//! these tables describe the authoritative prefix.

use super::layout::{FieldDef, LayoutEntry, PrimType};

use PrimType::{Char, F32, I8, U8, U16, U32, U64};

const fn scalar(name: &'static str, prim: PrimType) -> LayoutEntry {
    LayoutEntry::Field(FieldDef::scalar(name, prim))
}

const fn array(name: &'static str, prim: PrimType, count: usize) -> LayoutEntry {
    LayoutEntry::Field(FieldDef::array(name, prim, count))
}

const fn group(
    name: &'static str,
    fields: &'static [FieldDef],
    repeat: usize,
) -> LayoutEntry {
    LayoutEntry::Group { name, fields, repeat }
}

/// Fixed 23-byte header shared by all packets.
pub const HEADER: &[FieldDef] = &[
    FieldDef::scalar("packet_format", U16),
    FieldDef::scalar("game_major_version", U8),
    FieldDef::scalar("game_minor_version", U8),
    FieldDef::scalar("packet_version", U8),
    FieldDef::scalar("packet_id", U8),
    FieldDef::scalar("session_uid", U64),
    FieldDef::scalar("session_time", F32),
    FieldDef::scalar("frame_identifier", U32),
    FieldDef::scalar("player_car_index", U8),
];

/// Per-car motion block, 60 bytes. Wheel arrays are ordered RL, RR, FL, FR.
const CAR_MOTION: &[FieldDef] = &[
    FieldDef::scalar("world_position_x", F32),
    FieldDef::scalar("world_position_y", F32),
    FieldDef::scalar("world_position_z", F32),
    FieldDef::scalar("world_velocity_x", F32),
    FieldDef::scalar("world_velocity_y", F32),
    FieldDef::scalar("world_velocity_z", F32),
    FieldDef::scalar("world_forward_dir_x", U16),
    FieldDef::scalar("world_forward_dir_y", U16),
    FieldDef::scalar("world_forward_dir_z", U16),
    FieldDef::scalar("world_right_dir_x", U16),
    FieldDef::scalar("world_right_dir_y", U16),
    FieldDef::scalar("world_right_dir_z", U16),
    FieldDef::scalar("g_force_lateral", F32),
    FieldDef::scalar("g_force_longitudinal", F32),
    FieldDef::scalar("g_force_vertical", F32),
    FieldDef::scalar("yaw", F32),
    FieldDef::scalar("pitch", F32),
    FieldDef::scalar("roll", F32),
];

/// Packet id 0, 1343 bytes.
pub const MOTION: &[LayoutEntry] = &[
    group("car_motion_data", CAR_MOTION, 20),
    array("suspension_position", F32, 4),
    array("suspension_velocity", F32, 4),
    array("suspension_acceleration", F32, 4),
    array("wheel_speed", F32, 4),
    array("wheel_slip", F32, 4),
    scalar("local_velocity_x", F32),
    scalar("local_velocity_y", F32),
    scalar("local_velocity_z", F32),
    scalar("angular_velocity_x", F32),
    scalar("angular_velocity_y", F32),
    scalar("angular_velocity_z", F32),
    scalar("angular_acceleration_x", F32),
    scalar("angular_acceleration_y", F32),
    scalar("angular_acceleration_z", F32),
    scalar("front_wheels_angle", F32),
];

const MARSHAL_ZONE: &[FieldDef] =
    &[FieldDef::scalar("zone_start", F32), FieldDef::scalar("zone_flag", I8)];

/// Packet id 1, 149 bytes. Marshal zone array is fixed at 21 slots; the
/// explicit count says how many are meaningful.
pub const SESSION: &[LayoutEntry] = &[
    scalar("weather", U8),
    scalar("track_temperature", I8),
    scalar("air_temperature", I8),
    scalar("total_laps", U8),
    scalar("track_length", U16),
    scalar("session_type", U8),
    scalar("track_id", I8),
    scalar("formula", U8),
    scalar("session_time_left", U16),
    scalar("session_duration", U16),
    scalar("pit_speed_limit", U8),
    scalar("game_paused", U8),
    scalar("is_spectating", U8),
    scalar("spectator_car_index", U8),
    scalar("sli_pro_native_support", U8),
    scalar("num_marshal_zones", U8),
    group("marshal_zones", MARSHAL_ZONE, 21),
    scalar("safety_car_status", U8),
    scalar("network_game", U8),
];

/// Per-car lap block, 41 bytes.
const LAP: &[FieldDef] = &[
    FieldDef::scalar("last_lap_time", F32),
    FieldDef::scalar("current_lap_time", F32),
    FieldDef::scalar("best_lap_time", F32),
    FieldDef::scalar("sector1_time", F32),
    FieldDef::scalar("sector2_time", F32),
    FieldDef::scalar("lap_distance", F32),
    FieldDef::scalar("total_distance", F32),
    FieldDef::scalar("safety_car_delta", F32),
    FieldDef::scalar("car_position", U8),
    FieldDef::scalar("current_lap_num", U8),
    FieldDef::scalar("pit_status", U8),
    FieldDef::scalar("sector", U8),
    FieldDef::scalar("current_lap_invalid", U8),
    FieldDef::scalar("penalties", U8),
    FieldDef::scalar("grid_position", U8),
    FieldDef::scalar("driver_status", U8),
    FieldDef::scalar("result_status", U8),
];

/// Packet id 2, 843 bytes.
pub const LAP_DATA: &[LayoutEntry] = &[group("lap_data", LAP, 20)];

/// Packet id 3, 32 bytes. The payload region after the 4-char tag is opaque
/// at the layout level; its interpretation depends on the tag and is handled
/// by the event payload resolver. 5 bytes covers the widest variant
/// (FastestLap: u8 + f32).
pub const EVENT: &[LayoutEntry] =
    &[array("event_string_code", Char, 4), array("event_details", U8, 5)];

/// Per-participant block, 54 bytes. The name is a null-terminated UTF-8
/// field in a fixed 48-byte slot.
const PARTICIPANT: &[FieldDef] = &[
    FieldDef::scalar("ai_controlled", U8),
    FieldDef::scalar("driver_id", U8),
    FieldDef::scalar("team_id", U8),
    FieldDef::scalar("race_number", U8),
    FieldDef::scalar("nationality", U8),
    FieldDef::array("name", Char, 48),
    FieldDef::scalar("your_telemetry", U8),
];

/// Packet id 4, 1104 bytes.
pub const PARTICIPANTS: &[LayoutEntry] =
    &[scalar("num_active_cars", U8), group("participants", PARTICIPANT, 20)];

/// Per-car setup block, 41 bytes.
const CAR_SETUP_FIELDS: &[FieldDef] = &[
    FieldDef::scalar("front_wing", U8),
    FieldDef::scalar("rear_wing", U8),
    FieldDef::scalar("on_throttle", U8),
    FieldDef::scalar("off_throttle", U8),
    FieldDef::scalar("front_camber", F32),
    FieldDef::scalar("rear_camber", F32),
    FieldDef::scalar("front_toe", F32),
    FieldDef::scalar("rear_toe", F32),
    FieldDef::scalar("front_suspension", U8),
    FieldDef::scalar("rear_suspension", U8),
    FieldDef::scalar("front_anti_roll_bar", U8),
    FieldDef::scalar("rear_anti_roll_bar", U8),
    FieldDef::scalar("front_suspension_height", U8),
    FieldDef::scalar("rear_suspension_height", U8),
    FieldDef::scalar("brake_pressure", U8),
    FieldDef::scalar("brake_bias", U8),
    FieldDef::scalar("front_tyre_pressure", F32),
    FieldDef::scalar("rear_tyre_pressure", F32),
    FieldDef::scalar("ballast", U8),
    FieldDef::scalar("fuel_load", F32),
];

/// Packet id 5, 843 bytes.
pub const CAR_SETUP: &[LayoutEntry] = &[group("car_setups", CAR_SETUP_FIELDS, 20)];

/// Per-car telemetry block, 66 bytes.
const CAR_TELEMETRY_FIELDS: &[FieldDef] = &[
    FieldDef::scalar("speed", U16),
    FieldDef::scalar("throttle", F32),
    FieldDef::scalar("steer", F32),
    FieldDef::scalar("brake", F32),
    FieldDef::scalar("clutch", U8),
    FieldDef::scalar("gear", I8),
    FieldDef::scalar("engine_rpm", U16),
    FieldDef::scalar("drs", U8),
    FieldDef::scalar("rev_lights_percent", U8),
    FieldDef::array("brakes_temperature", U16, 4),
    FieldDef::array("tyres_surface_temperature", U16, 4),
    FieldDef::array("tyres_inner_temperature", U16, 4),
    FieldDef::scalar("engine_temperature", U16),
    FieldDef::array("tyres_pressure", F32, 4),
    FieldDef::array("surface_type", U8, 4),
];

/// Packet id 6, 1347 bytes.
pub const CAR_TELEMETRY: &[LayoutEntry] =
    &[group("car_telemetry_data", CAR_TELEMETRY_FIELDS, 20), scalar("button_status", U32)];

/// Per-car status block, 56 bytes.
const CAR_STATUS_FIELDS: &[FieldDef] = &[
    FieldDef::scalar("traction_control", U8),
    FieldDef::scalar("anti_lock_brakes", U8),
    FieldDef::scalar("fuel_mix", U8),
    FieldDef::scalar("front_brake_bias", U8),
    FieldDef::scalar("pit_limiter_status", U8),
    FieldDef::scalar("fuel_in_tank", F32),
    FieldDef::scalar("fuel_capacity", F32),
    FieldDef::scalar("fuel_remaining_laps", F32),
    FieldDef::scalar("max_rpm", U16),
    FieldDef::scalar("idle_rpm", U16),
    FieldDef::scalar("max_gears", U8),
    FieldDef::scalar("drs_allowed", U8),
    FieldDef::array("tyres_wear", U8, 4),
    FieldDef::scalar("actual_tyre_compound", U8),
    FieldDef::scalar("tyre_visual_compound", U8),
    FieldDef::array("tyres_damage", U8, 4),
    FieldDef::scalar("front_left_wing_damage", U8),
    FieldDef::scalar("front_right_wing_damage", U8),
    FieldDef::scalar("rear_wing_damage", U8),
    FieldDef::scalar("engine_damage", U8),
    FieldDef::scalar("gear_box_damage", U8),
    FieldDef::scalar("vehicle_fia_flags", I8),
    FieldDef::scalar("ers_store_energy", F32),
    FieldDef::scalar("ers_deploy_mode", U8),
    FieldDef::scalar("ers_harvested_this_lap_mguk", F32),
    FieldDef::scalar("ers_harvested_this_lap_mguh", F32),
    FieldDef::scalar("ers_deployed_this_lap", F32),
];

/// Packet id 7, 1143 bytes.
pub const CAR_STATUS: &[LayoutEntry] = &[group("car_status_data", CAR_STATUS_FIELDS, 20)];
