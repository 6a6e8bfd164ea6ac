//! Fixed-size packet header shared by every datagram.

use crate::{Result, TelemetryError};
use serde::Serialize;

/// The 23-byte header prefixed to every packet.
///
/// Field values are forwarded as-is; the decoder does not reject unexpected
/// `packet_format` or `packet_version` values, since the publishing game may
/// introduce new valid ones. Policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketHeader {
    /// Protocol year, e.g. 2019.
    pub packet_format: u16,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    /// Layout version of the body, starts at 1.
    pub packet_version: u8,
    /// Body type selector, 0-7.
    pub packet_id: u8,
    /// Unique identifier for the session.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Frame the data was retrieved on.
    pub frame_identifier: u32,
    /// Index of the player's car in the per-car arrays.
    pub player_car_index: u8,
}

impl PacketHeader {
    /// Encoded header length in bytes.
    pub const ENCODED_LEN: usize = 23;

    /// Decode the header from the start of a datagram.
    ///
    /// Fails with [`TelemetryError::TruncatedHeader`] when fewer than 23
    /// bytes are available; performs no validation beyond that.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::ENCODED_LEN {
            return Err(TelemetryError::truncated_header(data.len()));
        }

        Ok(Self {
            packet_format: u16::from_le_bytes([data[0], data[1]]),
            game_major_version: data[2],
            game_minor_version: data[3],
            packet_version: data[4],
            packet_id: data[5],
            session_uid: u64::from_le_bytes([
                data[6], data[7], data[8], data[9], data[10], data[11], data[12], data[13],
            ]),
            session_time: f32::from_le_bytes([data[14], data[15], data[16], data[17]]),
            frame_identifier: u32::from_le_bytes([data[18], data[19], data[20], data[21]]),
            player_car_index: data[22],
        })
    }
}
