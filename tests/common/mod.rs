//! Shared datagram builders for integration tests.
//!
//! These encode packets the way the game does: little-endian, 1-byte
//! packed, fixed field order.

#![allow(dead_code)]

use slipstream::PacketHeader;

/// Little-endian byte sink.
#[derive(Default)]
pub struct Enc {
    pub bytes: Vec<u8>,
}

impl Enc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.bytes.push(v);
        self
    }

    pub fn i8(&mut self, v: i8) -> &mut Self {
        self.bytes.push(v as u8);
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u64(&mut self, v: u64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn raw(&mut self, v: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(v);
        self
    }
}

/// Standard 23-byte header for a given packet id and frame.
pub fn header_bytes(packet_id: u8, frame: u32) -> Vec<u8> {
    let mut e = Enc::new();
    e.u16(2019)
        .u8(1)
        .u8(22)
        .u8(1)
        .u8(packet_id)
        .u64(0xFEED_F00D_CAFE_BABE)
        .f32(321.75)
        .u32(frame)
        .u8(1);
    assert_eq!(e.bytes.len(), PacketHeader::ENCODED_LEN);
    e.bytes
}

/// One encoded 41-byte lap entry with a chosen total distance.
pub fn lap_entry(total_distance: f32) -> Vec<u8> {
    let mut e = Enc::new();
    e.f32(91.5)
        .f32(30.25)
        .f32(90.125)
        .f32(28.5)
        .f32(31.75)
        .f32(250.0)
        .f32(total_distance)
        .f32(-0.5)
        .u8(4)
        .u8(12)
        .u8(0)
        .u8(1)
        .u8(0)
        .u8(3)
        .u8(9)
        .u8(4)
        .u8(2);
    assert_eq!(e.bytes.len(), 41);
    e.bytes
}

/// Complete 843-byte lap data datagram; car 0 carries `car0_total_distance`.
pub fn lap_datagram(frame: u32, car0_total_distance: f32) -> Vec<u8> {
    let mut datagram = header_bytes(2, frame);
    datagram.extend_from_slice(&lap_entry(car0_total_distance));
    for i in 1..20u32 {
        datagram.extend_from_slice(&lap_entry(i as f32 * 100.0));
    }
    assert_eq!(datagram.len(), 843);
    datagram
}

/// Complete 32-byte event datagram with the given tag and details region.
pub fn event_datagram(frame: u32, tag: &[u8; 4], details: &[u8]) -> Vec<u8> {
    let mut datagram = header_bytes(3, frame);
    datagram.extend_from_slice(tag);
    let mut padded = [0u8; 5];
    padded[..details.len()].copy_from_slice(details);
    datagram.extend_from_slice(&padded);
    assert_eq!(datagram.len(), 32);
    datagram
}
