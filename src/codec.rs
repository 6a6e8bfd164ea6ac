//! Bounds-checked little-endian payload reading.
//!
//! Every packet body is a flat, 1-byte-packed aggregate, so decoding is a
//! sequential walk over the datagram. `PayloadReader` owns the cursor and
//! copies each primitive out of the buffer; nothing decoded here borrows the
//! datagram, which belongs to the I/O layer and is reused between receives.

use crate::packets::PacketKind;
use crate::{Result, TelemetryError};

/// Sequential little-endian reader over one packet body.
///
/// The dispatcher verifies the registry length before decoding, so overruns
/// indicate a registry/decoder mismatch; they still surface as
/// [`TelemetryError::TruncatedBody`] rather than panicking.
pub struct PayloadReader<'a> {
    buf: &'a [u8],
    pos: usize,
    kind: PacketKind,
}

impl<'a> PayloadReader<'a> {
    /// Create a reader over `buf`, attributing overruns to `kind`.
    pub fn new(buf: &'a [u8], kind: PacketKind) -> Self {
        Self { buf, pos: 0, kind }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self
            .buf
            .get(self.pos..self.pos + len)
            .ok_or_else(|| TelemetryError::truncated_body(self.kind, self.pos + len, self.buf.len()))?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    pub fn f32(&mut self) -> Result<f32> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Fixed-size raw byte block (event tags, name fields).
    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Contiguous fixed-size array of u8, no gaps between elements.
    pub fn u8_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.bytes::<N>()
    }

    /// Contiguous fixed-size array of u16.
    pub fn u16_array<const N: usize>(&mut self) -> Result<[u16; N]> {
        let mut out = [0u16; N];
        for slot in &mut out {
            *slot = self.u16()?;
        }
        Ok(out)
    }

    /// Contiguous fixed-size array of f32.
    pub fn f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        let mut out = [0.0f32; N];
        for slot in &mut out {
            *slot = self.f32()?;
        }
        Ok(out)
    }

    /// Fixed-width UTF-8 name field, null-terminated within the block.
    pub fn fixed_string<const N: usize>(&mut self) -> Result<String> {
        let block = self.take(N)?;
        let null_pos = block.iter().position(|&b| b == 0).unwrap_or(N);
        Ok(String::from_utf8_lossy(&block[..null_pos]).into_owned())
    }
}
