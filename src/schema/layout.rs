//! Field layout registry types.

use crate::packets::{PacketHeader, PacketKind};
use crate::{Result, TelemetryError};

use super::f1_2019;

/// Primitive wire types used by the protocol.
///
/// Every field in every packet is one of these, at a fixed offset, in
/// little-endian byte order with 1-byte packing (no alignment padding
/// anywhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimType {
    U8,
    I8,
    U16,
    I16,
    U32,
    U64,
    F32,
    /// Single byte of a fixed-length ASCII/UTF-8 block (names, event tags).
    Char,
}

impl PrimType {
    /// Encoded width in bytes.
    pub const fn size(self) -> usize {
        match self {
            PrimType::U8 | PrimType::I8 | PrimType::Char => 1,
            PrimType::U16 | PrimType::I16 => 2,
            PrimType::U32 | PrimType::F32 => 4,
            PrimType::U64 => 8,
        }
    }
}

/// One named field: a scalar (`count == 1`) or a fixed-size array.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub prim: PrimType,
    pub count: usize,
}

impl FieldDef {
    pub const fn scalar(name: &'static str, prim: PrimType) -> Self {
        Self { name, prim, count: 1 }
    }

    pub const fn array(name: &'static str, prim: PrimType, count: usize) -> Self {
        Self { name, prim, count }
    }

    /// Encoded width of the whole field (elements are contiguous, no gaps).
    pub const fn encoded_len(&self) -> usize {
        self.prim.size() * self.count
    }
}

/// One entry of a packet body: a plain field or a repeated per-entity group.
#[derive(Debug, Clone, Copy)]
pub enum LayoutEntry {
    Field(FieldDef),
    /// A flat aggregate repeated `repeat` times back to back, e.g. the
    /// 20-car telemetry block or the 21 marshal zones.
    Group { name: &'static str, fields: &'static [FieldDef], repeat: usize },
}

impl LayoutEntry {
    pub fn encoded_len(&self) -> usize {
        match self {
            LayoutEntry::Field(field) => field.encoded_len(),
            LayoutEntry::Group { fields, repeat, .. } => {
                fields.iter().map(FieldDef::encoded_len).sum::<usize>() * repeat
            }
        }
    }
}

/// Complete layout of one packet kind: header plus ordered body entries.
#[derive(Debug, Clone)]
pub struct PacketLayout {
    pub kind: PacketKind,
    pub entries: &'static [LayoutEntry],
    encoded_len: usize,
}

impl PacketLayout {
    fn new(kind: PacketKind, entries: &'static [LayoutEntry]) -> Self {
        let body_len: usize = entries.iter().map(LayoutEntry::encoded_len).sum();
        Self { kind, entries, encoded_len: PacketHeader::ENCODED_LEN + body_len }
    }

    /// Total encoded length including the header. Datagrams may be longer
    /// (padding is tolerated); only this prefix is authoritative.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Body length after the 23-byte header.
    pub fn body_len(&self) -> usize {
        self.encoded_len - PacketHeader::ENCODED_LEN
    }
}

/// Process-wide, read-only registry of packet layouts for one protocol year.
///
/// Constructed once at startup and shared via `Arc`; there is no ambient
/// global. Lookup by raw packet id is the only fallible operation.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    protocol_year: u16,
    header_fields: &'static [FieldDef],
    layouts: [PacketLayout; PacketKind::COUNT],
}

impl LayoutRegistry {
    /// Build the registry for the F1 2019 protocol (packetFormat 2019).
    pub fn f1_2019() -> Self {
        let layouts = [
            PacketLayout::new(PacketKind::Motion, f1_2019::MOTION),
            PacketLayout::new(PacketKind::Session, f1_2019::SESSION),
            PacketLayout::new(PacketKind::LapData, f1_2019::LAP_DATA),
            PacketLayout::new(PacketKind::Event, f1_2019::EVENT),
            PacketLayout::new(PacketKind::Participants, f1_2019::PARTICIPANTS),
            PacketLayout::new(PacketKind::CarSetup, f1_2019::CAR_SETUP),
            PacketLayout::new(PacketKind::CarTelemetry, f1_2019::CAR_TELEMETRY),
            PacketLayout::new(PacketKind::CarStatus, f1_2019::CAR_STATUS),
        ];
        Self { protocol_year: 2019, header_fields: f1_2019::HEADER, layouts }
    }

    /// Protocol year this registry describes.
    pub fn protocol_year(&self) -> u16 {
        self.protocol_year
    }

    /// Ordered field list of the fixed-size packet header.
    pub fn header_fields(&self) -> &'static [FieldDef] {
        self.header_fields
    }

    /// Layout for a known kind.
    pub fn layout(&self, kind: PacketKind) -> &PacketLayout {
        &self.layouts[kind as usize]
    }

    /// Layout lookup by raw packet id from the wire.
    pub fn layout_for_id(&self, id: u8) -> Result<&PacketLayout> {
        let kind = PacketKind::from_id(id).ok_or(TelemetryError::UnknownPacketKind { id })?;
        Ok(self.layout(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_reports_documented_lengths() {
        let registry = LayoutRegistry::f1_2019();
        let expected = [
            (PacketKind::Motion, 1343),
            (PacketKind::Session, 149),
            (PacketKind::LapData, 843),
            (PacketKind::Event, 32),
            (PacketKind::Participants, 1104),
            (PacketKind::CarSetup, 843),
            (PacketKind::CarTelemetry, 1347),
            (PacketKind::CarStatus, 1143),
        ];
        for (kind, len) in expected {
            assert_eq!(registry.layout(kind).encoded_len(), len, "{kind:?}");
        }
    }

    #[test]
    fn header_fields_cover_23_bytes() {
        let registry = LayoutRegistry::f1_2019();
        let total: usize = registry.header_fields().iter().map(FieldDef::encoded_len).sum();
        assert_eq!(total, PacketHeader::ENCODED_LEN);
    }

    #[test]
    fn lookup_by_id_matches_kind_order() {
        let registry = LayoutRegistry::f1_2019();
        for id in 0u8..8 {
            let layout = registry.layout_for_id(id).unwrap();
            assert_eq!(layout.kind as u8, id);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let registry = LayoutRegistry::f1_2019();
        for id in [8u8, 9, 42, 255] {
            assert!(matches!(
                registry.layout_for_id(id),
                Err(TelemetryError::UnknownPacketKind { id: got }) if got == id
            ));
        }
    }

    #[test]
    fn field_names_are_unique_within_each_layout() {
        let registry = LayoutRegistry::f1_2019();
        for kind in PacketKind::ALL {
            let mut names: Vec<&str> = Vec::new();
            for entry in registry.layout(kind).entries {
                match entry {
                    LayoutEntry::Field(field) => names.push(field.name),
                    LayoutEntry::Group { name, fields, .. } => {
                        names.push(name);
                        let mut inner: Vec<&str> = fields.iter().map(|f| f.name).collect();
                        let before = inner.len();
                        inner.sort_unstable();
                        inner.dedup();
                        assert_eq!(inner.len(), before, "{kind:?}: duplicate group field");
                    }
                }
            }
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before, "{kind:?}: duplicate top-level field");
        }
    }
}
