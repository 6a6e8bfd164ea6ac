//! Event packet (id 3) and its tag-directed payload resolution.
//!
//! The wire layout alone cannot disambiguate the payload: a 4-character
//! ASCII tag selects which variant occupies the details region. The resolver
//! reads the tag first and decodes only the matching variant's width, so the
//! trailing bytes of a wider variant are never exposed when a narrower one
//! is active. There is no fallback variant; unregistered tags fail with
//! [`TelemetryError::UnknownEventTag`] and the dispatcher degrades the
//! record instead of dropping it.

use crate::codec::PayloadReader;
use crate::packets::{PacketHeader, PacketKind};
use crate::{Result, TelemetryError};
use serde::Serialize;

/// Width of the details region: the widest variant (FastestLap, u8 + f32).
pub(crate) const EVENT_DETAILS_LEN: usize = 5;

/// Undecoded event body: the raw tag and the opaque details region.
pub(crate) struct RawEvent {
    pub code: [u8; 4],
    pub details: [u8; EVENT_DETAILS_LEN],
}

impl RawEvent {
    pub(crate) fn decode(body: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(body, PacketKind::Event);
        Ok(Self { code: r.bytes()?, details: r.bytes()? })
    }
}

/// Resolved event payload, one variant per registered tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventPayload {
    /// "FTLP" - a driver has set the fastest lap.
    FastestLap { vehicle_idx: u8, lap_time: f32 },
    /// "RTMT" - a driver has retired.
    Retirement { vehicle_idx: u8 },
    /// "TMPT" - your team mate has entered the pits.
    TeamMateInPits { vehicle_idx: u8 },
    /// "RCWN" - the race winner is announced.
    RaceWinner { vehicle_idx: u8 },
    /// "SSTA"
    SessionStarted,
    /// "SEND"
    SessionEnded,
    /// "DRSE"
    DrsEnabled,
    /// "DRSD"
    DrsDisabled,
    /// "CHQF"
    ChequeredFlag,
}

impl EventPayload {
    /// Resolve the details region against a registered tag.
    ///
    /// Reads exactly the matching variant's byte width; tag-only events read
    /// nothing. Unregistered tags fail without touching the details region.
    pub fn resolve(code: &[u8; 4], details: &[u8]) -> Result<Self> {
        let mut r = PayloadReader::new(details, PacketKind::Event);
        match code {
            b"FTLP" => Ok(EventPayload::FastestLap { vehicle_idx: r.u8()?, lap_time: r.f32()? }),
            b"RTMT" => Ok(EventPayload::Retirement { vehicle_idx: r.u8()? }),
            b"TMPT" => Ok(EventPayload::TeamMateInPits { vehicle_idx: r.u8()? }),
            b"RCWN" => Ok(EventPayload::RaceWinner { vehicle_idx: r.u8()? }),
            b"SSTA" => Ok(EventPayload::SessionStarted),
            b"SEND" => Ok(EventPayload::SessionEnded),
            b"DRSE" => Ok(EventPayload::DrsEnabled),
            b"DRSD" => Ok(EventPayload::DrsDisabled),
            b"CHQF" => Ok(EventPayload::ChequeredFlag),
            other => Err(TelemetryError::unknown_event_tag(other)),
        }
    }
}

/// Event packet. The raw tag is always preserved; `payload` is `None` when
/// the tag could not be resolved (degraded record, not a dropped datagram).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPacket {
    pub header: PacketHeader,
    /// Raw 4-character tag, lossily decoded for interchange.
    pub event_string_code: String,
    pub payload: Option<EventPayload>,
}

impl EventPacket {
    pub(crate) fn from_parts(
        header: PacketHeader,
        code: [u8; 4],
        payload: Option<EventPayload>,
    ) -> Self {
        Self { header, event_string_code: String::from_utf8_lossy(&code).into_owned(), payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastest_lap_resolves_exact_fields() {
        let mut details = [0u8; EVENT_DETAILS_LEN];
        details[0] = 14;
        details[1..5].copy_from_slice(&71.234f32.to_le_bytes());

        let payload = EventPayload::resolve(b"FTLP", &details).unwrap();
        assert_eq!(
            payload,
            EventPayload::FastestLap { vehicle_idx: 14, lap_time: 71.234 }
        );
    }

    #[test]
    fn narrow_variants_ignore_trailing_bytes() {
        // Trailing garbage from the wider FastestLap slot must not leak.
        let details = [7, 0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(
            EventPayload::resolve(b"RTMT", &details).unwrap(),
            EventPayload::Retirement { vehicle_idx: 7 }
        );
        assert_eq!(
            EventPayload::resolve(b"RCWN", &details).unwrap(),
            EventPayload::RaceWinner { vehicle_idx: 7 }
        );
    }

    #[test]
    fn tag_only_events_need_no_payload_bytes() {
        for code in [b"SSTA", b"SEND", b"DRSE", b"DRSD", b"CHQF"] {
            assert!(EventPayload::resolve(code, &[]).is_ok(), "{code:?}");
        }
    }

    #[test]
    fn unregistered_tag_is_rejected_without_decoding() {
        let err = EventPayload::resolve(b"XXXX", &[0xFF; EVENT_DETAILS_LEN]).unwrap_err();
        assert!(matches!(err, TelemetryError::UnknownEventTag { ref tag } if tag == "XXXX"));
    }
}
