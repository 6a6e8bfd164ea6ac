//! Error types for telemetry decoding and relaying.
//!
//! All decode errors are *local*: they describe exactly one datagram and are
//! handled by dropping or degrading that datagram. None of them should ever
//! terminate the receive loop. Socket errors are the exception and surface
//! from the I/O layer rather than the decoder.
//!
//! ## Recoverability
//!
//! ```rust
//! use slipstream::TelemetryError;
//!
//! let error = TelemetryError::truncated_header(10);
//! assert!(error.is_recoverable());
//! ```

use crate::packets::PacketKind;
use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

const HEADER_LEN: usize = 23;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("datagram too short for packet header: {available} of {HEADER_LEN} bytes")]
    TruncatedHeader { available: usize },

    #[error("{kind:?} body truncated: {available} of {required} bytes")]
    TruncatedBody { kind: PacketKind, required: usize, available: usize },

    #[error("unknown packet id {id} (valid ids are 0-7)")]
    UnknownPacketKind { id: u8 },

    #[error("unknown event tag {tag:?}")]
    UnknownEventTag { tag: String },

    #[error("unsupported protocol year {year}, only 2019 is implemented")]
    UnsupportedProtocolYear { year: u16 },

    #[error("UDP socket error: {context}")]
    Socket {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TelemetryError {
    /// Whether processing can continue with the next datagram after this error.
    ///
    /// Every decode failure applies to a single datagram; only socket faults
    /// indicate the receive loop itself is in trouble.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TelemetryError::TruncatedHeader { .. } => true,
            TelemetryError::TruncatedBody { .. } => true,
            TelemetryError::UnknownPacketKind { .. } => true,
            TelemetryError::UnknownEventTag { .. } => true,
            TelemetryError::UnsupportedProtocolYear { .. } => false,
            TelemetryError::Socket { .. } => false,
        }
    }

    /// Helper constructor for header truncation.
    pub fn truncated_header(available: usize) -> Self {
        TelemetryError::TruncatedHeader { available }
    }

    /// Helper constructor for body truncation.
    pub fn truncated_body(kind: PacketKind, required: usize, available: usize) -> Self {
        TelemetryError::TruncatedBody { kind, required, available }
    }

    /// Helper constructor for unregistered event tags. The raw tag bytes are
    /// preserved lossily so garbage tags are still reportable.
    pub fn unknown_event_tag(tag: &[u8; 4]) -> Self {
        TelemetryError::UnknownEventTag { tag: String::from_utf8_lossy(tag).into_owned() }
    }

    /// Helper constructor for socket errors with operation context.
    pub fn socket(context: impl Into<String>, source: std::io::Error) -> Self {
        TelemetryError::Socket { context: context.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_errors_are_always_recoverable(
                available in 0usize..23usize,
                required in 24usize..2000usize,
                id in 8u8..=255u8,
                tag in prop::array::uniform4(any::<u8>()),
            ) {
                // Property: every per-datagram decode error is recoverable
                let errors = vec![
                    TelemetryError::truncated_header(available),
                    TelemetryError::truncated_body(PacketKind::LapData, required, available),
                    TelemetryError::UnknownPacketKind { id },
                    TelemetryError::unknown_event_tag(&tag),
                ];
                for error in errors {
                    prop_assert!(error.is_recoverable());
                    prop_assert!(!error.to_string().is_empty());
                }
            }

            #[test]
            fn error_messages_carry_their_context(
                available in 0usize..23usize,
                id in 8u8..=255u8,
            ) {
                let header_err = TelemetryError::truncated_header(available);
                prop_assert!(header_err.to_string().contains(&available.to_string()));

                let kind_err = TelemetryError::UnknownPacketKind { id };
                prop_assert!(kind_err.to_string().contains(&id.to_string()));
            }
        }
    }

    #[test]
    fn socket_errors_are_not_recoverable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let error = TelemetryError::socket("bind 0.0.0.0:27077", io_err);
        assert!(!error.is_recoverable());
        assert!(error.to_string().contains("bind 0.0.0.0:27077"));
    }

    #[test]
    fn unknown_tag_preserves_raw_bytes() {
        let error = TelemetryError::unknown_event_tag(b"XXXX");
        assert!(error.to_string().contains("XXXX"));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: TelemetryError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<TelemetryError>();

        let error = TelemetryError::truncated_header(3);
        let _: &dyn std::error::Error = &error;
    }
}
