//! Startup configuration.

use serde::{Deserialize, Serialize};

/// Default UDP port the game publishes telemetry on.
pub const DEFAULT_PORT: u16 = 27077;

/// Startup parameters for the relay service. Deliberately minimal: the bind
/// port, the protocol year, and the relay queue depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// UDP port to bind.
    pub port: u16,
    /// Protocol year to decode. Only 2019 is supported.
    pub protocol_year: u16,
    /// Per-subscriber broadcast queue depth before laggards drop updates.
    pub channel_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, protocol_year: 2019, channel_capacity: 64 }
    }
}
