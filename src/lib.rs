//! Decoder and streaming relay for the F1 2019 UDP telemetry protocol.
//!
//! The game publishes fixed-layout binary packets over UDP at ~60Hz. This
//! crate decodes those datagrams into strongly-typed records and republishes
//! them to any number of subscribers through an in-process broadcast relay.
//!
//! # Architecture
//!
//! raw datagram → header decode → record decode (+ event payload resolution)
//! → broadcast relay → subscribers
//!
//! Every datagram is independent and disposable: decode failures drop or
//! degrade that one datagram and the loop moves on. Slow subscribers lose
//! old updates instead of buffering without bound, since telemetry is
//! latest-value-biased.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slipstream::{RelayConfig, TelemetryService, TelemetryUpdate};
//! use tokio_stream::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> slipstream::Result<()> {
//!     let service = TelemetryService::bind(RelayConfig::default()).await?;
//!     let mut updates = service.subscribe();
//!
//!     while let Some(update) = updates.next().await {
//!         if let TelemetryUpdate::Packet(packet) = update {
//!             println!("{:?} frame {}", packet.kind(), packet.header().frame_identifier);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod codec;
mod config;
mod dispatch;
mod error;
mod receiver;
mod relay;
mod service;
mod sink;

pub mod packets;
pub mod schema;
pub mod stream;

pub use codec::PayloadReader;
pub use config::{DEFAULT_PORT, RelayConfig};
pub use dispatch::{DecodeFailure, Dispatch, PacketDispatcher};
pub use error::{Result, TelemetryError};
pub use receiver::{MAX_DATAGRAM_LEN, UdpReceiver};
pub use relay::{TelemetryRelay, UpdateRate};
pub use service::TelemetryService;
pub use sink::{PacketSink, TelemetryUpdate};

pub use packets::{PacketHeader, PacketKind, TelemetryPacket};
pub use schema::LayoutRegistry;
