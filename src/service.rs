//! Service facade: binds the socket, spawns the receive loop, and hands out
//! subscriber streams.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use futures::Stream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::RelayConfig;
use crate::receiver::UdpReceiver;
use crate::relay::{TelemetryRelay, UpdateRate};
use crate::schema::LayoutRegistry;
use crate::sink::TelemetryUpdate;
use crate::{Result, TelemetryError};

/// Running telemetry relay service.
///
/// Owns the receive loop task; dropping the service (or calling
/// [`shutdown`](Self::shutdown)) cancels the loop and releases the socket.
/// Existing subscriber streams drain whatever the relay still holds and end.
#[derive(Debug)]
pub struct TelemetryService {
    relay: TelemetryRelay,
    registry: Arc<LayoutRegistry>,
    local_addr: SocketAddr,
    cancel: CancellationToken,
}

impl TelemetryService {
    /// Bind the configured UDP port and start relaying.
    ///
    /// # Errors
    ///
    /// Fails when the configured protocol year is unsupported or the socket
    /// cannot be bound.
    pub async fn bind(config: RelayConfig) -> Result<Self> {
        if config.protocol_year != 2019 {
            return Err(TelemetryError::UnsupportedProtocolYear { year: config.protocol_year });
        }
        let registry = Arc::new(LayoutRegistry::f1_2019());

        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), config.port);
        let receiver = UdpReceiver::bind(addr, Arc::clone(&registry)).await?;
        let local_addr = receiver.local_addr()?;

        let relay = TelemetryRelay::new(config.channel_capacity);
        let cancel = CancellationToken::new();

        let sink = relay.clone();
        let loop_cancel = cancel.clone();
        tokio::spawn(async move {
            receiver.run(sink, loop_cancel).await;
        });

        info!(%local_addr, "telemetry service started");
        Ok(Self { relay, registry, local_addr, cancel })
    }

    /// Subscribe at the native (~60Hz) rate.
    pub fn subscribe(&self) -> impl Stream<Item = TelemetryUpdate> + Send + 'static {
        self.relay.subscribe()
    }

    /// Subscribe with a rate cap, latest-wins within each interval.
    pub fn subscribe_at(
        &self,
        rate: UpdateRate,
    ) -> std::pin::Pin<Box<dyn Stream<Item = TelemetryUpdate> + Send + 'static>> {
        self.relay.subscribe_at(rate)
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.relay.subscriber_count()
    }

    /// The layout registry in use.
    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    /// Address the receive socket is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting datagrams and release the socket.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for TelemetryService {
    fn drop(&mut self) {
        debug!("dropping telemetry service");
        self.cancel.cancel();
    }
}
