//! UDP receive loop.
//!
//! A single dedicated task pulls datagrams sequentially: each one is
//! decoded, or fails fast, before the next is read. Decoding is pure
//! in-memory work, so the only await points are the socket read and the
//! (non-blocking) sink hand-off. The loop runs until cancelled and never
//! dies because of a bad datagram.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::dispatch::{Dispatch, PacketDispatcher};
use crate::schema::LayoutRegistry;
use crate::sink::{PacketSink, TelemetryUpdate};
use crate::{Result, TelemetryError};

/// Largest datagram the game sends; one logical packet per datagram.
pub const MAX_DATAGRAM_LEN: usize = 5000;

/// Consecutive socket errors tolerated before the loop gives up.
const MAX_SOCKET_ERRORS: u32 = 10;

/// Owns the bound socket and drives the per-datagram state machine.
pub struct UdpReceiver {
    socket: UdpSocket,
    dispatcher: PacketDispatcher,
}

impl UdpReceiver {
    /// Bind the receive socket.
    pub async fn bind(addr: SocketAddr, registry: Arc<LayoutRegistry>) -> Result<Self> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| TelemetryError::socket(format!("bind {addr}"), e))?;
        info!(%addr, year = registry.protocol_year(), "telemetry receiver bound");
        Ok(Self { socket, dispatcher: PacketDispatcher::new(registry) })
    }

    /// Actual bound address (useful when binding port 0 in tests).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| TelemetryError::socket("local_addr", e))
    }

    /// Run the receive loop until `cancel` fires.
    ///
    /// Consumes the receiver; the socket is released when the loop returns.
    pub async fn run<S: PacketSink>(self, sink: S, cancel: CancellationToken) {
        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        let mut received = 0u64;
        let mut published = 0u64;
        let mut failed = 0u64;
        let mut skipped = 0u64;
        let mut socket_errors = 0u32;

        loop {
            let len = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("receive loop cancelled");
                    break;
                }
                result = self.socket.recv_from(&mut buf) => match result {
                    Ok((len, _addr)) => {
                        socket_errors = 0;
                        len
                    }
                    Err(e) => {
                        socket_errors += 1;
                        error!("socket receive failed ({}/{}): {}", socket_errors, MAX_SOCKET_ERRORS, e);
                        if socket_errors >= MAX_SOCKET_ERRORS {
                            error!("too many socket errors, stopping receive loop");
                            break;
                        }
                        continue;
                    }
                },
            };

            received += 1;
            match self.dispatcher.dispatch(&buf[..len]) {
                Dispatch::Packet(packet) => {
                    published += 1;
                    sink.deliver(TelemetryUpdate::Packet(Arc::new(packet))).await;
                }
                Dispatch::Failure(failure) => {
                    failed += 1;
                    sink.deliver(TelemetryUpdate::DecodeFailure(failure)).await;
                }
                Dispatch::Skipped { id } => {
                    skipped += 1;
                    debug!(id, skipped, "unknown packet kind count");
                }
            }
        }

        info!(received, published, failed, skipped, "receive loop ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CollectingSink {
        updates: Mutex<Vec<TelemetryUpdate>>,
    }

    #[async_trait::async_trait]
    impl PacketSink for Arc<CollectingSink> {
        async fn deliver(&self, update: TelemetryUpdate) {
            self.updates.lock().unwrap().push(update);
        }
    }

    fn lap_datagram() -> Vec<u8> {
        let mut datagram = Vec::with_capacity(843);
        datagram.extend_from_slice(&2019u16.to_le_bytes());
        datagram.extend_from_slice(&[1, 22, 1, 2]);
        datagram.extend_from_slice(&1u64.to_le_bytes());
        datagram.extend_from_slice(&0.0f32.to_le_bytes());
        datagram.extend_from_slice(&1u32.to_le_bytes());
        datagram.push(0);
        datagram.resize(843, 0);
        datagram
    }

    #[tokio::test]
    async fn receives_dispatches_and_stops_on_cancel() {
        let registry = Arc::new(LayoutRegistry::f1_2019());
        let receiver = UdpReceiver::bind("127.0.0.1:0".parse().unwrap(), registry)
            .await
            .unwrap();
        let addr = receiver.local_addr().unwrap();

        let sink = Arc::new(CollectingSink { updates: Mutex::new(Vec::new()) });
        let cancel = CancellationToken::new();
        let task = tokio::spawn(receiver.run(Arc::clone(&sink), cancel.clone()));

        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        sender.send_to(&lap_datagram(), addr).await.unwrap();
        sender.send_to(&[0u8; 5], addr).await.unwrap(); // truncated header

        // Wait for both datagrams to land.
        for _ in 0..100 {
            if sink.updates.lock().unwrap().len() == 2 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        cancel.cancel();
        task.await.unwrap();

        let updates = sink.updates.lock().unwrap();
        assert_eq!(updates.len(), 2);
        assert!(matches!(updates[0], TelemetryUpdate::Packet(_)));
        assert!(matches!(updates[1], TelemetryUpdate::DecodeFailure(_)));
    }
}
