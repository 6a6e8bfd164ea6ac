//! End-to-end flow: datagrams in over UDP, typed updates out of subscriber
//! streams.

mod common;

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use common::{event_datagram, header_bytes, lap_datagram};
use slipstream::{
    RelayConfig, TelemetryError, TelemetryPacket, TelemetryService, TelemetryUpdate, UpdateRate,
};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tokio_stream::StreamExt;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn test_config() -> RelayConfig {
    RelayConfig { port: 0, ..RelayConfig::default() }
}

async fn game_socket(service: &TelemetryService) -> (UdpSocket, SocketAddr) {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let target = SocketAddr::from((Ipv4Addr::LOCALHOST, service.local_addr().port()));
    (socket, target)
}

async fn next_update(
    stream: &mut (impl StreamExt<Item = TelemetryUpdate> + Unpin),
) -> TelemetryUpdate {
    timeout(RECV_TIMEOUT, stream.next()).await.expect("timed out").expect("stream ended")
}

#[tokio::test(flavor = "multi_thread")]
async fn datagrams_reach_subscribers_as_typed_records() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let service = TelemetryService::bind(test_config()).await?;
    let mut updates = service.subscribe();
    let (socket, target) = game_socket(&service).await;

    socket.send_to(&lap_datagram(100, 321.0), target).await?;

    let update = next_update(&mut updates).await;
    let packet = update.packet().expect("expected a decoded record");
    assert_eq!(packet.header().frame_identifier, 100);
    let TelemetryPacket::LapData(lap) = packet else {
        panic!("expected lap data, got {:?}", packet.kind());
    };
    assert_eq!(lap.lap_data[0].total_distance, 321.0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn decode_failures_are_published_not_swallowed() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let service = TelemetryService::bind(test_config()).await?;
    let mut updates = service.subscribe();
    let (socket, target) = game_socket(&service).await;

    // Unknown id 9 is skipped silently; the truncated datagram that follows
    // must surface as a failure descriptor, then normal flow resumes.
    let mut unknown = header_bytes(9, 1);
    unknown.resize(64, 0);
    socket.send_to(&unknown, target).await?;
    socket.send_to(&lap_datagram(1, 0.0)[..40], target).await?;
    socket.send_to(&event_datagram(2, b"SSTA", &[]), target).await?;

    let first = next_update(&mut updates).await;
    let TelemetryUpdate::DecodeFailure(failure) = first else {
        panic!("expected a decode failure first, got {first:?}");
    };
    assert_eq!(failure.packet_id, Some(2));
    assert_eq!(failure.datagram_len, 40);

    let second = next_update(&mut updates).await;
    let packet = second.packet().expect("expected a decoded record");
    assert_eq!(packet.header().frame_identifier, 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rate_capped_subscription_still_delivers() {
    let service = TelemetryService::bind(test_config()).await.unwrap();
    let mut updates = service.subscribe_at(UpdateRate::Max(120));
    assert_eq!(service.subscriber_count(), 1);
    let (socket, target) = game_socket(&service).await;

    socket.send_to(&lap_datagram(1, 1.5), target).await.unwrap();

    let update = next_update(&mut updates).await;
    assert_eq!(update.packet().unwrap().header().frame_identifier, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_ends_subscriber_streams() {
    let service = TelemetryService::bind(test_config()).await.unwrap();
    let mut updates = service.subscribe();

    service.shutdown();
    drop(service);

    let end = timeout(RECV_TIMEOUT, updates.next()).await.expect("timed out");
    assert!(end.is_none(), "stream should end once the service is gone");
}

#[tokio::test]
async fn unsupported_protocol_year_is_rejected_at_bind() {
    let config = RelayConfig { protocol_year: 2020, ..test_config() };
    let err = TelemetryService::bind(config).await.unwrap_err();
    assert!(matches!(err, TelemetryError::UnsupportedProtocolYear { year: 2020 }));
    assert!(!err.is_recoverable());
}
