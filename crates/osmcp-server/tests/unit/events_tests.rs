//! Tests for the server-push event stream
//!
//! Uses the paused tokio clock, so heartbeat timing is asserted exactly
//! rather than approximately.

use futures::StreamExt;
use std::pin::pin;
use tokio_util::sync::CancellationToken;

use osmcp_server::constants::HEARTBEAT_INTERVAL;
use osmcp_server::transport::events::{PushEvent, push_events};

#[tokio::test(start_paused = true)]
async fn test_stream_emits_connected_immediately_then_heartbeats() {
    let cancel = CancellationToken::new();
    let mut events = pin!(push_events(cancel));

    let start = tokio::time::Instant::now();
    assert_eq!(events.next().await, Some(PushEvent::Connected));
    assert_eq!(start.elapsed(), std::time::Duration::ZERO);

    // One heartbeat per interval, exactly
    assert_eq!(events.next().await, Some(PushEvent::Heartbeat));
    assert_eq!(start.elapsed(), HEARTBEAT_INTERVAL);

    assert_eq!(events.next().await, Some(PushEvent::Heartbeat));
    assert_eq!(start.elapsed(), HEARTBEAT_INTERVAL * 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_emits_one_disconnected_then_nothing() {
    let cancel = CancellationToken::new();
    let mut events = pin!(push_events(cancel.clone()));

    assert_eq!(events.next().await, Some(PushEvent::Connected));

    cancel.cancel();
    assert_eq!(events.next().await, Some(PushEvent::Disconnected));
    assert_eq!(events.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_is_observed_without_waiting_out_the_interval() {
    let cancel = CancellationToken::new();
    let mut events = pin!(push_events(cancel.clone()));

    let start = tokio::time::Instant::now();
    assert_eq!(events.next().await, Some(PushEvent::Connected));
    assert_eq!(events.next().await, Some(PushEvent::Heartbeat));

    cancel.cancel();
    assert_eq!(events.next().await, Some(PushEvent::Disconnected));
    // No further sleep happened between the heartbeat and the shutdown
    assert_eq!(start.elapsed(), HEARTBEAT_INTERVAL);
    assert_eq!(events.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_first_poll_still_connects_first() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let mut events = pin!(push_events(cancel));

    // The connection-established event always opens the stream
    assert_eq!(events.next().await, Some(PushEvent::Connected));
    assert_eq!(events.next().await, Some(PushEvent::Disconnected));
    assert_eq!(events.next().await, None);
}

#[test]
fn test_event_names_and_payloads() {
    assert_eq!(PushEvent::Connected.name(), "connected");
    assert_eq!(PushEvent::Heartbeat.name(), "heartbeat");
    assert_eq!(PushEvent::Disconnected.name(), "disconnected");

    for event in [
        PushEvent::Connected,
        PushEvent::Heartbeat,
        PushEvent::Disconnected,
    ] {
        let payload: serde_json::Value = serde_json::from_str(event.data()).unwrap();
        assert!(payload["status"].is_string());
    }
}
