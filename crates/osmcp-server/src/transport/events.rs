//! Server-Push Event Stream
//!
//! Generates the event sequence for the companion push channel: one
//! connection-established event immediately, then a heartbeat at a
//! fixed interval, then one disconnection event when the subscription
//! is cancelled, after which the stream ends.
//!
//! The loop is an explicit supervised select over a cancellation token,
//! so cancellation is observed within one poll rather than after a
//! pending sleep expires.

use async_stream::stream;
use futures::Stream;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

use crate::constants::HEARTBEAT_INTERVAL;

/// Events emitted on the server-push channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushEvent {
    /// Emitted once, immediately after the stream opens
    Connected,
    /// Emitted at a fixed interval while the stream is open
    Heartbeat,
    /// Emitted once when the subscription is cancelled
    Disconnected,
}

impl PushEvent {
    /// SSE event name
    pub fn name(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Heartbeat => "heartbeat",
            Self::Disconnected => "disconnected",
        }
    }

    /// SSE event payload
    pub fn data(self) -> &'static str {
        match self {
            Self::Connected => r#"{"status":"connected"}"#,
            Self::Heartbeat => r#"{"status":"alive"}"#,
            Self::Disconnected => r#"{"status":"disconnected"}"#,
        }
    }
}

/// Produce the push-channel event sequence until `cancel` fires
pub fn push_events(cancel: CancellationToken) -> impl Stream<Item = PushEvent> {
    stream! {
        yield PushEvent::Connected;

        let mut ticker = interval_at(Instant::now() + HEARTBEAT_INTERVAL, HEARTBEAT_INTERVAL);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    yield PushEvent::Disconnected;
                    break;
                }
                _ = ticker.tick() => {
                    yield PushEvent::Heartbeat;
                }
            }
        }
    }
}
