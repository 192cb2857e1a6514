//! Feed connection lifecycle.
//!
//! Connects to the backend event feed, reads frames, and routes parsed
//! events through the [`Dispatcher`]. Reconnects with capped exponential
//! backoff; a malformed frame is logged and skipped, never fatal.

use crate::dispatch::Dispatcher;
use crate::error::{FeedError, FeedResult};
use crate::parser::parse_message;
use futures_util::{SinkExt, StreamExt};
use mira_stores::{Component, ConnectionStatus};
use std::time::Duration;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Feed connection configuration.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// WebSocket URL, e.g. `ws://localhost:8000/ws`.
    pub url: String,
    /// Base delay for exponential backoff.
    pub reconnect_base_delay_ms: u64,
    /// Ceiling for the backoff delay.
    pub reconnect_max_delay_ms: u64,
    /// Maximum reconnection attempts (0 = infinite).
    pub max_reconnect_attempts: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            reconnect_base_delay_ms: 1000,
            reconnect_max_delay_ms: 30000,
            max_reconnect_attempts: 0,
        }
    }
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Owns the connect/read loop for the realtime feed.
pub struct FeedConnection {
    config: FeedConfig,
    dispatcher: Dispatcher,
    shutdown: CancellationToken,
}

impl FeedConnection {
    pub fn new(config: FeedConfig, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            dispatcher,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token to cancel from another task.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Run the feed until shutdown or the reconnect budget is spent.
    pub async fn run(&self) -> FeedResult<()> {
        let mut attempt = 0u32;

        loop {
            if self.shutdown.is_cancelled() {
                self.mark_feed(ConnectionStatus::Disconnected);
                return Ok(());
            }

            self.mark_feed(ConnectionStatus::Connecting);

            match self.read_until_closed().await {
                Ok(()) => {
                    info!("Feed connection closed");
                    attempt = 0;
                }
                Err(e) => {
                    error!(?e, "Feed connection error");
                }
            }

            self.mark_feed(ConnectionStatus::Disconnected);

            if self.shutdown.is_cancelled() {
                return Ok(());
            }

            attempt += 1;
            if self.config.max_reconnect_attempts > 0
                && attempt >= self.config.max_reconnect_attempts
            {
                error!(attempt, "Feed reconnect budget exhausted");
                return Err(FeedError::Connection(
                    "max reconnection attempts reached".to_string(),
                ));
            }

            let delay = backoff_delay(
                self.config.reconnect_base_delay_ms,
                self.config.reconnect_max_delay_ms,
                attempt,
            );
            warn!(attempt, delay_ms = delay.as_millis(), "Reconnecting feed");

            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = self.shutdown.cancelled() => {
                    self.mark_feed(ConnectionStatus::Disconnected);
                    return Ok(());
                }
            }
        }
    }

    async fn read_until_closed(&self) -> FeedResult<()> {
        info!(url = %self.config.url, "Connecting to feed");
        let (ws_stream, _response) = connect_async(&self.config.url).await?;
        let (mut write, mut read) = ws_stream.split();

        self.mark_feed(ConnectionStatus::Connected);
        info!("Feed connected");

        loop {
            tokio::select! {
                () = self.shutdown.cancelled() => {
                    if let Err(e) = write.send(Message::Close(None)).await {
                        warn!(?e, "Failed to send close frame during shutdown");
                    }
                    return Ok(());
                }

                frame = read.next() => {
                    match frame {
                        Some(Ok(Message::Text(text))) => {
                            self.handle_frame(&text);
                        }
                        Some(Ok(Message::Ping(data))) => {
                            write.send(Message::Pong(data)).await?;
                        }
                        Some(Ok(Message::Close(frame))) => {
                            debug!(?frame, "Feed closed by server");
                            return Ok(());
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            warn!("Feed stream ended");
                            return Ok(());
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// Parse and dispatch one text frame. Parse failures are logged and
    /// dropped so one bad frame cannot take the connection down.
    fn handle_frame(&self, text: &str) {
        match parse_message(text) {
            Ok(Some(event)) => self.dispatcher.dispatch(event),
            Ok(None) => {}
            Err(e) => warn!(?e, "Dropping malformed feed frame"),
        }
    }

    fn mark_feed(&self, status: ConnectionStatus) {
        self.dispatcher
            .stores()
            .health
            .set_status(Component::Sentinel, status);
    }
}

/// Exponential backoff: base * 2^(attempt-1), capped.
fn backoff_delay(base_ms: u64, max_ms: u64, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(10);
    let delay = base_ms.saturating_mul(1u64 << exponent).min(max_ms);
    Duration::from_millis(delay)
}
