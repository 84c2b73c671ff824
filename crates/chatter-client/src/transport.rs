//! WebSocket transport for the client.
//!
//! Provides [`ConnectedClient`] which handles WebSocket I/O for text frame
//! transport. This is a thin layer that just sends/receives frames - all
//! state lives in the Sans-IO [`crate::ChatClient`].
//!
//! # Event ordering
//!
//! The connection task emits [`ClientEvent`]s over a channel in wire order:
//! [`ClientEvent::Opened`] before any message, then one
//! [`ClientEvent::MessageReceived`] per text frame, then exactly one
//! [`ClientEvent::Closed`]. A failed handshake yields `Closed` with no
//! preceding `Opened`, so every connection attempt ends in `Closed`.

use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use crate::ClientEvent;

/// Transport errors.
///
/// Only configuration-time failures are surfaced as errors. Runtime
/// failures (handshake refused, stream errors, server close) all collapse
/// into a [`ClientEvent::Closed`] on the event channel.
#[derive(Debug, Error)]
pub enum TransportError {
    /// URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// URL scheme is not `ws` or `wss`.
    #[error("unsupported scheme: {0} (expected ws or wss)")]
    UnsupportedScheme(String),
}

/// Handle to a connected client with WebSocket transport.
///
/// Frames are sent/received via the channels; an internal task owns the
/// WebSocket stream. Dropping the handle (or calling [`ConnectedClient::stop`])
/// tears the connection down. There is no reconnect.
pub struct ConnectedClient {
    /// Send text frames to the server.
    pub outgoing: mpsc::Sender<String>,
    /// Receive connection events from the server, in wire order.
    pub events: mpsc::Receiver<ClientEvent>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedClient {
    /// Stop the connection.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Open a WebSocket connection to a chat server.
///
/// Validates the URL, then spawns the connection task on the current tokio
/// runtime and returns immediately; the handshake completes in the
/// background and is reported as [`ClientEvent::Opened`] (or
/// [`ClientEvent::Closed`] on failure). Never blocks, never retries.
pub fn connect(url: &str) -> Result<ConnectedClient, TransportError> {
    let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
    if url.scheme() != "ws" && url.scheme() != "wss" {
        return Err(TransportError::UnsupportedScheme(url.scheme().to_string()));
    }

    let (outgoing_tx, outgoing_rx) = mpsc::channel::<String>(32);
    let (events_tx, events_rx) = mpsc::channel::<ClientEvent>(32);

    let handle = tokio::spawn(run_connection(url, outgoing_rx, events_tx));

    Ok(ConnectedClient {
        outgoing: outgoing_tx,
        events: events_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// Run the connection, bridging between channels and the WebSocket stream.
async fn run_connection(
    url: Url,
    mut outgoing: mpsc::Receiver<String>,
    events: mpsc::Sender<ClientEvent>,
) {
    let (ws_stream, _response) = match connect_async(url.as_str()).await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("websocket connect failed: {e}");
            let _ = events.send(ClientEvent::Closed).await;
            return;
        },
    };

    if events.send(ClientEvent::Opened).await.is_err() {
        return;
    }

    let (mut sink, mut stream) = ws_stream.split();

    loop {
        tokio::select! {
            draft = outgoing.recv() => match draft {
                Some(text) => {
                    if let Err(e) = sink.send(Message::Text(text)).await {
                        tracing::warn!("websocket send failed: {e}");
                        break;
                    }
                },
                // Sender side dropped; nothing left to send.
                None => break,
            },
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if events.send(ClientEvent::MessageReceived(text)).await.is_err() {
                        break;
                    }
                },
                // Ping/pong are answered by tungstenite internally; binary
                // frames are outside the wire contract and dropped.
                Some(Ok(_)) => {},
                Some(Err(e)) => {
                    tracing::warn!("websocket stream error: {e}");
                    break;
                },
                None => break,
            },
        }
    }

    let _ = events.send(ClientEvent::Closed).await;
}
