//! Client events and actions.

/// Events the caller feeds into the client.
///
/// The caller is responsible for receiving frames from the transport and
/// delivering them here in arrival order. The transport contract guarantees
/// that [`ClientEvent::Opened`] precedes any [`ClientEvent::MessageReceived`]
/// and that [`ClientEvent::Closed`] arrives exactly once, after all messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Connection handshake completed.
    Opened,

    /// Text frame received from the server.
    ///
    /// The payload is displayed verbatim; no parsing, validation, or size
    /// limit is applied.
    MessageReceived(String),

    /// Connection closed.
    ///
    /// Emitted for clean closes, network failures, and failed connects
    /// alike; the client does not distinguish them.
    Closed,
}

/// Actions the client produces for the caller to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientAction {
    /// Send a text frame to the server.
    ///
    /// Fire-and-forget: no acknowledgement, retry, or delivery
    /// confirmation. Sending while disconnected is a silent no-op.
    Transmit(String),

    /// Render the UI.
    Render,

    /// Quit the application.
    ///
    /// Never produced by [`crate::ChatClient`] itself; emitted by input
    /// handling layers that share this action vocabulary.
    Quit,
}
