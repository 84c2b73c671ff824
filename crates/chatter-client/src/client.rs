//! Chat client state machine.
//!
//! [`ChatClient`] is a pure state machine: it consumes [`ClientEvent`]
//! inputs and produces [`ClientAction`] instructions for the runtime to
//! execute. It owns the append-only message log and observes (never drives)
//! the connection lifecycle.

use crate::{ClientAction, ClientEvent};

/// Log entry appended when the connection opens.
pub const STATUS_CONNECTED: &str = "Connected";

/// Log entry appended when the connection closes, for any reason.
pub const STATUS_EXITING: &str = "Exiting";

/// Connection state as observed by the client.
///
/// The lifecycle is delegated entirely to the transport; the client only
/// mirrors it. There is no reconnect, so `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake in progress.
    Connecting,
    /// Connection established.
    Open,
    /// Connection closed. Terminal.
    Closed,
}

/// Guard applied to outgoing drafts.
///
/// The two variants reconcile a genuine behavioral divergence in the
/// original client: one build refused to send a falsy draft, the other sent
/// anything that was defined, including the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendPolicy {
    /// An empty draft is not sent and is left untouched.
    #[default]
    RejectEmpty,
    /// Every draft is sent, including the empty string.
    AllowEmpty,
}

/// Chat client state machine.
///
/// Owns one append-only log of display strings and a single observed
/// connection. No I/O dependencies - fully testable without a server.
#[derive(Debug, Clone)]
pub struct ChatClient {
    /// Append-only message log, in event arrival order.
    log: Vec<String>,
    /// Observed connection state.
    state: ConnectionState,
    /// Guard for outgoing drafts.
    policy: SendPolicy,
    /// Server URL for the single connection.
    url: String,
}

impl ChatClient {
    /// Create a client with the given send policy and server URL.
    ///
    /// The client starts in [`ConnectionState::Connecting`]; the caller is
    /// expected to open the transport immediately and exactly once.
    pub fn new(policy: SendPolicy, url: impl Into<String>) -> Self {
        Self { log: Vec::new(), state: ConnectionState::Connecting, policy, url: url.into() }
    }

    /// Process a connection event and return actions.
    ///
    /// Log appends happen in the order events are delivered; entries are
    /// never reordered, dropped, or truncated.
    pub fn handle(&mut self, event: ClientEvent) -> Vec<ClientAction> {
        match event {
            ClientEvent::Opened => {
                self.state = ConnectionState::Open;
                self.log.push(STATUS_CONNECTED.to_string());
                vec![ClientAction::Render]
            },
            ClientEvent::MessageReceived(text) => {
                self.log.push(text);
                vec![ClientAction::Render]
            },
            ClientEvent::Closed => {
                self.state = ConnectionState::Closed;
                self.log.push(STATUS_EXITING.to_string());
                vec![ClientAction::Render]
            },
        }
    }

    /// Send the draft as a single text frame.
    ///
    /// Under [`SendPolicy::RejectEmpty`] an empty draft produces no actions
    /// and is left untouched. On the transmit path the draft is taken and
    /// reset to the empty string so the input control clears.
    ///
    /// The draft is not echoed into the log; only frames delivered by the
    /// server appear there.
    pub fn send(&mut self, draft: &mut String) -> Vec<ClientAction> {
        if self.policy == SendPolicy::RejectEmpty && draft.is_empty() {
            return vec![];
        }
        let text = std::mem::take(draft);
        vec![ClientAction::Transmit(text), ClientAction::Render]
    }

    /// Message log, in arrival order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Observed connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// Configured send policy.
    pub fn policy(&self) -> SendPolicy {
        self.policy
    }

    /// Server URL (ws/wss).
    pub fn url(&self) -> &str {
        &self.url
    }
}
