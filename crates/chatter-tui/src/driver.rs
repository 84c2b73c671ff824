//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use chatter_client::{ChatClient, ClientEvent};

use crate::{InputState, KeyInput};

/// User-interface events delivered by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Keyboard input.
    Key(KeyInput),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
    /// Periodic tick. Lets the runtime poll the transport while idle.
    Tick,
}

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This keeps the
/// loop testable with scripted drivers.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next UI event.
    ///
    /// Returns an event or `None` if no event is ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<UiEvent>, Self::Error>> + Send;

    /// Receive the next connection event, if one is pending.
    fn recv_event(&mut self) -> impl Future<Output = Option<ClientEvent>> + Send;

    /// Send a text frame to the server.
    ///
    /// Sending while disconnected is a silent no-op: the transport's own
    /// failure behavior applies and surfaces only as a later close event.
    fn send_text(&mut self, text: String) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Open the connection to the server.
    ///
    /// Called exactly once per runtime; there is no reconnect.
    ///
    /// # Errors
    ///
    /// Returns an error only for configuration problems (e.g. an invalid
    /// URL); runtime connection failures arrive as [`ClientEvent::Closed`].
    fn connect(&mut self, url: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, client: &ChatClient, input: &InputState) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
