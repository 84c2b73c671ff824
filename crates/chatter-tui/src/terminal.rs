//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Network uses the WebSocket
//! transport from `chatter-client`.

use std::io::{self, Stdout, stdout};

use chatter_client::{
    ChatClient, ClientEvent,
    transport::{self, ConnectedClient, TransportError},
};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{Driver, InputState, KeyInput, UiEvent, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), and the WebSocket
/// connection. Holds at most one connection for its entire lifetime.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    connection: Option<ConnectedClient>,
}

impl TerminalDriver {
    /// Create a new terminal driver and enter the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, connection: None })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<UiEvent>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event.code).map(UiEvent::Key))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(Some(UiEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(Some(UiEvent::Tick))
            }
        }
    }

    async fn recv_event(&mut self) -> Option<ClientEvent> {
        self.connection.as_mut().and_then(|conn| conn.events.try_recv().ok())
    }

    async fn send_text(&mut self, text: String) -> Result<(), Self::Error> {
        if let Some(conn) = &self.connection {
            if let Err(e) = conn.outgoing.send(text).await {
                // Connection task already gone; the close event will tell
                // the user.
                tracing::debug!("dropped outgoing frame: {e}");
            }
        }
        Ok(())
    }

    async fn connect(&mut self, url: &str) -> Result<(), Self::Error> {
        let client = transport::connect(url)?;
        self.connection = Some(client);
        Ok(())
    }

    fn render(&mut self, client: &ChatClient, input: &InputState) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, client, input);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(ref conn) = self.connection {
            conn.stop();
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
