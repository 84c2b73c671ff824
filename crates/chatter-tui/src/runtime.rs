//! Generic runtime for application orchestration.
//!
//! The Runtime drives the single-threaded event loop, coordinating between:
//! - [`ChatClient`]: message log state machine
//! - [`InputState`]: draft editing
//! - [`Driver`]: platform-specific I/O
//!
//! All log and draft mutation happens on this one task, so event handlers
//! run to completion without interleaving.

use chatter_client::{ChatClient, ClientAction, SendPolicy};

use crate::{Driver, InputState, UiEvent};

/// Generic runtime that orchestrates client, input, and driver.
pub struct Runtime<D: Driver> {
    driver: D,
    client: ChatClient,
    input: InputState,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver, send policy, and server
    /// URL.
    pub fn new(driver: D, policy: SendPolicy, url: String) -> Self {
        Self { driver, client: ChatClient::new(policy, url), input: InputState::new() }
    }

    /// Run the main event loop.
    ///
    /// Renders once, opens the connection exactly once, then cycles:
    /// poll a UI event, poll a connection event, execute resulting actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.client, &self.input)?;
        self.driver.connect(self.client.url()).await?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        if let Some(event) = self.driver.poll_event().await? {
            let actions = match event {
                UiEvent::Key(key) => self.input.handle_key(key, &mut self.client),
                UiEvent::Resize(_, _) => vec![ClientAction::Render],
                UiEvent::Tick => vec![],
            };
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        if let Some(event) = self.driver.recv_event().await {
            let actions = self.client.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Execute actions produced by the client or input handling.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, actions: Vec<ClientAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                ClientAction::Render => self.driver.render(&self.client, &self.input)?,
                ClientAction::Transmit(text) => self.driver.send_text(text).await?,
                ClientAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Get a reference to the client.
    pub fn client(&self) -> &ChatClient {
        &self.client
    }
}
