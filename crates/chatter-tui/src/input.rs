//! Input state and key handling for the TUI.
//!
//! This module owns the draft: the text buffer and cursor for the unsent
//! message. On Enter the draft is handed to [`ChatClient::send`], which
//! applies the configured guard and clears the buffer on the transmit path.

use chatter_client::{ChatClient, ClientAction};

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Draft state for the TUI.
///
/// Manages the text input buffer and cursor position. Handles all
/// character-level key events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Unsent draft text.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys, or
    /// contain a transmit on Enter).
    pub fn handle_key(&mut self, key: KeyInput, client: &mut ChatClient) -> Vec<ClientAction> {
        match key {
            KeyInput::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(c.len_utf8());
                vec![ClientAction::Render]
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.remove(prev);
                    self.cursor = prev;
                }
                vec![ClientAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                vec![ClientAction::Render]
            },
            KeyInput::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                vec![ClientAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                vec![ClientAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![ClientAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![ClientAction::Render]
            },
            KeyInput::Enter => {
                let actions = client.send(&mut self.buffer);
                // A rejected empty draft stays put; a transmit cleared it.
                self.cursor = self.cursor.min(self.buffer.len());
                actions
            },
            KeyInput::Esc => vec![ClientAction::Quit],
        }
    }
}

/// Byte index of the char boundary preceding `index`.
fn prev_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.saturating_sub(1);
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Byte index of the char boundary following `index`.
fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.saturating_add(1);
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
