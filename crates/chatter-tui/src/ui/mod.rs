//! UI rendering
//!
//! Rendering functions that convert client state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod input;
mod log;
mod status;

use chatter_client::ChatClient;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::InputState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, client: &ChatClient, draft: &InputState) {
    const LOG_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(LOG_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [log_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    log::render(frame, client, *log_area);
    input::render(frame, draft, *input_area);
    status::render(frame, client, *status_area);
}
