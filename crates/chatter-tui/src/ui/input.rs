//! Input line
//!
//! Displays the draft with cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

const PROMPT_WIDTH: u16 = 3; // "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, draft: &InputState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let input_text = format!("> {}", draft.buffer());
    let paragraph =
        Paragraph::new(input_text).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    // The cursor is a byte index; count chars for the display column.
    let cursor_chars = draft.buffer()[..draft.cursor()].chars().count() as u16;

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = cursor_chars.min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
