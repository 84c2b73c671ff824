//! Message log area
//!
//! Displays the append-only message log, scrolled to the tail.

use chatter_client::{ChatClient, STATUS_CONNECTED, STATUS_EXITING};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BORDER_SIZE: u16 = 2;

/// Render the message log.
pub fn render(frame: &mut Frame, client: &ChatClient, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Messages ");

    let items: Vec<ListItem> = client
        .log()
        .iter()
        .map(|entry| {
            // Connection-status lines get a distinct style; everything else
            // is shown verbatim.
            let line = if entry == STATUS_CONNECTED || entry == STATUS_EXITING {
                Line::from(Span::styled(
                    entry.clone(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ))
            } else {
                Line::from(Span::raw(entry.clone()))
            };
            ListItem::new(line)
        })
        .collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
