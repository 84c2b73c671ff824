//! Status bar
//!
//! Displays connection status, log size, and the server URL.

use chatter_client::{ChatClient, ConnectionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, client: &ChatClient, area: Rect) {
    let connection_status = match client.connection_state() {
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Open => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Closed => Span::styled("Disconnected", Style::default().fg(Color::Red)),
    };

    let log_info = format!(" | Messages: {} | {}", client.log().len(), client.url());

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(log_info, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
