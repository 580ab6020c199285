//! Modal overlays drawn on top of the game screen.

use crate::inventory::Inventory;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Numbered list of everything picked up so far.
pub fn draw_inventory(frame: &mut Frame, inventory: &Inventory<String>) {
    let height = (inventory.len().max(1) as u16) + 4;
    let area = super::centered_rect(30, height, frame.size());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    if inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "(nothing collected yet)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (index, name) in inventory.iter().enumerate() {
            lines.push(Line::from(format!("{}. {}", index + 1, name)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue...",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inventory ")
            .style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(widget, area);
}
