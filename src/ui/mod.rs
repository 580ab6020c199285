//! Terminal rendering: main menu, game screen, and game-over screen.

pub mod overlays;
pub mod room_view;

use crate::constants::{ROOM_HEIGHT, ROOM_WIDTH};
use crate::session::{GameOutcome, GameSession, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use room_view::RoomWidget;

const TITLE: &str = "====  Carnage  ====";

pub fn draw_menu(frame: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Start Game"),
        Line::from("2. Exit Game"),
        Line::from(""),
        Line::from(Span::styled(
            "Enter your choice:",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let area = centered_rect(30, 8, frame.size());
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Main Menu "));
    frame.render_widget(menu, area);
}

pub fn draw_game(frame: &mut Frame, session: &GameSession, log: &[String]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                      // title
            Constraint::Length(ROOM_HEIGHT as u16 + 2), // room grid
            Constraint::Length(1),                      // status line
            Constraint::Min(3),                         // message log
            Constraint::Length(1),                      // key hints / prompt
        ])
        .split(frame.size());

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let grid_area = centered_rect(ROOM_WIDTH as u16 * 2 + 2, ROOM_HEIGHT as u16 + 2, chunks[1]);
    let grid_block = Block::default().borders(Borders::ALL);
    let grid_inner = grid_block.inner(grid_area);
    frame.render_widget(grid_block, grid_area);
    frame.render_widget(RoomWidget::new(&session.room), grid_inner);

    let hp = session.player().map_or(0, |p| p.health);
    let status = format!(
        "HP: {}   Frames: {}   Items: {}",
        hp,
        session.used_moves(),
        session.inventory.len()
    );
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[2],
    );

    draw_log(frame, chunks[3], log);

    let prompt = match session.phase {
        Phase::Running => "[w/a/s/d] move   [space] attack   [i] inventory",
        Phase::AwaitingAck {
            movement_inert: false,
        } => "Press any key to continue...",
        Phase::AwaitingAck {
            movement_inert: true,
        } => "Press any key (except movement keys) to continue...",
        Phase::ShowingInventory => "Press any key to close the inventory...",
        Phase::Over(_) => "",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(prompt, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        chunks[4],
    );

    if session.phase == Phase::ShowingInventory {
        overlays::draw_inventory(frame, &session.inventory);
    }
}

pub fn draw_game_over(frame: &mut Frame, outcome: GameOutcome) {
    let (headline, detail, color) = match outcome {
        GameOutcome::Victory { frames } => (
            "All enemies have been defeated. Game Over!",
            format!("It took you {frames} frame refreshes."),
            Color::Green,
        ),
        GameOutcome::Defeat { frames } => (
            "You have fallen!",
            format!("You survived {frames} frame refreshes."),
            Color::Red,
        ),
    };
    let lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(detail),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to return to the menu...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let area = centered_rect(50, 6, frame.size());
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let block = Block::default().borders(Borders::ALL).title(" Messages ");
    let inner_height = block.inner(area).height as usize;
    let start = log.len().saturating_sub(inner_height);
    let lines: Vec<Line> = log[start..].iter().map(|m| Line::from(m.as_str())).collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Fixed-size rect centered in `area`, shrunk to fit when the terminal is
/// smaller than requested.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
