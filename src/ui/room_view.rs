//! Room grid rendering.

use crate::constants::*;
use crate::entity::EntityKind;
use crate::grid::Position;
use crate::room::Room;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Widget for the room grid. Fully redraws every frame; each cell is drawn
/// two columns wide so the grid reads roughly square in a terminal.
pub struct RoomWidget<'a> {
    room: &'a Room,
}

impl<'a> RoomWidget<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self { room }
    }

    /// Glyph and style for one cell. The first entity found on the cell
    /// wins; empty cells fall back to wall or floor.
    fn cell_display(&self, pos: Position) -> (char, Style) {
        if let Some(entity) = self.room.entity_at(pos) {
            return match entity.kind {
                EntityKind::Player => (
                    PLAYER_CHAR,
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                EntityKind::Enemy => (
                    ENEMY_CHAR,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                EntityKind::Boss => (
                    BOSS_CHAR,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                EntityKind::Item => (
                    ITEM_CHAR,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            };
        }
        if pos.is_interior() {
            (EMPTY_CHAR, Style::default().fg(Color::DarkGray))
        } else {
            (WALL_CHAR, Style::default().fg(Color::White))
        }
    }
}

impl Widget for RoomWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..ROOM_HEIGHT {
            for x in 0..ROOM_WIDTH {
                let screen_x = area.x + (x as u16) * 2;
                let screen_y = area.y + y as u16;
                if screen_x >= area.right() || screen_y >= area.bottom() {
                    continue;
                }
                let (glyph, style) = self.cell_display(Position::new(x, y));
                buf.set_string(screen_x, screen_y, glyph.to_string(), style);
            }
        }
    }
}
