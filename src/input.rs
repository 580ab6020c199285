//! Keyboard mapping for the game screen.

use crate::grid::Direction;
use crossterm::event::KeyCode;

/// One decoded command per key event. Keys outside the recognized alphabet
/// map to `Other`: inert for the main loop, but still good enough to satisfy
/// an "any key" acknowledgement wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Attack,
    OpenInventory,
    Other,
}

impl Command {
    pub fn is_movement(self) -> bool {
        matches!(self, Command::Move(_))
    }
}

pub fn command_for_key(code: KeyCode) -> Command {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Command::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Command::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => Command::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => Command::Move(Direction::Right),
        KeyCode::Char(' ') => Command::Attack,
        KeyCode::Char('i') | KeyCode::Char('I') => Command::OpenInventory,
        _ => Command::Other,
    }
}
