//! Grid positions and the room's interior bounds.
//!
//! The room is a `ROOM_WIDTH` x `ROOM_HEIGHT` grid whose border cells are
//! walls; entities may only occupy the interior.

use crate::constants::{ROOM_HEIGHT, ROOM_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`. May land on a wall or
    /// outside the grid; callers decide whether to commit.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// True for cells strictly inside the outer wall ring.
    pub fn is_interior(self) -> bool {
        self.x >= 1 && self.x <= ROOM_WIDTH - 2 && self.y >= 1 && self.y <= ROOM_HEIGHT - 2
    }

    /// Chebyshev distance: diagonal steps count as one.
    pub fn chebyshev_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
