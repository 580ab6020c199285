//! Random-walk movement for hostiles.

use crate::grid::{Direction, Position};
use rand::Rng;

/// Picks one of the four directions uniformly at random and returns the
/// candidate cell. The caller commits the move only if the candidate lies
/// inside the interior; otherwise the enemy stays put this tick. No
/// pathfinding, no player-seeking.
pub fn wander_candidate<R: Rng>(pos: Position, rng: &mut R) -> Position {
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    pos.step(direction)
}
