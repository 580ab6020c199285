//! Melee adjacency and damage application, shared by all entity kinds.

use crate::entity::Entity;
use crate::grid::Position;

/// Result of a single strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Target survived, or was already at zero health (an item).
    Hit,
    /// This strike brought the target from alive to dead.
    Defeated,
}

/// Melee range is Chebyshev distance <= 1, the attacker's own cell included.
pub fn in_melee_range(a: Position, b: Position) -> bool {
    a.chebyshev_distance(b) <= 1
}

/// Applies `damage` to `target`. Death is reported to the caller for
/// messaging; it does not remove the target from the room.
pub fn strike(damage: u32, target: &mut Entity) -> Outcome {
    let was_alive = !target.is_dead();
    target.take_damage(damage);
    if was_alive && target.is_dead() {
        Outcome::Defeated
    } else {
        Outcome::Hit
    }
}
