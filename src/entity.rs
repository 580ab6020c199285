//! Game entities: a shared state struct tagged by kind.
//!
//! Per-kind behavior (wandering, glyph selection, pruning rules) branches on
//! [`EntityKind`] instead of dynamic dispatch.

use crate::constants::*;
use crate::grid::Position;

/// Handle to an entity living in a [`Room`](crate::room::Room). Assigned by
/// the room on insertion; holding an id never implies ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    Item,
}

impl EntityKind {
    /// Enemies and the boss move on their own and can hurt the player.
    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::Enemy | EntityKind::Boss)
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::Enemy => "Enemy",
            EntityKind::Boss => "Boss",
            EntityKind::Item => "Item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    pub health: u32,
    pub attack_damage: u32,
    /// Display name for the boss and items; `None` for everything else.
    pub name: Option<String>,
}

impl Entity {
    fn new(kind: EntityKind, pos: Position, health: u32, attack_damage: u32) -> Self {
        Self {
            // Placeholder until Room::add assigns a real id
            id: EntityId(0),
            kind,
            pos,
            health,
            attack_damage,
            name: None,
        }
    }

    pub fn player(pos: Position) -> Self {
        Self::new(EntityKind::Player, pos, PLAYER_HEALTH, PLAYER_ATTACK_DAMAGE)
    }

    pub fn enemy(pos: Position) -> Self {
        Self::new(EntityKind::Enemy, pos, ENEMY_HEALTH, ENEMY_ATTACK_DAMAGE)
    }

    /// The boss shares the enemy's attack damage but starts with more health.
    pub fn boss(pos: Position, name: impl Into<String>) -> Self {
        let mut entity = Self::new(EntityKind::Boss, pos, BOSS_HEALTH, ENEMY_ATTACK_DAMAGE);
        entity.name = Some(name.into());
        entity
    }

    /// Items carry no health and never "die".
    pub fn item(pos: Position, name: impl Into<String>) -> Self {
        let mut entity = Self::new(EntityKind::Item, pos, 0, 0);
        entity.name = Some(name.into());
        entity
    }

    /// Saturating at zero keeps health non-negative by construction.
    /// Reaching zero is an observable state change, not a removal.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
