//! The room: the single owning collection of every entity present.
//!
//! Everything else (the session included) refers to entities through
//! [`EntityId`] handles. Insertion order is preserved and doubles as the
//! "first adjacent wins" scan order for combat and pickups.

use crate::enemy_ai;
use crate::entity::{Entity, EntityId, EntityKind};
use crate::grid::Position;
use rand::Rng;

/// A bump attack recorded during a tick: a hostile whose wander step landed
/// on the player's cell stayed put and struck instead of moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub attacker: EntityKind,
    pub damage: u32,
}

#[derive(Debug, Default)]
pub struct Room {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity, assigning it a fresh id.
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        self.next_id += 1;
        entity.id = EntityId(self.next_id);
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// No-op when the id is not present.
    pub fn remove(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Live collection in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// First entity occupying `pos`, in insertion order.
    pub fn entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities.iter().find(|e| e.pos == pos)
    }

    /// Removes every dead enemy. The player and the boss stay in the room
    /// even at zero health; only plain enemies are pruned automatically.
    pub fn prune_dead_enemies(&mut self) {
        self.entities
            .retain(|e| e.kind != EntityKind::Enemy || !e.is_dead());
    }

    /// True while any hostile is still standing. The boss is never removed
    /// from the room, so a dead boss does not count.
    pub fn hostiles_remain(&self) -> bool {
        self.entities
            .iter()
            .any(|e| e.kind.is_hostile() && !e.is_dead())
    }

    /// Per-frame bulk update. Player and item ticks are no-ops; each live
    /// hostile takes one wander step, bounded by the interior. A hostile
    /// whose candidate cell is the player's cell strikes instead of moving.
    ///
    /// Entity moves never constrain each other (overlap is allowed), so the
    /// outcome of a tick does not depend on iteration order.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<Strike> {
        let player_pos = self
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Player)
            .map(|e| e.pos);

        let mut strikes = Vec::new();
        for entity in &mut self.entities {
            if !entity.kind.is_hostile() || entity.is_dead() {
                continue;
            }
            let candidate = enemy_ai::wander_candidate(entity.pos, rng);
            if player_pos == Some(candidate) {
                strikes.push(Strike {
                    attacker: entity.kind,
                    damage: entity.attack_damage,
                });
            } else if candidate.is_interior() {
                entity.pos = candidate;
            }
        }
        strikes
    }
}
