//! One playthrough: the frame cycle, input interpretation, and the phase
//! machine that stands in for blocking key waits.
//!
//! The session owns the room, the inventory, and the frame counter. Modal
//! pauses (inventory view, "press any key" acknowledgements) are explicit
//! phases entered and left by discrete events, so any host loop can drive
//! the core without ever blocking inside it.

use crate::combat::{self, Outcome};
use crate::constants::*;
use crate::entity::{Entity, EntityId, EntityKind};
use crate::grid::{Direction, Position};
use crate::input::Command;
use crate::inventory::Inventory;
use crate::room::Room;
use rand::Rng;

/// How a finished session ended. `frames` is the number of completed frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Victory { frames: u32 },
    Defeat { frames: u32 },
}

/// Session phase. Modal phases stop the frame clock entirely:
/// [`GameSession::advance_frame`] only does work while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Waiting for a keypress to dismiss a message. While `movement_inert`
    /// is set, movement keys do not count as an acknowledgement.
    AwaitingAck { movement_inert: bool },
    ShowingInventory,
    /// Terminal. The outer menu loop takes over from here.
    Over(GameOutcome),
}

/// Things that happened during a frame or in response to a command. The
/// host maps these to message-log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A hostile bumped into the player and struck.
    PlayerHit { attacker: EntityKind, damage: u32 },
    TargetHit { target: EntityKind, remaining_health: u32 },
    TargetDefeated { target: EntityKind },
    /// The kill that cleared the last standing hostile.
    AllEnemiesDefeated,
    ItemPickedUp { name: String },
    PlayerDied,
    Victory { frames: u32 },
}

pub struct GameSession {
    pub room: Room,
    pub inventory: Inventory<String>,
    pub phase: Phase,
    player: EntityId,
    boss: EntityId,
    used_moves: u32,
}

impl GameSession {
    /// Spawns the fixed starting cast: the item, three enemies at random
    /// interior cells, the boss, and finally the player. Insertion order is
    /// the combat/pickup scan order.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut room = Room::new();
        let (ix, iy) = ITEM_SPAWN;
        room.add(Entity::item(Position::new(ix, iy), STARTING_ITEM_NAME));
        for _ in 0..ENEMY_COUNT {
            room.add(Entity::enemy(random_interior_cell(rng)));
        }
        let (bx, by) = BOSS_SPAWN;
        let boss = room.add(Entity::boss(Position::new(bx, by), BOSS_NAME));
        let (px, py) = PLAYER_SPAWN;
        let player = room.add(Entity::player(Position::new(px, py)));

        Self {
            room,
            inventory: Inventory::new(),
            phase: Phase::Running,
            player,
            boss,
            used_moves: 0,
        }
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn boss_id(&self) -> EntityId {
        self.boss
    }

    pub fn player(&self) -> Option<&Entity> {
        self.room.get(self.player)
    }

    /// Completed frames; the final score on victory.
    pub fn used_moves(&self) -> u32 {
        self.used_moves
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// One discrete frame, in fixed order: hostiles tick, the frame counter
    /// advances, dead enemies are pruned, then the loss and win checks run.
    /// A no-op outside `Running`, which is what freezes the world during
    /// modal pauses and keeps `Over` terminal.
    pub fn advance_frame<R: Rng>(&mut self, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        let strikes = self.room.tick(rng);
        if !strikes.is_empty() {
            let total: u32 = strikes.iter().map(|s| s.damage).sum();
            if let Some(player) = self.room.get_mut(self.player) {
                player.take_damage(total);
            }
            for strike in strikes {
                events.push(SessionEvent::PlayerHit {
                    attacker: strike.attacker,
                    damage: strike.damage,
                });
            }
        }

        self.used_moves += 1;
        self.room.prune_dead_enemies();

        if self.player().map_or(false, Entity::is_dead) {
            events.push(SessionEvent::PlayerDied);
            self.phase = Phase::Over(GameOutcome::Defeat {
                frames: self.used_moves,
            });
            return events;
        }

        if !self.room.hostiles_remain() {
            events.push(SessionEvent::Victory {
                frames: self.used_moves,
            });
            self.phase = Phase::Over(GameOutcome::Victory {
                frames: self.used_moves,
            });
            return events;
        }

        self.check_pickup(&mut events);
        events
    }

    /// Interprets one buffered command according to the current phase.
    /// Unrecognized input is inert while running; in modal phases any key
    /// acknowledges, except movement keys while `movement_inert` is set.
    pub fn handle_command(&mut self, command: Command) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Running => {
                match command {
                    Command::Move(direction) => self.move_player(direction),
                    Command::Attack => self.player_attack(&mut events),
                    Command::OpenInventory => self.phase = Phase::ShowingInventory,
                    Command::Other => {}
                }
                if self.phase == Phase::Running {
                    self.check_pickup(&mut events);
                }
            }
            Phase::AwaitingAck { movement_inert } => {
                if !(movement_inert && command.is_movement()) {
                    self.phase = Phase::Running;
                }
            }
            Phase::ShowingInventory => self.phase = Phase::Running,
            Phase::Over(_) => {}
        }
        events
    }

    /// Movement clamps one cell inside the interior; walking into a wall
    /// leaves the position unchanged.
    fn move_player(&mut self, direction: Direction) {
        if let Some(player) = self.room.get_mut(self.player) {
            let stepped = player.pos.step(direction);
            player.pos = Position::new(
                stepped.x.clamp(1, ROOM_WIDTH - 2),
                stepped.y.clamp(1, ROOM_HEIGHT - 2),
            );
        }
    }

    /// Strikes the first non-player entity in scan order within melee
    /// range; no distance ranking beyond the adjacency test. A kill pauses
    /// for acknowledgement, and the kill that clears the last hostile locks
    /// movement keys out of that acknowledgement.
    fn player_attack(&mut self, events: &mut Vec<SessionEvent>) {
        let (player_pos, damage) = match self.player() {
            Some(p) => (p.pos, p.attack_damage),
            None => return,
        };
        let target_id = self
            .room
            .entities()
            .iter()
            .find(|e| e.id != self.player && combat::in_melee_range(player_pos, e.pos))
            .map(|e| e.id);
        let Some(target_id) = target_id else {
            return;
        };
        let Some(target) = self.room.get_mut(target_id) else {
            return;
        };

        let kind = target.kind;
        match combat::strike(damage, target) {
            Outcome::Defeated => {
                events.push(SessionEvent::TargetDefeated { target: kind });
                if self.room.hostiles_remain() {
                    self.phase = Phase::AwaitingAck {
                        movement_inert: false,
                    };
                } else {
                    events.push(SessionEvent::AllEnemiesDefeated);
                    self.phase = Phase::AwaitingAck {
                        movement_inert: true,
                    };
                }
            }
            Outcome::Hit => {
                let remaining = self.room.get(target_id).map_or(0, |e| e.health);
                events.push(SessionEvent::TargetHit {
                    target: kind,
                    remaining_health: remaining,
                });
            }
        }
    }

    /// The implicit per-frame pickup: the first item on the player's cell
    /// moves from the room into the inventory, exactly once.
    fn check_pickup(&mut self, events: &mut Vec<SessionEvent>) {
        let player_pos = match self.player() {
            Some(p) => p.pos,
            None => return,
        };
        let picked = self
            .room
            .entities()
            .iter()
            .find(|e| e.kind == EntityKind::Item && e.pos == player_pos)
            .map(|e| (e.id, e.name.clone().unwrap_or_default()));
        if let Some((id, name)) = picked {
            self.room.remove(id);
            self.inventory.add(name.clone());
            events.push(SessionEvent::ItemPickedUp { name });
            self.phase = Phase::AwaitingAck {
                movement_inert: false,
            };
        }
    }
}

fn random_interior_cell<R: Rng>(rng: &mut R) -> Position {
    Position::new(
        rng.gen_range(1..=ROOM_WIDTH - 2),
        rng.gen_range(1..=ROOM_HEIGHT - 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_session() -> GameSession {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        GameSession::new(&mut rng)
    }

    #[test]
    fn test_new_session_spawns_expected_cast() {
        let session = test_session();
        let kinds = |kind| {
            session
                .room
                .entities()
                .iter()
                .filter(|e| e.kind == kind)
                .count()
        };
        assert_eq!(kinds(EntityKind::Player), 1);
        assert_eq!(kinds(EntityKind::Enemy), ENEMY_COUNT);
        assert_eq!(kinds(EntityKind::Boss), 1);
        assert_eq!(kinds(EntityKind::Item), 1);

        assert_eq!(session.player().unwrap().pos, Position::new(5, 5));
        let boss = session.room.get(session.boss_id()).unwrap();
        assert_eq!(boss.pos, Position::new(8, 8));
        assert_eq!(boss.health, 200);

        for entity in session.room.entities() {
            assert!(entity.pos.is_interior());
        }
        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.used_moves(), 0);
    }

    #[test]
    fn test_move_left_then_clamp_at_interior_edge() {
        let mut session = test_session();
        session.handle_command(Command::Move(Direction::Left));
        assert_eq!(session.player().unwrap().pos, Position::new(4, 5));

        // Eight more presses pin the player against the left wall at x = 1
        for _ in 0..8 {
            session.handle_command(Command::Move(Direction::Left));
        }
        assert_eq!(session.player().unwrap().pos, Position::new(1, 5));
    }

    #[test]
    fn test_unrecognized_command_changes_nothing() {
        let mut session = test_session();
        let before: Vec<Entity> = session.room.entities().to_vec();
        let events = session.handle_command(Command::Other);
        assert!(events.is_empty());
        assert_eq!(session.room.entities(), before.as_slice());
        assert_eq!(session.phase, Phase::Running);
    }

    #[test]
    fn test_inventory_phase_opens_and_any_key_closes() {
        let mut session = test_session();
        session.handle_command(Command::OpenInventory);
        assert_eq!(session.phase, Phase::ShowingInventory);

        // The world is frozen while the inventory is open
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(session.advance_frame(&mut rng).is_empty());
        assert_eq!(session.used_moves(), 0);

        session.handle_command(Command::Other);
        assert_eq!(session.phase, Phase::Running);
    }
}
