//! End-to-end tests for the session frame cycle and input interpretation,
//! driven through the public library API with seeded RNGs.
//!
//! Flows covered:
//! - attack targeting, tie-breaking, and the acknowledgement pauses
//! - pruning, the win check, and `Over` being terminal
//! - item pickup moving exactly once from room to inventory
//! - bump strikes, the loss condition, and frame counting

use carnage::entity::{EntityId, EntityKind};
use carnage::grid::{Direction, Position};
use carnage::input::Command;
use carnage::session::{GameOutcome, GameSession, Phase, SessionEvent};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_session() -> GameSession {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    GameSession::new(&mut rng)
}

/// Always draws 0: every wander candidate is one step up. Hostiles parked
/// on the top interior row therefore never move.
fn always_up_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn enemy_ids(session: &GameSession) -> Vec<EntityId> {
    session
        .room
        .entities()
        .iter()
        .filter(|e| e.kind == EntityKind::Enemy)
        .map(|e| e.id)
        .collect()
}

fn place(session: &mut GameSession, id: EntityId, x: i32, y: i32) {
    session.room.get_mut(id).unwrap().pos = Position::new(x, y);
}

fn set_health(session: &mut GameSession, id: EntityId, health: u32) {
    session.room.get_mut(id).unwrap().health = health;
}

/// Parks every hostile on the top interior row, far from the player at
/// (5,5), where an always-up RNG keeps them pinned in place.
fn park_hostiles(session: &mut GameSession) {
    let enemies = enemy_ids(session);
    for (index, id) in enemies.into_iter().enumerate() {
        place(session, id, 1 + index as i32, 1);
    }
    let boss = session.boss_id();
    place(session, boss, 8, 1);
}

#[test]
fn attack_with_no_adjacent_target_changes_nothing() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let before: Vec<(EntityId, u32)> = session
        .room
        .entities()
        .iter()
        .map(|e| (e.id, e.health))
        .collect();

    let events = session.handle_command(Command::Attack);

    assert!(events.is_empty());
    assert_eq!(session.phase, Phase::Running);
    let after: Vec<(EntityId, u32)> = session
        .room
        .entities()
        .iter()
        .map(|e| (e.id, e.health))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn attack_strikes_first_adjacent_in_scan_order() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let enemies = enemy_ids(&session);
    // Both adjacent to the player; the earlier insertion wins
    place(&mut session, enemies[0], 6, 5);
    place(&mut session, enemies[1], 4, 5);

    let events = session.handle_command(Command::Attack);

    assert_eq!(
        events,
        vec![SessionEvent::TargetHit {
            target: EntityKind::Enemy,
            remaining_health: 40,
        }]
    );
    assert_eq!(session.room.get(enemies[0]).unwrap().health, 40);
    assert_eq!(session.room.get(enemies[1]).unwrap().health, 50);
    // A plain hit does not pause
    assert_eq!(session.phase, Phase::Running);
}

#[test]
fn kill_pauses_for_acknowledgement() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let enemies = enemy_ids(&session);
    place(&mut session, enemies[0], 5, 4);
    set_health(&mut session, enemies[0], 10);

    let events = session.handle_command(Command::Attack);

    assert_eq!(
        events,
        vec![SessionEvent::TargetDefeated {
            target: EntityKind::Enemy,
        }]
    );
    // Other hostiles still stand, so movement keys may acknowledge
    assert_eq!(
        session.phase,
        Phase::AwaitingAck {
            movement_inert: false,
        }
    );

    // The acknowledging key is consumed, not interpreted: the player stays put
    session.handle_command(Command::Move(Direction::Left));
    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.player().unwrap().pos, Position::new(5, 5));
}

#[test]
fn clearing_last_hostile_locks_movement_out_of_the_ack() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let enemies = enemy_ids(&session);
    place(&mut session, enemies[0], 5, 4);
    set_health(&mut session, enemies[0], 10);
    set_health(&mut session, enemies[1], 0);
    set_health(&mut session, enemies[2], 0);
    let boss = session.boss_id();
    set_health(&mut session, boss, 0);

    let events = session.handle_command(Command::Attack);

    assert_eq!(
        events,
        vec![
            SessionEvent::TargetDefeated {
                target: EntityKind::Enemy,
            },
            SessionEvent::AllEnemiesDefeated,
        ]
    );
    assert_eq!(
        session.phase,
        Phase::AwaitingAck {
            movement_inert: true,
        }
    );

    // Movement keys are inert for this acknowledgement
    session.handle_command(Command::Move(Direction::Up));
    session.handle_command(Command::Move(Direction::Left));
    assert_eq!(
        session.phase,
        Phase::AwaitingAck {
            movement_inert: true,
        }
    );

    // Any other key resumes
    session.handle_command(Command::Other);
    assert_eq!(session.phase, Phase::Running);
}

#[test]
fn win_check_transitions_to_over_and_stays_there() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    for id in enemy_ids(&session) {
        set_health(&mut session, id, 0);
    }
    let boss = session.boss_id();
    set_health(&mut session, boss, 0);

    let mut rng = always_up_rng();
    let events = session.advance_frame(&mut rng);

    assert_eq!(events, vec![SessionEvent::Victory { frames: 1 }]);
    assert_eq!(
        session.phase,
        Phase::Over(GameOutcome::Victory { frames: 1 })
    );
    assert_eq!(session.used_moves(), 1);
    // Dead enemies were pruned; the dead boss and the player stay
    assert!(enemy_ids(&session).is_empty());
    assert!(session.room.get(boss).is_some());
    assert!(session.player().is_some());

    // Over is terminal: further frames and commands change nothing
    assert!(session.advance_frame(&mut rng).is_empty());
    assert!(session.handle_command(Command::Attack).is_empty());
    assert_eq!(
        session.phase,
        Phase::Over(GameOutcome::Victory { frames: 1 })
    );
    assert_eq!(session.used_moves(), 1);
}

#[test]
fn win_requires_the_boss_dead_too() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    for id in enemy_ids(&session) {
        set_health(&mut session, id, 0);
    }

    let mut rng = always_up_rng();
    let events = session.advance_frame(&mut rng);

    assert!(events.is_empty());
    assert_eq!(session.phase, Phase::Running);
    assert!(enemy_ids(&session).is_empty());
}

#[test]
fn pickup_moves_item_to_inventory_exactly_once() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let player = session.player_id();
    place(&mut session, player, 2, 3);

    let events = session.handle_command(Command::Other);

    assert_eq!(
        events,
        vec![SessionEvent::ItemPickedUp {
            name: "Health Potion".to_string(),
        }]
    );
    assert_eq!(session.inventory.len(), 1);
    assert_eq!(
        session.inventory.get(0).map(String::as_str),
        Some("Health Potion")
    );
    assert_eq!(session.inventory.get(1), None);
    assert!(!session
        .room
        .entities()
        .iter()
        .any(|e| e.kind == EntityKind::Item));
    assert_eq!(
        session.phase,
        Phase::AwaitingAck {
            movement_inert: false,
        }
    );

    // Acknowledge, then make sure nothing is picked up a second time
    session.handle_command(Command::Other);
    let events = session.handle_command(Command::Other);
    assert!(events.is_empty());
    assert_eq!(session.inventory.len(), 1);
}

#[test]
fn pickup_fires_in_the_same_frame_as_the_move() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let item_id = session
        .room
        .entities()
        .iter()
        .find(|e| e.kind == EntityKind::Item)
        .map(|e| e.id)
        .unwrap();
    place(&mut session, item_id, 4, 5);

    let events = session.handle_command(Command::Move(Direction::Left));

    assert_eq!(session.player().unwrap().pos, Position::new(4, 5));
    assert_eq!(
        events,
        vec![SessionEvent::ItemPickedUp {
            name: "Health Potion".to_string(),
        }]
    );
    assert_eq!(session.inventory.len(), 1);
}

#[test]
fn bump_strike_wears_the_player_down_to_defeat() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let enemies = enemy_ids(&session);
    // Directly below the player: an always-up candidate is the player's cell
    place(&mut session, enemies[0], 5, 6);
    let player = session.player_id();
    set_health(&mut session, player, 10);

    let mut rng = always_up_rng();
    let events = session.advance_frame(&mut rng);

    assert_eq!(
        events,
        vec![SessionEvent::PlayerHit {
            attacker: EntityKind::Enemy,
            damage: 5,
        }]
    );
    assert_eq!(session.player().unwrap().health, 5);
    // The striker stays put instead of moving onto the player
    assert_eq!(session.room.get(enemies[0]).unwrap().pos, Position::new(5, 6));
    assert_eq!(session.phase, Phase::Running);

    let events = session.advance_frame(&mut rng);
    assert_eq!(
        events,
        vec![
            SessionEvent::PlayerHit {
                attacker: EntityKind::Enemy,
                damage: 5,
            },
            SessionEvent::PlayerDied,
        ]
    );
    assert_eq!(session.player().unwrap().health, 0);
    assert_eq!(session.phase, Phase::Over(GameOutcome::Defeat { frames: 2 }));
    // The fallen player is still in the room
    assert!(session.player().is_some());
}

#[test]
fn used_moves_counts_completed_frames() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let mut rng = always_up_rng();
    for _ in 0..5 {
        let events = session.advance_frame(&mut rng);
        assert!(events.is_empty());
    }
    assert_eq!(session.used_moves(), 5);
    assert_eq!(session.phase, Phase::Running);
}

#[test]
fn boss_shrugs_off_three_hits() {
    let mut session = seeded_session();
    park_hostiles(&mut session);
    let boss = session.boss_id();
    place(&mut session, boss, 5, 4);

    for expected in [190, 180, 170] {
        let events = session.handle_command(Command::Attack);
        assert_eq!(
            events,
            vec![SessionEvent::TargetHit {
                target: EntityKind::Boss,
                remaining_health: expected,
            }]
        );
    }
    assert_eq!(session.room.get(boss).unwrap().health, 170);
    // No death branch, no pause
    assert_eq!(session.phase, Phase::Running);
}
