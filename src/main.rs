// The library exposes the same modules for tests; a few helpers are only
// used from there.
#![allow(dead_code)]

mod combat;
mod constants;
mod enemy_ai;
mod entity;
mod grid;
mod input;
mod inventory;
mod room;
mod session;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use entity::EntityKind;
use session::{GameSession, Phase, SessionEvent};

/// Messages kept in the on-screen log before old ones scroll away for good.
const MAX_LOG_LINES: usize = 50;

enum Screen {
    Menu,
    Game(GameSession),
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut screen = Screen::Menu;
    let mut log: Vec<String> = Vec::new();
    let mut last_tick = Instant::now();

    loop {
        match screen {
            Screen::Menu => {
                terminal.draw(ui::draw_menu)?;
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => {
                            log.clear();
                            screen = Screen::Game(GameSession::new(&mut rng));
                            last_tick = Instant::now();
                        }
                        KeyCode::Char('2') | KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
            Screen::Game(ref mut session) => {
                // Terminal phase: show the outcome until any key returns
                // control to the menu.
                if let Phase::Over(outcome) = session.phase {
                    terminal.draw(|frame| ui::draw_game_over(frame, outcome))?;
                    if let Event::Key(_) = event::read()? {
                        screen = Screen::Menu;
                    }
                    continue;
                }

                terminal.draw(|frame| ui::draw_game(frame, session, &log))?;

                // At most one buffered input event per pass
                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        let events = session.handle_command(input::command_for_key(key.code));
                        append_log(&mut log, &events);
                    }
                }

                // Frame tick every 100ms; modal phases freeze the session
                if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
                    let events = session.advance_frame(&mut rng);
                    append_log(&mut log, &events);
                    last_tick = Instant::now();
                }
            }
        }
    }
}

fn append_log(log: &mut Vec<String>, events: &[SessionEvent]) {
    for event in events {
        log.push(describe_event(event));
    }
    if log.len() > MAX_LOG_LINES {
        let excess = log.len() - MAX_LOG_LINES;
        log.drain(..excess);
    }
}

fn describe_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::PlayerHit { attacker, damage } => {
            format!("Player received {} damage from the {}!", damage, attacker.name())
        }
        SessionEvent::TargetHit {
            target,
            remaining_health,
        } => format!("You hit the {} ({} HP left).", target.name(), remaining_health),
        SessionEvent::TargetDefeated { target } => match target {
            EntityKind::Enemy => "Enemy died!".to_string(),
            EntityKind::Boss => "Boss died!".to_string(),
            _ => "Target defeated!".to_string(),
        },
        SessionEvent::AllEnemiesDefeated => "All enemies defeated!".to_string(),
        SessionEvent::ItemPickedUp { name } => format!("Picked up {name}!"),
        SessionEvent::PlayerDied => "You have fallen!".to_string(),
        SessionEvent::Victory { frames } => {
            format!("All enemies have been defeated. It took you {frames} frame refreshes.")
        }
    }
}
