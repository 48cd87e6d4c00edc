//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_memory::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_memory::config::{AppConfig, Cli};
use tui_memory::core::{EventLog, GameSnapshot, MemoryGame};
use tui_memory::input::{handle_key_event, should_quit, Cursor};
use tui_memory::logging::init_tracing;
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, UiOverlay, Viewport};
use tui_memory::types::{GameAction, GameEvent, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_cli_and_env(Cli::parse())?;
    init_tracing(config.log_path.as_deref(), "info")?;
    info!(seed = config.seed, flip_delay = %config.flip_delay, "starting");

    let deck = config.load_deck()?;
    let mut game = MemoryGame::new(config.seed, EventLog::new());
    game.configure_raw(deck, &config.flip_delay);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(moves = game.moves(), score = game.score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut MemoryGame<EventLog>) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new();
    let mut banner: Option<String> = None;

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        drain_events(game.observer_mut(), &mut banner);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        cursor.clamp(snap.cards.len());
        let ui = UiOverlay {
            cursor: Some(cursor.index()),
            banner: banner.as_deref(),
        };
        view.render_into(&snap, &ui, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(game, &mut cursor, &mut banner, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.update(TICK_MS);
        }
    }
}

fn apply_action(
    game: &mut MemoryGame<EventLog>,
    cursor: &mut Cursor,
    banner: &mut Option<String>,
    action: GameAction,
) {
    match action {
        GameAction::Select if game.is_won() => restart(game, banner),
        GameAction::Select => {
            game.select_card(cursor.index());
        }
        GameAction::Restart => restart(game, banner),
        _ => {
            cursor.apply(action, game.columns(), game.card_count());
        }
    }
}

fn restart(game: &mut MemoryGame<EventLog>, banner: &mut Option<String>) {
    *banner = None;
    game.reset_game();
}

fn drain_events(log: &mut EventLog, banner: &mut Option<String>) {
    for event in log.drain() {
        match event {
            GameEvent::MovesChanged(moves) => debug!(moves, "moves changed"),
            GameEvent::Tick(time) => debug!(%time, "tick"),
            GameEvent::Won(score) => info!(score, "game won"),
            GameEvent::InvalidConfig(message) => *banner = Some(message),
        }
    }
}
