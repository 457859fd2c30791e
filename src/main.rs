//! Terminal runner (default binary).
//!
//! Owns the gravity timer and the input stream, feeds both into one
//! `GameState` sequentially, and redraws after every processed event.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::config::{parse_args, Config, USAGE};
use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

/// Poll interval while no gravity ticks are due (game over).
const IDLE_POLL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    logging::init(&config)?;
    info!(
        seed = config.seed,
        gravity_ms = config.gravity_ms,
        "starting blockfall"
    );

    // Restore the terminal before the default hook prints the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // The hook cannot borrow `term`, so restore through a fresh renderer.
        let _ = TerminalRenderer::new().exit();
        default_hook(panic_info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let gravity = Duration::from_millis(config.gravity_ms as u64);
    let mut next_tick = Instant::now() + gravity;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = if game.is_game_over() {
            IDLE_POLL
        } else {
            next_tick.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        if action == GameAction::Restart {
                            next_tick = Instant::now() + gravity;
                        }
                        log_lock(&mut game);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        // Gravity deadline reached; no ticks are issued once the game is over.
        if !game.is_game_over() {
            game.tick();
            log_lock(&mut game);
            next_tick = Instant::now() + gravity;
        }
    }
}

fn log_lock(game: &mut GameState) {
    if let Some(event) = game.take_last_event() {
        if event.lines_cleared > 0 {
            info!(
                lines = event.lines_cleared,
                gained = event.score_gained,
                score = game.score(),
                "rows cleared"
            );
        }
    }
}
