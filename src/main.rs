//! Terminal Frogger runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. Settings come from `FROGGER_*` environment variables; see
//! `LaunchConfig::from_env`.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_frogger::core::{GameState, LaunchConfig};
use tui_frogger::input::{map_key, should_quit};
use tui_frogger::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on the simulated step, in seconds. A stalled frame (suspended
/// process, slow terminal) must not teleport the bugs across the board.
const MAX_DT: f32 = 0.1;

fn main() -> Result<()> {
    let launch = LaunchConfig::from_env()?;
    init_logging(&launch)?;

    tracing::info!(
        seed = launch.seed,
        bugs = launch.game.obstacle_count,
        tick_ms = launch.tick_ms,
        "starting tui-frogger"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &launch));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::warn!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        tracing::error!("fatal: {err:#}");
    }
    result
}

/// Logs go to a file because stdout belongs to the game. Without
/// `FROGGER_LOG_PATH` no subscriber is installed.
fn init_logging(launch: &LaunchConfig) -> Result<()> {
    let Some(path) = &launch.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;
    let filter = EnvFilter::try_new(&launch.log_filter)
        .with_context(|| format!("invalid log filter {:?}", launch.log_filter))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, launch: &LaunchConfig) -> Result<()> {
    let mut game = GameState::with_seed(launch.game.clone(), launch.seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(launch.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!(wins = game.wins(), ticks = game.ticks(), "quit");
                        return Ok(());
                    }
                    game.queue_input(map_key(key));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let dt = elapsed.as_secs_f32().min(MAX_DT);
            let events = game.tick(dt);
            if !events.is_quiet() {
                tracing::debug!(
                    wins = events.wins,
                    collisions = events.collisions,
                    respawns = events.respawns,
                    total_wins = game.wins(),
                    "tick"
                );
            }
        }
    }
}
