//! Santa's Letter Sorter runner (default binary).
//!
//! Fixed-tick loop: render, wait for input until the next tick, then advance
//! the session clock. Letters are dragged with the mouse; SPACE starts a
//! session and dismisses the game-over screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use santa_sorter::config::SorterConfig;
use santa_sorter::core::{GameSnapshot, GameState, SimpleRng, Snowfall};
use santa_sorter::input::{handle_key_event, map_mouse_event, should_quit};
use santa_sorter::logging;
use santa_sorter::session;
use santa_sorter::store::HighScoreFile;
use santa_sorter::term::{
    CueSink, FieldLayout, FrameBuffer, GameView, NullCues, TerminalBell, TerminalRenderer,
    Viewport,
};
use santa_sorter::types::{SessionPhase, FIELD_HEIGHT, FIELD_WIDTH, TICK_MS};

/// Flakes drifting behind the welcome screen.
const WELCOME_FLAKES: usize = 90;

fn main() -> Result<()> {
    let config = SorterConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {err:#}");
    }

    let store = HighScoreFile::new(&config.highscore_path);
    let high_score = store.load();
    info!(seed = config.seed, high_score, path = %store.path().display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &store, high_score);

    // Always try to restore terminal state.
    let _ = term.exit();
    logging::report(result)
}

fn run(
    term: &mut TerminalRenderer,
    config: &SorterConfig,
    store: &HighScoreFile,
    high_score: i32,
) -> Result<()> {
    let mut game = GameState::new(config.seed).with_high_score(high_score);
    let mut snow_rng = SimpleRng::new(config.seed.rotate_left(16));
    let mut snow = Snowfall::new(FIELD_WIDTH, FIELD_HEIGHT, WELCOME_FLAKES, &mut snow_rng);

    let mut cues: Box<dyn CueSink> = if config.mute {
        Box::new(NullCues)
    } else {
        Box::new(TerminalBell::stdout())
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = FieldLayout::centered(viewport);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(&snow), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.apply_action(action) {
                            debug!(phase = ?game.phase(), episode = game.episode_id(), "phase changed");
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = map_mouse_event(mouse, layout.origin) {
                        game.apply_pointer(pointer);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
            if game.phase() == SessionPhase::NotStarted {
                snow.tick(TICK_MS, &mut snow_rng);
            }
        }

        for ev in game.take_events() {
            session::dispatch(&ev, store, cues.as_mut());
        }
    }
}
