//! Snow menu: a standalone snowfall screen.
//!
//! Flakes fill the whole terminal and follow it when resized; density is
//! fixed at startup. `q` quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use santa_sorter::config::SorterConfig;
use santa_sorter::core::{SimpleRng, Snowfall};
use santa_sorter::input::should_quit;
use santa_sorter::logging;
use santa_sorter::term::{FrameBuffer, SnowView, TerminalRenderer, Viewport};
use santa_sorter::types::TICK_MS;

/// Terminal cells per flake.
const CELLS_PER_FLAKE: usize = 25;

fn flake_count(w: u16, h: u16) -> usize {
    (w as usize * h as usize / CELLS_PER_FLAKE).max(1)
}

fn main() -> Result<()> {
    let config = SorterConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {err:#}");
    }
    info!(seed = config.seed, "snow menu");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    logging::report(result)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let (mut w, mut h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut snow = Snowfall::new(w as i32, h as i32, flake_count(w, h), &mut rng);

    let view = SnowView;
    let mut fb = FrameBuffer::new(w, h);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        view.render_into(&snow, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Resize(nw, nh) => {
                    w = nw;
                    h = nh;
                    snow.resize(w as i32, h as i32, &mut rng);
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            snow.tick(TICK_MS, &mut rng);
        }
    }
}
