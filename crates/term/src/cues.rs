//! Audible cues for game events.
//!
//! The terminal has one sound: the bell. Wrong drops and the end of a
//! session ring it; a correct drop stays quiet.

use std::io::{self, Write};

use anyhow::Result;

use crate::types::GameEvent;

/// Receives game events that should be heard.
pub trait CueSink {
    fn cue(&mut self, event: &GameEvent) -> Result<()>;
}

/// Rings the terminal bell on `out`.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn cue(&mut self, event: &GameEvent) -> Result<()> {
        let rings = match event {
            GameEvent::Sorted { .. } => false,
            GameEvent::Missorted { .. } | GameEvent::SessionEnded { .. } => true,
        };
        if rings {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Silent sink.
#[derive(Debug, Default)]
pub struct NullCues;

impl CueSink for NullCues {
    fn cue(&mut self, _event: &GameEvent) -> Result<()> {
        Ok(())
    }
}
