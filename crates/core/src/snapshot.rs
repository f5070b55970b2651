use arrayvec::ArrayVec;

use crate::game_state::{Letter, MAX_ZONES};
use crate::types::{SessionPhase, LETTER_CAP};
use crate::zones::DropZone;

/// Read-only copy of everything a frame needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub phase: SessionPhase,
    pub letters: ArrayVec<Letter, LETTER_CAP>,
    pub zones: ArrayVec<DropZone, MAX_ZONES>,
    pub held_id: Option<u32>,
    pub score: i32,
    pub high_score: i32,
    pub remaining_ms: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Whole seconds left, rounded down (what the HUD shows)
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms / 1000
    }

    pub fn held(&self) -> Option<&Letter> {
        let id = self.held_id?;
        self.letters.iter().find(|l| l.id == id)
    }
}
