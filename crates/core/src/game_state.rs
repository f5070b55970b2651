//! Game state module - the drag-and-sort session
//!
//! This module owns the live letters, the bins, the score and the countdown.
//! It consumes pointer events and time deltas and emits [`GameEvent`]s for the
//! outside world (sound cues, high-score persistence). It performs no I/O.

use arrayvec::ArrayVec;

use crate::catalog::templates;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::zones::{default_zones, zone_at, DropZone};

/// Maximum number of bins a session can be configured with
pub const MAX_ZONES: usize = 8;

/// Pending events kept between two drains; the oldest is dropped past this.
const EVENT_QUEUE_CAP: usize = 16;

/// A letter on the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub id: u32,
    pub category: Category,
    pub text: &'static str,
    /// Top-left corner
    pub x: i32,
    pub y: i32,
    pub held: bool,
}

impl Letter {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, LETTER_WIDTH, LETTER_HEIGHT)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// What a pointer release did with the held letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside every bin; the letter stays on the field
    Released,
    /// Dropped into its own bin
    Sorted { category: Category },
    /// Dropped into another category's bin
    Missorted { letter: Category, bin: Category },
}

impl DropOutcome {
    /// Score change caused by this drop
    pub fn score_delta(&self) -> i32 {
        match self {
            DropOutcome::Released => 0,
            DropOutcome::Sorted { .. } => MATCH_POINTS,
            DropOutcome::Missorted { .. } => -MISMATCH_PENALTY,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    phase: SessionPhase,
    letters: ArrayVec<Letter, LETTER_CAP>,
    /// Id of the letter under the pointer, if any.
    held: Option<u32>,
    zones: ArrayVec<DropZone, MAX_ZONES>,
    score: i32,
    high_score: i32,
    remaining_ms: u32,
    session_ms: u32,
    /// Monotonic id for spawned letters.
    next_letter_id: u32,
    /// Monotonic session id (increments on start).
    episode_id: u32,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAP>,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing every random decision from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut zones = ArrayVec::new();
        zones.extend(default_zones());
        Self {
            phase: SessionPhase::NotStarted,
            letters: ArrayVec::new(),
            held: None,
            zones,
            score: 0,
            high_score: 0,
            remaining_ms: SESSION_MS,
            session_ms: SESSION_MS,
            next_letter_id: 0,
            episode_id: 0,
            events: ArrayVec::new(),
            rng,
        }
    }

    /// Replace the bins. Only the first `MAX_ZONES` are kept; slice order is
    /// the tie-break order for overlapping bins.
    pub fn with_zones(mut self, zones: &[DropZone]) -> Self {
        self.zones.clear();
        self.zones
            .extend(zones.iter().copied().take(MAX_ZONES));
        self
    }

    /// Override the countdown length
    pub fn with_session_ms(mut self, session_ms: u32) -> Self {
        self.session_ms = session_ms;
        if self.phase != SessionPhase::Active {
            self.remaining_ms = session_ms;
        }
        self
    }

    /// Seed the high score (normally the value read from disk)
    pub fn with_high_score(mut self, high_score: i32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn held_letter(&self) -> Option<&Letter> {
        let id = self.held?;
        self.letters.iter().find(|l| l.id == id)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.letters.clear();
        out.letters.extend(self.letters.iter().copied());
        out.zones.clear();
        out.zones.extend(self.zones.iter().copied());
        out.held_id = self.held;
        out.score = self.score;
        out.high_score = self.high_score;
        out.remaining_ms = self.remaining_ms;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin a session: zero the score, rewind the countdown, deal letters.
    ///
    /// Only valid from `NotStarted`; returns `false` otherwise.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            return false;
        }
        self.phase = SessionPhase::Active;
        self.score = 0;
        self.remaining_ms = self.session_ms;
        self.letters.clear();
        self.held = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.fill_letters();
        true
    }

    /// Leave the game-over screen (`Ended -> NotStarted`).
    pub fn acknowledge(&mut self) -> bool {
        if self.phase != SessionPhase::Ended {
            return false;
        }
        self.phase = SessionPhase::NotStarted;
        self.letters.clear();
        self.held = None;
        true
    }

    /// Spawn one random letter, unless the field is already full
    pub fn spawn_letter(&mut self) -> bool {
        if self.letters.is_full() {
            return false;
        }

        let Some(&category) = self.rng.pick(&Category::ALL) else {
            return false;
        };
        let Some(&text) = self.rng.pick(templates(category)) else {
            return false;
        };
        let x = self.rng.range_inclusive(SPAWN_X_MIN, SPAWN_X_MAX);
        let y = self.rng.range_inclusive(SPAWN_Y_MIN, SPAWN_Y_MAX);

        self.letters.push(Letter {
            id: self.next_letter_id,
            category,
            text,
            x,
            y,
            held: false,
        });
        self.next_letter_id = self.next_letter_id.wrapping_add(1);
        true
    }

    fn fill_letters(&mut self) {
        while self.spawn_letter() {}
    }

    /// Grab the first letter (in spawn order) under `p`.
    ///
    /// Ignored while another letter is held or outside an active session.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        if self.phase != SessionPhase::Active || self.held.is_some() {
            return false;
        }
        let Some(letter) = self.letters.iter_mut().find(|l| l.rect().contains(p)) else {
            return false;
        };
        letter.held = true;
        self.held = Some(letter.id);
        true
    }

    /// Drag the held letter so the pointer sits on its grab anchor.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        let Some(letter) = self.held_letter_mut() else {
            return false;
        };
        letter.x = p.x - GRAB_OFFSET_X;
        letter.y = p.y - GRAB_OFFSET_Y;
        true
    }

    /// Release the held letter at `p`.
    ///
    /// Inside a bin the letter is scored, removed and replaced. Outside every
    /// bin it is dropped in place; only `pointer_move` repositions letters.
    /// Returns `None` when nothing was held.
    pub fn pointer_up(&mut self, p: Point) -> Option<DropOutcome> {
        let id = self.held.take()?;
        let idx = self.letters.iter().position(|l| l.id == id)?;
        self.letters[idx].held = false;

        let Some(zone) = zone_at(&self.zones, p).copied() else {
            return Some(DropOutcome::Released);
        };

        let letter = self.letters.remove(idx);
        let outcome = if letter.category == zone.category {
            self.push_event(GameEvent::Sorted {
                category: letter.category,
            });
            DropOutcome::Sorted {
                category: letter.category,
            }
        } else {
            self.push_event(GameEvent::Missorted {
                letter: letter.category,
                bin: zone.category,
            });
            DropOutcome::Missorted {
                letter: letter.category,
                bin: zone.category,
            }
        };
        self.score += outcome.score_delta();
        self.spawn_letter();
        Some(outcome)
    }

    /// Dispatch a pointer event to the matching handler
    pub fn apply_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p).is_some(),
        }
    }

    /// Apply a keyboard action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Confirm => match self.phase {
                SessionPhase::NotStarted => self.start(),
                SessionPhase::Ended => self.acknowledge(),
                SessionPhase::Active => false,
            },
        }
    }

    /// Main game tick - run the countdown and top letters back up to the cap.
    ///
    /// Returns `true` on the tick that ends the session.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != SessionPhase::Active {
            return false;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.end_session();
            return true;
        }

        self.fill_letters();
        false
    }

    fn end_session(&mut self) {
        self.phase = SessionPhase::Ended;
        if let Some(letter) = self.held_letter_mut() {
            letter.held = false;
        }
        self.held = None;

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.push_event(GameEvent::SessionEnded {
            score: self.score,
            new_high_score,
        });
    }

    /// Take and clear all pending events, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_CAP> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn held_letter_mut(&mut self) -> Option<&mut Letter> {
        let id = self.held?;
        self.letters.iter_mut().find(|l| l.id == id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
