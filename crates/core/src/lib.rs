//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the sorting rules, session lifecycle, and the menu
//! snowfall simulation. It has **zero dependencies** on terminals, files, or
//! sound, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`RandomSource`]) produces identical sessions
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: The same state drives the terminal build and headless tests
//!
//! # Module Structure
//!
//! - [`game_state`]: Letters, bins, score, countdown, pointer handling
//! - [`zones`]: Bin layout and hit testing
//! - [`catalog`]: Fixed letter texts per category
//! - [`rng`]: Injectable random source and the default LCG
//! - [`text`]: Greedy word wrapping for letter boxes
//! - [`snow`]: Falling snow particles for menu screens
//! - [`snapshot`]: Copy of the state handed to the renderer
//!
//! # Game Rules
//!
//! - Up to 4 letters are on the field; the field is topped up every tick
//! - Drag a letter with the mouse and release it over a bin
//! - Right bin: +10, wrong bin: -5, no bin: the letter just stays where it was dropped
//! - The session lasts 45 seconds; beating the high score flags it for saving
//!
//! # Example
//!
//! ```
//! use santa_sorter_core::GameState;
//! use santa_sorter_types::{Point, SessionPhase, LETTER_CAP, TICK_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.letters().len(), LETTER_CAP);
//!
//! // Grab the first letter and drop it into its own bin
//! let letter = game.letters()[0];
//! game.pointer_down(letter.position());
//! let bin = game.zones().iter().find(|z| z.category == letter.category).unwrap().rect;
//! game.pointer_up(Point::new(bin.x + 1, bin.y + 1));
//! assert_eq!(game.score(), 10);
//!
//! game.tick(TICK_MS);
//! assert_eq!(game.phase(), SessionPhase::Active);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time (normally `TICK_MS`).

pub mod catalog;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod snow;
pub mod text;
pub mod zones;

pub use santa_sorter_types as types;

// Re-export commonly used types for convenience
pub use catalog::templates;
pub use game_state::{DropOutcome, GameState, Letter, MAX_ZONES};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
pub use snow::{Flake, Snowfall};
pub use text::{column_width, wrap_words};
pub use zones::{default_zones, zone_at, DropZone};
