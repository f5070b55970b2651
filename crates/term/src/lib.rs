//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal, and it translates game events into bell cues.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so screens can be asserted cell by cell
//! - Map the fixed play field into any viewport (centered, clipped)

pub mod cues;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod snow_view;

pub use santa_sorter_core as core;
pub use santa_sorter_types as types;

pub use cues::{CueSink, NullCues, TerminalBell};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snow_view::{draw_flakes, SnowView};
