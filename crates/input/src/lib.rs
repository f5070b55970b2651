//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and mouse events
//! into field-relative [`crate::types::PointerEvent`]s.

pub mod map;
pub mod mouse;

pub use santa_sorter_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::map_mouse_event;
