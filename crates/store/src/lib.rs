//! Persistence for the one value the game remembers between runs.
//!
//! The high score lives in a plain text file holding a single integer, so it
//! can be inspected or reset by hand.

pub mod highscore;

pub use highscore::HighScoreFile;
