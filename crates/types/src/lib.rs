//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Play Field
//!
//! The game is laid out on a fixed grid of terminal cells:
//!
//! - **Width**: 96 columns (x = 0..96)
//! - **Height**: 30 rows (y = 0..30)
//! - **Letters**: 24x5 boxes spawned in the upper part of the field
//! - **Bins**: 22x4 boxes along the bottom edge, one per [`Category`]
//!
//! Coordinates are signed so pointer positions left of or above the field
//! (the terminal is usually larger than the field) stay representable.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SESSION_MS` | 45000 | Countdown length of one session |
//! | `SNOW_JITTER_MS` | 120 | Interval between snowflake drift steps |
//!
//! # Scoring
//!
//! | Drop | Points |
//! |------|--------|
//! | Letter into its own bin | +10 |
//! | Letter into another bin | -5 |
//! | Letter outside every bin | 0 |
//!
//! # Examples
//!
//! ```
//! use santa_sorter_types::{Category, Point, Rect, GameAction};
//!
//! // Parse a category (case-insensitive)
//! assert_eq!(Category::from_str("Toys"), Some(Category::Toys));
//!
//! // Rectangle containment is half-open on the far edges
//! let r = Rect::new(10, 5, 4, 2);
//! assert!(r.contains(Point::new(10, 5)));
//! assert!(r.contains(Point::new(13, 6)));
//! assert!(!r.contains(Point::new(14, 6)));
//!
//! assert_eq!(GameAction::from_str("confirm"), Some(GameAction::Confirm));
//! ```

/// Play field width in cells
pub const FIELD_WIDTH: i32 = 96;

/// Play field height in cells
pub const FIELD_HEIGHT: i32 = 30;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Length of one session (45 seconds)
pub const SESSION_MS: u32 = 45_000;

/// Maximum number of letters alive at the same time
pub const LETTER_CAP: usize = 4;

/// Letter box width in cells
pub const LETTER_WIDTH: i32 = 24;

/// Letter box height in cells
pub const LETTER_HEIGHT: i32 = 5;

/// Horizontal pointer anchor inside a dragged letter.
///
/// While a letter is held its top-left corner follows the pointer minus this
/// offset, whatever point of the box was grabbed.
pub const GRAB_OFFSET_X: i32 = 12;

/// Vertical pointer anchor inside a dragged letter.
pub const GRAB_OFFSET_Y: i32 = 2;

/// Bin width in cells
pub const BIN_WIDTH: i32 = 22;

/// Bin height in cells
pub const BIN_HEIGHT: i32 = 4;

/// Left edge of the first bin; further bins follow every `BIN_STRIDE` cells
pub const BIN_LEFT: i32 = 9;

/// Horizontal distance between the left edges of neighbouring bins
pub const BIN_STRIDE: i32 = 29;

/// Top edge shared by all bins
pub const BIN_TOP: i32 = FIELD_HEIGHT - BIN_HEIGHT - 1;

/// Leftmost spawn column for a letter's top-left corner
pub const SPAWN_X_MIN: i32 = 2;

/// Rightmost spawn column for a letter's top-left corner
pub const SPAWN_X_MAX: i32 = FIELD_WIDTH - LETTER_WIDTH - 2;

/// Topmost spawn row for a letter's top-left corner (below the HUD)
pub const SPAWN_Y_MIN: i32 = 3;

/// Lowest spawn row for a letter's top-left corner (above the bins)
pub const SPAWN_Y_MAX: i32 = 15;

/// Points awarded for a letter dropped into its own bin
pub const MATCH_POINTS: i32 = 10;

/// Points taken for a letter dropped into another category's bin
pub const MISMATCH_PENALTY: i32 = 5;

/// Width available to letter text inside the box (box minus border and padding)
pub const WRAP_WIDTH: u16 = 20;

/// Maximum number of text lines shown on a letter
pub const WRAP_MAX_LINES: usize = 3;

/// Interval between horizontal drift steps of a snowflake
pub const SNOW_JITTER_MS: u32 = 120;


/// Letter categories, one bin each
///
/// Declaration order is also the bin order on screen and the tie-break order
/// when bins overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Toys,
    Books,
    Sports,
}

impl Category {
    /// Every category in declaration order
    pub const ALL: [Category; 3] = [Category::Toys, Category::Books, Category::Sports];

    /// Parse category from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use santa_sorter_types::Category;
    ///
    /// assert_eq!(Category::from_str("books"), Some(Category::Books));
    /// assert_eq!(Category::from_str("SPORTS"), Some(Category::Sports));
    /// assert_eq!(Category::from_str("candy"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toys" => Some(Category::Toys),
            "books" => Some(Category::Books),
            "sports" => Some(Category::Sports),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Toys => "toys",
            Category::Books => "books",
            Category::Sports => "sports",
        }
    }

    /// Uppercase label printed on the bin
    pub fn label(&self) -> &'static str {
        match self {
            Category::Toys => "TOYS",
            Category::Books => "BOOKS",
            Category::Sports => "SPORTS",
        }
    }
}

/// A position on the play field, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle on the play field
///
/// Covers `x..x + w` and `y..y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Check whether `p` lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Pointer input in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(Point),
    /// Pointer moved (with or without a button held)
    Move(Point),
    /// Primary button released
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// Keyboard-level game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a session from the welcome screen, or leave the game-over screen
    Confirm,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use santa_sorter_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Confirm"), Some(GameAction::Confirm));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirm" => Some(GameAction::Confirm),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Confirm => "confirm",
        }
    }
}

/// Session lifecycle
///
/// `NotStarted -> Active -> Ended -> NotStarted`; no other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    /// Welcome screen, waiting for a start request
    #[default]
    NotStarted,
    /// Countdown running, letters can be dragged
    Active,
    /// Countdown exhausted, waiting for acknowledgement
    Ended,
}

/// Signals emitted by the game loop for the outside world (sound, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A letter was dropped into the bin of its own category
    Sorted { category: Category },
    /// A letter was dropped into the bin of another category
    Missorted { letter: Category, bin: Category },
    /// The countdown ran out
    ///
    /// `new_high_score` is set when `score` beat the previously stored high
    /// score; only then should the value be persisted.
    SessionEnded { score: i32, new_high_score: bool },
}
