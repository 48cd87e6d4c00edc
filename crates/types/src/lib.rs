//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view and the input mapping alike.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `CLOCK_INTERVAL_MS` | 1000 | One elapsed-time tick |
//! | `FLIP_DELAY_MIN_MS` | 350 | Shortest accepted flip delay |
//! | `FLIP_DELAY_MAX_MS` | 3000 | Longest accepted flip delay |
//! | `FLIP_DELAY_FALLBACK_MS` | 350 | Value used when the requested delay is rejected |
//!
//! # Layout Constants
//!
//! The grid uses between `MIN_COLUMNS` (2) and `MAX_COLUMNS` (12) columns,
//! always an even number.
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardFace, GameAction, MAX_SCORE};
//!
//! assert!(CardFace::Up.is_flipped());
//! assert!(!CardFace::Up.is_matched());
//!
//! assert_ne!(GameAction::Select, GameAction::Restart);
//! assert_eq!(MAX_SCORE, 1024);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval of the elapsed-time clock (one second)
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// Minimum accepted flip delay
pub const FLIP_DELAY_MIN_MS: u32 = 350;

/// Maximum accepted flip delay
pub const FLIP_DELAY_MAX_MS: u32 = 3000;

/// Flip delay used when the requested one is out of range or not a number
pub const FLIP_DELAY_FALLBACK_MS: u32 = 350;

/// Flip delay used by the terminal front-end when nothing is configured
pub const DEFAULT_FLIP_DELAY_MS: u32 = 1000;

/// Score ceiling; moves and seconds are subtracted from it
pub const MAX_SCORE: u32 = 1024;

/// Fewest grid columns
pub const MIN_COLUMNS: u16 = 2;

/// Most grid columns
pub const MAX_COLUMNS: u16 = 12;

/// Largest deck that still lays out on a 12x12 grid
pub const MAX_CARDS: usize = 144;

/// Index of a card within the dealt deck.
pub type CardIndex = usize;

/// Face state of a single card.
///
/// The lifecycle is `Down -> Up -> Matched` for a found pair, or
/// `Down -> Up -> Down` when the pair did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardFace {
    /// Face-down, selectable
    #[default]
    Down,
    /// Face-up, waiting for evaluation
    Up,
    /// Paired; terminal for the current game
    Matched,
}

impl CardFace {
    /// True for face-up and matched cards.
    pub fn is_flipped(&self) -> bool {
        matches!(self, CardFace::Up | CardFace::Matched)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, CardFace::Matched)
    }
}

/// Actions the presentation layer can send to the game loop.
///
/// Cursor movement is presentation state; only `Select` and `Restart`
/// reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move cursor one column left
    MoveLeft,
    /// Move cursor one column right
    MoveRight,
    /// Move cursor one row up
    MoveUp,
    /// Move cursor one row down
    MoveDown,
    /// Select the card under the cursor (or confirm the win popup)
    Select,
    /// Restart the game at any time
    Restart,
}

/// Notification emitted by the engine towards the presentation layer.
///
/// Mirrors the `GameObserver` callbacks one-to-one so observers can record
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MovesChanged(u32),
    Tick(String),
    Won(u32),
    InvalidConfig(String),
}
