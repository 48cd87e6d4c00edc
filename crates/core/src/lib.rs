//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory game: cards, deck
//! construction, the grid layout policy, timers, scoring and the engine that
//! ties them together. It has **no dependencies** on the terminal, input
//! decoding or I/O, making it:
//!
//! - **Deterministic**: the same seed deals the same cards
//! - **Testable**: time only moves when the caller says so
//! - **Portable**: any front-end can drive it through [`GameObserver`]
//!
//! # Module Structure
//!
//! - [`card`]: a single matchable card and its face state
//! - [`deck`]: building a deck of pairs from an identity list
//! - [`layout`]: column count policy and grid coordinates
//! - [`rng`]: seeded LCG with an unbiased Fisher-Yates shuffle
//! - [`timer`]: one-shot and recurring timer handles
//! - [`scoring`]: final score and `MM:SS` formatting
//! - [`config`]: flip delay validation
//! - [`observer`]: callbacks towards the presentation layer
//! - [`game_state`]: the engine
//! - [`snapshot`]: render-friendly copy of the engine state
//!
//! # Game Rules
//!
//! - Select a face-down card to turn it up; a second one completes a pair.
//! - After the flip delay the pair is compared: matching cards stay up,
//!   others turn back down.
//! - Every click counts as a move, even one that was ignored.
//! - When every card is matched, the clock stops and the score is
//!   `max(0, 1024 - (moves + seconds))`.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Deck, EventLog, MemoryGame};
//!
//! let mut game = MemoryGame::new(12345, EventLog::new());
//! game.configure(Deck::builtin(), 500);
//!
//! game.select_card(0);
//! game.select_card(1);
//! game.update(500); // flip delay elapses, pair is evaluated
//!
//! assert_eq!(game.moves(), 2);
//! assert!(game.pending().is_empty());
//! ```
//!
//! # Timing
//!
//! The front-end calls [`MemoryGame::update`](game_state::MemoryGame::update)
//! every frame (`TICK_MS`, about 16ms) with the elapsed time.

pub mod card;
pub mod config;
pub mod deck;
pub mod game_state;
pub mod layout;
pub mod observer;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use config::{ConfigWarning, FlipDelay};
pub use deck::{builtin_specs, CardSpec, Deck, DeckError};
pub use game_state::MemoryGame;
pub use layout::column_count;
pub use observer::{EventLog, GameObserver, NullObserver};
pub use rng::SimpleRng;
pub use scoring::{compute_score, format_elapsed};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use timer::{Countdown, Interval};
