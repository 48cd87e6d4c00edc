//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the grid
//! cursor the player moves over the cards.

pub mod cursor;
pub mod map;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
