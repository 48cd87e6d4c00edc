//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a plain framebuffer that is then flushed to the terminal, without any
//! widget or layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardGeometry, GameView, UiOverlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
