//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_memory::{core,input,term,types}`
//! and holds the runner's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
