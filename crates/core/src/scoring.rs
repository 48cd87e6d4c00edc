//! Scoring module - final score and elapsed time formatting
//!
//! The score starts at `MAX_SCORE` and loses one point per move and one per
//! elapsed second, never going below zero. A perfect twelve card game (12
//! moves in about 12 seconds) lands right around 1000.

use crate::types::MAX_SCORE;

/// Final score for a finished game.
///
/// # Examples
///
/// ```
/// use tui_memory_core::compute_score;
///
/// assert_eq!(compute_score(10, 14), 1000);
/// assert_eq!(compute_score(2000, 0), 0);
/// ```
pub fn compute_score(moves: u32, elapsed_seconds: u32) -> u32 {
    MAX_SCORE.saturating_sub(moves.saturating_add(elapsed_seconds))
}

/// `MM:SS`, minutes zero-padded and uncapped.
pub fn format_elapsed(elapsed_seconds: u32) -> String {
    format!("{:02}:{:02}", elapsed_seconds / 60, elapsed_seconds % 60)
}
