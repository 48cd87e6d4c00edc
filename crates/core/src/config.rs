//! Flip delay validation.
//!
//! Bad values never abort a game: they are replaced by
//! `FLIP_DELAY_FALLBACK_MS` and reported as a [`ConfigWarning`].

use thiserror::Error;

use crate::types::{FLIP_DELAY_FALLBACK_MS, FLIP_DELAY_MAX_MS, FLIP_DELAY_MIN_MS};

/// A configuration value that was replaced by its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error(
        "flip delay must be between {min} and {max} ms (got {requested}), using {fallback} ms",
        min = FLIP_DELAY_MIN_MS,
        max = FLIP_DELAY_MAX_MS,
        fallback = FLIP_DELAY_FALLBACK_MS
    )]
    FlipDelayOutOfRange { requested: i64 },
    #[error(
        "flip delay {raw:?} is not a number, using {fallback} ms",
        fallback = FLIP_DELAY_FALLBACK_MS
    )]
    FlipDelayNotNumeric { raw: String },
}

/// Validated wait before a pending pair is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipDelay(u32);

impl FlipDelay {
    /// Accept `requested` if it lies in `[FLIP_DELAY_MIN_MS, FLIP_DELAY_MAX_MS]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_core::FlipDelay;
    ///
    /// let (delay, warning) = FlipDelay::validate(500);
    /// assert_eq!(delay.as_ms(), 500);
    /// assert!(warning.is_none());
    ///
    /// let (delay, warning) = FlipDelay::validate(100);
    /// assert_eq!(delay.as_ms(), 350);
    /// assert!(warning.is_some());
    /// ```
    pub fn validate(requested: i64) -> (Self, Option<ConfigWarning>) {
        let range = (FLIP_DELAY_MIN_MS as i64)..=(FLIP_DELAY_MAX_MS as i64);
        if range.contains(&requested) {
            (Self(requested as u32), None)
        } else {
            (
                Self::fallback(),
                Some(ConfigWarning::FlipDelayOutOfRange { requested }),
            )
        }
    }

    /// Validate textual input (CLI flag, environment variable).
    pub fn parse(raw: &str) -> (Self, Option<ConfigWarning>) {
        match raw.trim().parse::<i64>() {
            Ok(requested) => Self::validate(requested),
            Err(_) => (
                Self::fallback(),
                Some(ConfigWarning::FlipDelayNotNumeric {
                    raw: raw.to_string(),
                }),
            ),
        }
    }

    pub fn fallback() -> Self {
        Self(FLIP_DELAY_FALLBACK_MS)
    }

    pub fn as_ms(self) -> u32 {
        self.0
    }
}

impl Default for FlipDelay {
    fn default() -> Self {
        Self::fallback()
    }
}
