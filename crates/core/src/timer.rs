//! Timer handles driven by the fixed timestep.
//!
//! The engine owns these as `Option<_>` fields. Dropping the handle cancels
//! it, so cancelling twice (or cancelling a timer that never ran) is a no-op.

/// One-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_ms: u32,
}

impl Countdown {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            remaining_ms: duration_ms,
        }
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Advance by `elapsed_ms`; returns true once the countdown has reached zero.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }
}

/// Recurring timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period_ms: u32,
    accumulated_ms: u32,
}

impl Interval {
    /// A zero period is treated as 1ms.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Time accumulated towards the next fire.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Advance by `elapsed_ms`; returns how many periods completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.period_ms;
        total / self.period_ms
    }
}
