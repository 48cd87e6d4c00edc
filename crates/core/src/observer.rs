//! Callbacks from the engine to the presentation layer.

use crate::types::GameEvent;

/// Receives engine notifications. Every method defaults to a no-op.
pub trait GameObserver {
    /// After every selection attempt, accepted or not, and on reset.
    fn on_moves_changed(&mut self, _count: u32) {}

    /// Once per elapsed second, with the time formatted as `MM:SS`.
    fn on_tick(&mut self, _formatted: &str) {}

    /// Once per completed game.
    fn on_won(&mut self, _score: u32) {}

    /// When a configuration value was replaced by its fallback.
    fn on_invalid_config(&mut self, _message: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Observer that records every notification as a [`GameEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand over the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn won_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Won(_)))
            .count()
    }

    pub fn last_won(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Won(score) => Some(*score),
            _ => None,
        })
    }

    pub fn last_tick(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Tick(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::InvalidConfig(m) => Some(m.as_str()),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_moves_changed(&mut self, count: u32) {
        self.events.push(GameEvent::MovesChanged(count));
    }

    fn on_tick(&mut self, formatted: &str) {
        self.events.push(GameEvent::Tick(formatted.to_string()));
    }

    fn on_won(&mut self, score: u32) {
        self.events.push(GameEvent::Won(score));
    }

    fn on_invalid_config(&mut self, message: &str) {
        self.events.push(GameEvent::InvalidConfig(message.to_string()));
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_moves_changed(&mut self, count: u32) {
        (**self).on_moves_changed(count);
    }

    fn on_tick(&mut self, formatted: &str) {
        (**self).on_tick(formatted);
    }

    fn on_won(&mut self, score: u32) {
        (**self).on_won(score);
    }

    fn on_invalid_config(&mut self, message: &str) {
        (**self).on_invalid_config(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_moves_changed(1);
        log.on_tick("00:01");
        log.on_invalid_config("bad");
        log.on_won(1000);

        assert_eq!(
            log.events(),
            &[
                GameEvent::MovesChanged(1),
                GameEvent::Tick("00:01".to_string()),
                GameEvent::InvalidConfig("bad".to_string()),
                GameEvent::Won(1000),
            ]
        );
        assert_eq!(log.won_count(), 1);
        assert_eq!(log.last_won(), Some(1000));
        assert_eq!(log.last_tick(), Some("00:01"));
        assert_eq!(log.warnings().collect::<Vec<_>>(), vec!["bad"]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = EventLog::new();
        log.on_won(5);
        assert_eq!(log.drain().count(), 1);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn notify<O: GameObserver>(mut observer: O) {
            observer.on_moves_changed(3);
        }

        let mut log = EventLog::new();
        notify(&mut log);
        assert_eq!(log.events(), &[GameEvent::MovesChanged(3)]);
    }
}
