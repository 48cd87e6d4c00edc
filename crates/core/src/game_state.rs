//! Game state module - the memory game engine
//!
//! This module ties together the deck, the layout policy, the timers and
//! scoring. It owns the pending pair, the move counter and the elapsed-time
//! clock, and reports to the presentation layer through a [`GameObserver`].
//!
//! Time only advances through [`MemoryGame::update`], which the front-end
//! calls every frame with the elapsed milliseconds. Two timers hang off it:
//!
//! - the match timer, armed when the second card of a pair is turned up and
//!   evaluated once the flip delay has passed;
//! - the clock, firing [`MemoryGame::tick`] once per second while running.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::card::Card;
use crate::config::{ConfigWarning, FlipDelay};
use crate::deck::Deck;
use crate::layout::{column_count, row_count};
use crate::observer::{GameObserver, NullObserver};
use crate::rng::SimpleRng;
use crate::scoring::{compute_score, format_elapsed};
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::timer::{Countdown, Interval};
use crate::types::{CardIndex, CLOCK_INTERVAL_MS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct MemoryGame<O: GameObserver = NullObserver> {
    deck: Deck,
    columns: u16,
    /// Face-up cards waiting for evaluation, in selection order.
    pending: ArrayVec<CardIndex, 2>,
    /// Matched cards, in the order they were found.
    matched: Vec<CardIndex>,
    moves: u32,
    elapsed_seconds: u32,
    score: u32,
    running: bool,
    flip_delay: FlipDelay,
    match_timer: Option<Countdown>,
    clock: Option<Interval>,
    rng: SimpleRng,
    /// Monotonic game id (increments on every configure and reset).
    episode_id: u32,
    observer: O,
}

impl MemoryGame<NullObserver> {
    /// Engine without an observer, mostly for tests and benches.
    pub fn headless(seed: u32) -> Self {
        Self::new(seed, NullObserver)
    }
}

impl<O: GameObserver> MemoryGame<O> {
    /// Create an idle engine. Nothing is dealt until [`MemoryGame::configure`].
    pub fn new(seed: u32, observer: O) -> Self {
        Self {
            deck: Deck::default(),
            columns: column_count(0),
            pending: ArrayVec::new(),
            matched: Vec::new(),
            moves: 0,
            elapsed_seconds: 0,
            score: 0,
            running: false,
            flip_delay: FlipDelay::default(),
            match_timer: None,
            clock: None,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            observer,
        }
    }

    /// Deal `deck` with the given flip delay and start the game.
    ///
    /// An out-of-range delay is replaced by the fallback and reported through
    /// `on_invalid_config`; the game starts regardless.
    pub fn configure(&mut self, deck: Deck, flip_delay_ms: i64) {
        let (delay, warning) = FlipDelay::validate(flip_delay_ms);
        self.apply_config(deck, delay, warning);
    }

    /// Same as [`MemoryGame::configure`] for a delay given as text.
    pub fn configure_raw(&mut self, deck: Deck, flip_delay: &str) {
        let (delay, warning) = FlipDelay::parse(flip_delay);
        self.apply_config(deck, delay, warning);
    }

    fn apply_config(&mut self, deck: Deck, delay: FlipDelay, warning: Option<ConfigWarning>) {
        if let Some(warning) = warning {
            let message = warning.to_string();
            warn!(%message, "invalid configuration");
            self.observer.on_invalid_config(&message);
        }

        self.flip_delay = delay;
        self.deck = deck;
        self.columns = column_count(self.deck.len());
        info!(
            cards = self.deck.len(),
            columns = self.columns,
            flip_delay_ms = delay.as_ms(),
            "game configured"
        );
        self.reset_game();
    }

    /// Start over with the same cards: everything face-down, re-shuffled,
    /// counters zeroed and the clock restarted.
    ///
    /// Any pending evaluation is cancelled first, so it can never touch the
    /// new game.
    pub fn reset_game(&mut self) {
        self.match_timer = None;
        self.stop_timer();

        self.deck.flip_down_all();
        self.deck.shuffle(&mut self.rng);

        self.pending.clear();
        self.matched.clear();
        self.moves = 0;
        self.score = 0;
        self.elapsed_seconds = 0;
        self.episode_id = self.episode_id.wrapping_add(1);

        self.running = !self.deck.is_empty();
        if self.running {
            self.start_timer();
        }
        debug!(episode_id = self.episode_id, "game reset");

        self.observer.on_moves_changed(self.moves);
        self.observer.on_tick(&format_elapsed(self.elapsed_seconds));
    }

    /// Entry point for a click on card `index`.
    ///
    /// Every call once a deck is dealt counts as a move, including clicks
    /// after the game is won. The card is only turned up while the game is
    /// running, when it is face-down and fewer than two cards are pending;
    /// returns whether that happened.
    pub fn select_card(&mut self, index: CardIndex) -> bool {
        if self.deck.is_empty() {
            return false;
        }

        let accepted = self.running
            && self.pending.len() < 2
            && self.deck.get(index).is_some_and(|card| !card.is_flipped());

        if accepted {
            if let Some(card) = self.deck.get_mut(index) {
                card.toggle_flip();
            }
            self.pending.push(index);

            if self.pending.len() == 2 {
                self.match_timer = Some(Countdown::new(self.flip_delay.as_ms()));
            }
        }

        self.moves = self.moves.saturating_add(1);
        self.observer.on_moves_changed(self.moves);
        accepted
    }

    /// Compare the pending pair.
    ///
    /// A match marks both cards matched (finishing the game when it was the
    /// last pair); a mismatch turns both face-down again. Returns `None` when
    /// fewer than two cards are pending, otherwise whether they matched.
    pub fn evaluate_match(&mut self) -> Option<bool> {
        self.match_timer = None;

        let [first, second] = match self.pending.as_slice() {
            &[a, b] => [a, b],
            _ => return None,
        };

        let is_match = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                if is_match {
                    card.mark_matched();
                } else {
                    card.toggle_flip();
                }
            }
        }
        self.pending.clear();

        if is_match {
            self.matched.push(first);
            self.matched.push(second);
            debug!(first, second, matched = self.matched.len(), "pair matched");

            if self.matched.len() == self.deck.len() {
                self.finish();
            }
        } else {
            debug!(first, second, "pair mismatched");
        }

        Some(is_match)
    }

    fn finish(&mut self) {
        self.stop_timer();
        self.score = self.compute_score();
        self.running = false;
        info!(
            moves = self.moves,
            elapsed_seconds = self.elapsed_seconds,
            score = self.score,
            "game won"
        );
        self.observer.on_won(self.score);
    }

    /// One elapsed second.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        self.observer.on_tick(&format_elapsed(self.elapsed_seconds));
    }

    /// Advance both timers by `elapsed_ms`.
    ///
    /// Fires [`MemoryGame::tick`] for every completed second, then evaluates
    /// the pending pair if the flip delay has run out.
    pub fn update(&mut self, elapsed_ms: u32) {
        if !self.running {
            return;
        }

        let seconds = self
            .clock
            .as_mut()
            .map_or(0, |clock| clock.advance(elapsed_ms));
        for _ in 0..seconds {
            self.tick();
        }

        let expired = self
            .match_timer
            .as_mut()
            .is_some_and(|timer| timer.advance(elapsed_ms));
        if expired {
            self.evaluate_match();
        }
    }

    /// `max(0, MAX_SCORE - (moves + elapsed_seconds))` for the current counters.
    pub fn compute_score(&self) -> u32 {
        compute_score(self.moves, self.elapsed_seconds)
    }

    fn start_timer(&mut self) {
        self.clock = Some(Interval::new(CLOCK_INTERVAL_MS));
    }

    /// Cancel the clock. Returns false when it was not running.
    pub fn stop_timer(&mut self) -> bool {
        self.clock.take().is_some()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.get(index)
    }

    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        row_count(self.deck.len(), self.columns)
    }

    pub fn pending(&self) -> &[CardIndex] {
        &self.pending
    }

    pub fn matched(&self) -> &[CardIndex] {
        &self.matched
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_won(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    pub fn is_timer_running(&self) -> bool {
        self.clock.is_some()
    }

    /// Time left before the pending pair is evaluated, if one is waiting.
    pub fn match_delay_remaining_ms(&self) -> Option<u32> {
        self.match_timer.map(|t| t.remaining_ms())
    }

    pub fn flip_delay_ms(&self) -> u32 {
        self.flip_delay.as_ms()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.deck.iter().map(CardSnapshot::from));
        out.columns = self.columns;
        out.rows = self.rows();
        out.moves = self.moves;
        out.elapsed_seconds = self.elapsed_seconds;
        out.score = self.score;
        out.won = self.is_won();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for MemoryGame<NullObserver> {
    fn default() -> Self {
        Self::headless(1)
    }
}
