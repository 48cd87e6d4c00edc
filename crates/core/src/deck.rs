//! Deck construction: two cards per identity.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::card::Card;
use crate::rng::SimpleRng;
use crate::types::{CardIndex, MAX_CARDS};

/// One entry of the identity list supplied by the front-end.
///
/// Field names follow the JSON deck files (`{"name": .., "img": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSpec {
    pub name: String,
    #[serde(default, rename = "img")]
    pub image: Option<String>,
}

impl CardSpec {
    pub fn new(name: impl Into<String>, image: Option<&str>) -> Self {
        Self {
            name: name.into(),
            image: image.map(str::to_string),
        }
    }
}

/// Errors raised while building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck needs at least one card identity")]
    Empty,
    #[error("card identity must not be blank")]
    BlankIdentity,
    #[error("card identity {0:?} appears more than once")]
    DuplicateIdentity(String),
    #[error("deck of {count} cards exceeds the {max} card grid")]
    TooManyCards { count: usize, max: usize },
}

/// The six languages of the classic board.
pub fn builtin_specs() -> Vec<CardSpec> {
    vec![
        CardSpec::new("Python", Some("./img/Python.svg")),
        CardSpec::new("JavaScript", Some("./img/JS.svg")),
        CardSpec::new("Java", Some("./img/Java.svg")),
        CardSpec::new("CSharp", Some("./img/CSharp.svg")),
        CardSpec::new("Go", Some("./img/Go.svg")),
        CardSpec::new("Ruby", Some("./img/Ruby.svg")),
    ]
}

/// Ordered set of cards. Always even-sized, exactly two cards per identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck with two cards for every spec, in spec order.
    pub fn from_specs(specs: &[CardSpec]) -> Result<Self, DeckError> {
        if specs.is_empty() {
            return Err(DeckError::Empty);
        }

        let count = specs.len() * 2;
        if count > MAX_CARDS {
            return Err(DeckError::TooManyCards {
                count,
                max: MAX_CARDS,
            });
        }

        let mut seen = HashSet::with_capacity(specs.len());
        let mut cards = Vec::with_capacity(count);
        for spec in specs {
            let name = spec.name.trim();
            if name.is_empty() {
                return Err(DeckError::BlankIdentity);
            }
            if !seen.insert(name) {
                return Err(DeckError::DuplicateIdentity(name.to_string()));
            }
            cards.push(Card::new(name, spec.image.clone()));
            cards.push(Card::new(name, spec.image.clone()));
        }

        Ok(Self { cards })
    }

    /// The built-in twelve card deck.
    pub fn builtin() -> Self {
        let specs = builtin_specs();
        let mut cards = Vec::with_capacity(specs.len() * 2);
        for spec in specs {
            cards.push(Card::new(spec.name.clone(), spec.image.clone()));
            cards.push(Card::new(spec.name, spec.image));
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Turn every card face-down, matched ones included.
    pub(crate) fn flip_down_all(&mut self) {
        for card in &mut self.cards {
            card.reset();
        }
    }

    /// Uniform Fisher-Yates permutation of the card order.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.cards);
    }
}
