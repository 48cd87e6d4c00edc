//! Grid cursor used to pick a card with the keyboard.

use crate::core::layout::{index_at, position, row_count};
use crate::types::{CardIndex, GameAction};

/// Cursor position over a `columns`-wide grid of `card_count` cards.
///
/// Moves stop at the edges; moving into the gap of a short last row lands
/// on the last card instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: CardIndex,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> CardIndex {
        self.index
    }

    /// Keep the cursor on a card after the deck changed size.
    pub fn clamp(&mut self, card_count: usize) {
        if card_count == 0 {
            self.index = 0;
        } else if self.index >= card_count {
            self.index = card_count - 1;
        }
    }

    /// Apply a movement action; returns false for non-movement actions or
    /// when the cursor is already at the edge.
    pub fn apply(&mut self, action: GameAction, columns: u16, card_count: usize) -> bool {
        if card_count == 0 || columns == 0 {
            return false;
        }
        self.clamp(card_count);

        let (col, row) = position(self.index, columns);
        let rows = row_count(card_count, columns);

        let target = match action {
            GameAction::MoveLeft if col > 0 => (col - 1, row),
            GameAction::MoveRight if col + 1 < columns => (col + 1, row),
            GameAction::MoveUp if row > 0 => (col, row - 1),
            GameAction::MoveDown if row + 1 < rows => (col, row + 1),
            _ => return false,
        };

        let next = index_at(target.0, target.1, columns, card_count)
            .unwrap_or(card_count - 1);
        if next == self.index {
            return false;
        }
        self.index = next;
        true
    }
}
