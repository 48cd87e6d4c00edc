//! Grid layout policy
//!
//! Derives how many columns the board uses for a given number of cards. The
//! column count is always even and within `[MIN_COLUMNS, MAX_COLUMNS]`:
//!
//! | Cards | Half | Columns |
//! |-------|------|---------|
//! | 4 | 2 | 2 |
//! | 8 | 4 | 4 |
//! | 12 | 6 | 6 |
//! | 18 | 9 | 8 |
//! | 22 | 11 | 12 |
//! | 24 | 12 | 12 |
//!
//! Odd values round down, except 11 which rounds up to 12.

use crate::types::{CardIndex, MAX_COLUMNS, MIN_COLUMNS};

/// Number of grid columns for `card_count` cards.
///
/// # Examples
///
/// ```
/// use tui_memory_core::layout::column_count;
///
/// assert_eq!(column_count(12), 6);
/// assert_eq!(column_count(18), 8);
/// assert_eq!(column_count(22), 12);
/// ```
pub fn column_count(card_count: usize) -> u16 {
    let half = (card_count / 2).min(MAX_COLUMNS as usize) as u16;
    let columns = half.max(MIN_COLUMNS);

    if columns % 2 == 0 {
        columns
    } else if columns == 11 {
        12
    } else {
        columns - 1
    }
}

/// Rows needed to fit `card_count` cards in `columns` columns.
pub fn row_count(card_count: usize, columns: u16) -> u16 {
    if columns == 0 {
        return 0;
    }
    card_count.div_ceil(columns as usize) as u16
}

/// Grid position `(column, row)` of a card index.
pub fn position(index: CardIndex, columns: u16) -> (u16, u16) {
    let columns = columns.max(1) as usize;
    ((index % columns) as u16, (index / columns) as u16)
}

/// Card index at a grid position, if a card sits there.
pub fn index_at(column: u16, row: u16, columns: u16, card_count: usize) -> Option<CardIndex> {
    if column >= columns {
        return None;
    }
    let index = (row as usize) * (columns as usize) + column as usize;
    (index < card_count).then_some(index)
}
