use crate::card::Card;
use crate::types::CardFace;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub identity: String,
    pub face: CardFace,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            identity: card.identity().to_string(),
            face: card.face(),
        }
    }
}

/// Read-only view of a game, handed to the renderer every frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub columns: u16,
    pub rows: u16,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub score: u32,
    pub won: bool,
}

impl GameSnapshot {
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.face.is_matched()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_count() {
        let snap = GameSnapshot {
            cards: vec![CardSnapshot {
                identity: "Go".into(),
                face: CardFace::Matched,
            }],
            columns: 2,
            rows: 1,
            moves: 4,
            elapsed_seconds: 9,
            score: 1011,
            won: true,
        };
        assert_eq!(snap.matched_count(), 1);
        assert_eq!(GameSnapshot::default().matched_count(), 0);
    }
}
