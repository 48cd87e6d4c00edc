//! A single matchable tile.

use crate::types::CardFace;

/// One card on the table.
///
/// `image` is opaque to the engine; the front-end decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    identity: String,
    image: Option<String>,
    face: CardFace,
}

impl Card {
    /// Create a face-down card
    pub fn new(identity: impl Into<String>, image: Option<String>) -> Self {
        Self {
            identity: identity.into(),
            image,
            face: CardFace::Down,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face.is_flipped()
    }

    pub fn is_matched(&self) -> bool {
        self.face.is_matched()
    }

    /// Turn a face-down card up and a face-up card down.
    ///
    /// Matched cards stay matched.
    pub fn toggle_flip(&mut self) {
        match self.face {
            CardFace::Down => self.flip(),
            CardFace::Up => self.unflip(),
            CardFace::Matched => {}
        }
    }

    /// Two cards match when they share an identity.
    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }

    /// Back to face-down, whatever the current state.
    pub(crate) fn reset(&mut self) {
        self.face = CardFace::Down;
    }

    fn flip(&mut self) {
        self.face = CardFace::Up;
    }

    fn unflip(&mut self) {
        self.face = CardFace::Down;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new("Go", Some("./img/Go.svg".to_string()));
        assert_eq!(card.face(), CardFace::Down);
        assert!(!card.is_flipped());
        assert!(!card.is_matched());
        assert_eq!(card.identity(), "Go");
        assert_eq!(card.image(), Some("./img/Go.svg"));
    }

    #[test]
    fn test_toggle_flip_round_trip() {
        let mut card = Card::new("Go", None);
        card.toggle_flip();
        assert_eq!(card.face(), CardFace::Up);
        assert!(card.is_flipped());
        card.toggle_flip();
        assert_eq!(card.face(), CardFace::Down);
    }

    #[test]
    fn test_matched_card_ignores_toggle() {
        let mut card = Card::new("Go", None);
        card.toggle_flip();
        card.mark_matched();
        card.toggle_flip();
        assert_eq!(card.face(), CardFace::Matched);
        assert!(card.is_flipped());

        card.reset();
        assert_eq!(card.face(), CardFace::Down);
    }

    #[test]
    fn test_matches_compares_identity_only() {
        let a = Card::new("Ruby", Some("a.svg".to_string()));
        let mut b = Card::new("Ruby", None);
        let c = Card::new("Java", None);

        b.toggle_flip();
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&c));
    }
}
