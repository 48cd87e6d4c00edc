//! Integration tests for the memory game engine through the facade crate.

use tui_memory::core::{builtin_specs, CardSpec, Deck, EventLog, MemoryGame};
use tui_memory::types::{CardFace, CardIndex, GameEvent};

fn started(flip_delay_ms: i64) -> MemoryGame<EventLog> {
    let mut game = MemoryGame::new(2024, EventLog::new());
    let deck = Deck::from_specs(&builtin_specs()).unwrap();
    game.configure(deck, flip_delay_ms);
    game
}

/// Index pairs sharing an identity, in deck order of the first card.
fn pairs(game: &MemoryGame<EventLog>) -> Vec<(CardIndex, CardIndex)> {
    let cards: Vec<_> = game.deck().iter().collect();
    let mut out = Vec::new();
    for (i, a) in cards.iter().enumerate() {
        let id = a.identity();
        if let Some(j) = (i + 1..cards.len()).find(|&j| cards[j].identity() == id) {
            out.push((i, j));
        }
    }
    out
}

fn mismatched(game: &MemoryGame<EventLog>) -> (CardIndex, CardIndex) {
    let first = game.card(0).unwrap().identity().to_string();
    let other = (1..game.card_count())
        .find(|&i| game.card(i).unwrap().identity() != first)
        .unwrap();
    (0, other)
}

#[test]
fn test_game_lifecycle() {
    let mut game = MemoryGame::new(7, EventLog::new());
    assert!(!game.is_running());
    assert!(!game.select_card(0));
    assert_eq!(game.moves(), 0);

    let deck = Deck::from_specs(&builtin_specs()).unwrap();
    game.configure(deck, 500);

    assert!(game.is_running());
    assert!(game.is_timer_running());
    assert_eq!(game.card_count(), 12);
    assert_eq!(game.columns(), 6);
    assert_eq!(game.rows(), 2);
    assert!(game.deck().iter().all(|c| c.face() == CardFace::Down));
    assert_eq!(
        game.observer().events(),
        &[
            GameEvent::MovesChanged(0),
            GameEvent::Tick("00:00".to_string())
        ]
    );
}

#[test]
fn test_full_game_by_clock() {
    let mut game = started(350);
    for (a, b) in pairs(&game) {
        assert!(game.select_card(a));
        assert!(game.select_card(b));
        // Drive the engine the way the terminal loop does.
        for _ in 0..22 {
            game.update(16);
        }
    }

    assert!(game.is_won());
    assert!(!game.is_timer_running());
    assert_eq!(game.observer().won_count(), 1);
    assert!(game.deck().iter().all(|c| c.is_matched()));

    let frozen = game.elapsed_seconds();
    game.update(5_000);
    assert_eq!(game.elapsed_seconds(), frozen);
    assert_eq!(game.score(), 1024 - (12 + frozen));
}

#[test]
fn test_third_selection_is_rejected_but_counted() {
    let mut game = started(1000);
    let (a, b) = mismatched(&game);
    let c = (0..game.card_count()).find(|&i| i != a && i != b).unwrap();

    game.select_card(a);
    game.select_card(b);
    assert!(!game.select_card(c));

    assert_eq!(game.card(c).unwrap().face(), CardFace::Down);
    assert_eq!(game.pending(), &[a, b]);
    assert_eq!(game.moves(), 3);
}

#[test]
fn test_selecting_a_face_up_card_is_rejected() {
    let mut game = started(1000);
    game.select_card(4);
    assert!(!game.select_card(4));
    assert_eq!(game.pending(), &[4]);
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_mismatch_flips_back_after_delay() {
    let mut game = started(1000);
    let (a, b) = mismatched(&game);
    game.select_card(a);
    game.select_card(b);

    game.update(999);
    assert_eq!(game.card(a).unwrap().face(), CardFace::Up);

    game.update(1);
    assert_eq!(game.card(a).unwrap().face(), CardFace::Down);
    assert_eq!(game.card(b).unwrap().face(), CardFace::Down);
    assert!(game.pending().is_empty());
}

#[test]
fn test_matched_cards_cannot_be_selected_again() {
    let mut game = started(1000);
    let (a, b) = pairs(&game)[0];
    game.select_card(a);
    game.select_card(b);
    assert_eq!(game.evaluate_match(), Some(true));

    assert!(!game.select_card(a));
    assert!(game.pending().is_empty());
    assert_eq!(game.card(a).unwrap().face(), CardFace::Matched);
}

#[test]
fn test_reset_mid_game_cancels_pending_pair() {
    let mut game = started(1000);
    let (a, b) = mismatched(&game);
    game.select_card(a);
    game.select_card(b);
    game.update(2_500);
    game.select_card(0);

    game.reset_game();
    assert!(game.pending().is_empty());
    assert_eq!(game.match_delay_remaining_ms(), None);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.elapsed_seconds(), 0);

    // The cancelled evaluation never fires into the new game.
    game.select_card(3);
    game.update(5_000);
    assert_eq!(game.card(3).unwrap().face(), CardFace::Up);
}

#[test]
fn test_flip_delay_validation() {
    for (requested, expected, warned) in [(100, 350, true), (5000, 350, true), (500, 500, false)] {
        let game = started(requested);
        assert_eq!(game.flip_delay_ms(), expected, "requested {requested}");
        assert_eq!(game.observer().warnings().count(), usize::from(warned));
        assert!(game.is_running());
    }
}

#[test]
fn test_non_numeric_flip_delay_warns() {
    let mut game = MemoryGame::new(1, EventLog::new());
    game.configure_raw(Deck::builtin(), "soon");
    assert_eq!(game.flip_delay_ms(), 350);
    let warning = game.observer().warnings().next().unwrap().to_string();
    assert!(warning.contains("soon"));
}

#[test]
fn test_custom_deck() {
    let specs = vec![CardSpec::new("Cat", None), CardSpec::new("Dog", None)];
    let mut game = MemoryGame::new(3, EventLog::new());
    game.configure(Deck::from_specs(&specs).unwrap(), 350);

    assert_eq!(game.card_count(), 4);
    assert_eq!(game.columns(), 2);
    assert_eq!(game.rows(), 2);

    for (a, b) in pairs(&game) {
        game.select_card(a);
        game.select_card(b);
        game.evaluate_match();
    }
    assert!(game.is_won());
    assert_eq!(game.observer().last_won(), Some(1024 - 4));
}

#[test]
fn test_same_seed_same_layout() {
    let a = started(500);
    let b = started(500);
    let ids = |g: &MemoryGame<EventLog>| {
        g.deck()
            .iter()
            .map(|c| c.identity().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&a), ids(&b));
}

#[test]
fn test_clicks_after_win_are_counted_but_rejected() {
    let mut game = started(500);
    for (a, b) in pairs(&game) {
        game.select_card(a);
        game.select_card(b);
        game.evaluate_match();
    }
    assert!(game.is_won());
    let score = game.score();
    game.observer_mut().drain();

    assert!(!game.select_card(0));
    assert_eq!(game.moves(), 13);
    assert_eq!(game.observer().events(), &[GameEvent::MovesChanged(13)]);
    assert!(game.deck().iter().all(|c| c.is_matched()));
    assert!(game.pending().is_empty());
    // The final score was fixed at the win.
    assert_eq!(game.score(), score);
    assert_eq!(game.observer().won_count(), 1);
}
