//! Terminal byte encoding of framebuffers.

use tui_memory::core::{Deck, MemoryGame};
use tui_memory::term::{encode_diff_into, encode_full_into, GameView, UiOverlay, Viewport};

fn frames() -> (tui_memory::term::FrameBuffer, tui_memory::term::FrameBuffer) {
    let mut game = MemoryGame::headless(5);
    game.configure(Deck::builtin(), 1000);
    let view = GameView::default();
    let vp = Viewport::new(100, 12);

    let before = view.render(&game.snapshot(), &UiOverlay::default(), vp);
    game.select_card(0);
    let after = view.render(&game.snapshot(), &UiOverlay::default(), vp);
    (before, after)
}

#[test]
fn full_redraw_contains_board_text() {
    let (before, _) = frames();
    let mut out = Vec::new();
    encode_full_into(&before, &mut out).unwrap();

    let text = String::from_utf8_lossy(&out);
    assert!(text.contains('┌'));
    assert!(text.contains("MOVES"));
}

#[test]
fn diff_is_empty_for_identical_frames() {
    let (before, _) = frames();
    let mut out = Vec::new();
    let same = before.clone();
    encode_diff_into(&before, &same, &mut out).unwrap();

    let mut full = Vec::new();
    encode_full_into(&before, &mut full).unwrap();
    // Only the trailing style reset.
    assert!(out.len() < 32);
    assert!(out.len() < full.len());
}

#[test]
fn diff_after_flip_is_smaller_than_full_redraw() {
    let (before, after) = frames();
    assert_ne!(before, after);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
