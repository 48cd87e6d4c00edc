use tui_memory::core::{Deck, EventLog, GameSnapshot, MemoryGame};
use tui_memory::term::{GameView, UiOverlay, Viewport};
use tui_memory::types::CardIndex;

fn started() -> MemoryGame<EventLog> {
    let mut game = MemoryGame::new(11, EventLog::new());
    game.configure(Deck::builtin(), 350);
    game
}

fn win(game: &mut MemoryGame<EventLog>) {
    let ids: Vec<String> = game
        .deck()
        .iter()
        .map(|c| c.identity().to_string())
        .collect();
    for i in 0..ids.len() {
        let Some(j) = (i + 1..ids.len()).find(|&j| ids[j] == ids[i]) else {
            continue;
        };
        game.select_card(i);
        game.select_card(j);
        game.evaluate_match();
    }
}

fn no_overlay() -> UiOverlay<'static> {
    UiOverlay::default()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = started().snapshot();
    let view = GameView::default();

    // 6 columns of 12-wide tiles plus gaps => 77 inner, plus border and padding => 81.
    // 2 rows of 3-high tiles plus a gap => 7 inner, plus border => 9.
    let fb = view.render(&snap, &no_overlay(), Viewport::new(81, 9));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(80, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
    assert_eq!(fb.get(80, 8).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_face_down_tiles() {
    let snap = started().snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, &no_overlay(), Viewport::new(81, 9));

    let geo = view.geometry(&snap, Viewport::new(81, 9));
    assert_eq!(geo.tile_origin(0), (2, 1));
    assert_eq!(geo.tile_origin(7), (15, 5));
    assert_eq!(fb.get(2, 1).unwrap().ch, '▒');
    assert_eq!(fb.get(13, 3).unwrap().ch, '▒');
    // Gap column between tiles 0 and 1.
    assert_eq!(fb.get(14, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_identity_of_face_up_card() {
    let mut game = started();
    let index: CardIndex = 3;
    game.select_card(index);
    let identity = game.card(index).unwrap().identity().to_string();

    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(81, 9);
    let fb = view.render(&snap, &no_overlay(), vp);

    let (_, y) = view.geometry(&snap, vp).tile_origin(index);
    assert!(fb.row_text(y + 1).contains(&identity));
}

#[test]
fn term_view_draws_cursor_box() {
    let snap = started().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(81, 9);
    let ui = UiOverlay {
        cursor: Some(1),
        banner: None,
    };
    let fb = view.render(&snap, &ui, vp);

    let (x, y) = view.geometry(&snap, vp).tile_origin(1);
    assert_eq!(fb.get(x, y).unwrap().ch, '┏');
    assert_eq!(fb.get(x + 11, y + 2).unwrap().ch, '┛');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = started();
    game.select_card(0);
    game.select_card(0);
    for _ in 0..65 {
        game.tick();
    }
    let snap = game.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, &no_overlay(), Viewport::new(120, 20));
    let text = fb.to_text();

    assert!(text.contains("MOVES"));
    assert!(text.contains("TIME"));
    assert!(text.contains("01:05"));
    assert!(text.contains("PAIRS"));
    assert!(text.contains("0/6"));
    assert!(text.contains("SCORE"));
}

#[test]
fn term_view_falls_back_to_status_line() {
    let snap = started().snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, &no_overlay(), Viewport::new(81, 12));

    // Board occupies rows 1..=9; the status line sits right below.
    assert!(fb.row_text(10).contains("MOVES 0  TIME 00:00  PAIRS 0/6"));
}

#[test]
fn term_view_shows_won_popup() {
    let mut game = started();
    win(&mut game);
    assert!(game.is_won());

    let snap = game.snapshot();
    let text = GameView::default()
        .render(&snap, &no_overlay(), Viewport::new(81, 9))
        .to_text();

    assert!(text.contains("Congratulations!"));
    let score_line = format!("You won! - Score: {}", game.score());
    assert!(text.contains(&score_line));
}

#[test]
fn term_view_shows_config_banner() {
    let mut game = MemoryGame::new(1, EventLog::new());
    game.configure(Deck::builtin(), 100);
    let warning = game.observer().warnings().next().unwrap().to_string();

    let ui = UiOverlay {
        cursor: None,
        banner: Some(warning.as_str()),
    };
    let snap = game.snapshot();
    let vp = Viewport::new(120, 20);
    let fb = GameView::default().render(&snap, &ui, vp);
    assert!(fb.row_text(0).starts_with("! flip delay"));
}

#[test]
fn term_view_handles_empty_snapshot() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, &no_overlay(), Viewport::new(40, 10));
    assert_eq!(fb.width(), 40);
    assert_eq!(fb.height(), 10);
}
