//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::layout::position;
use crate::core::{format_elapsed, CardSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardFace, CardIndex};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state drawn on top of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOverlay<'a> {
    /// Card under the keyboard cursor.
    pub cursor: Option<CardIndex>,
    /// One-line notice shown above the board (configuration warnings).
    pub banner: Option<&'a str>,
}

/// Where the board and its tiles land for a given snapshot and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    columns: u16,
}

impl BoardGeometry {
    /// Top-left corner of tile `index`.
    pub fn tile_origin(&self, index: CardIndex) -> (u16, u16) {
        let (col, row) = position(index, self.columns);
        let x = self.start_x + 2 + col * (self.tile_w + TILE_GAP_X);
        let y = self.start_y + 1 + row * (self.tile_h + TILE_GAP_Y);
        (x, y)
    }
}

const TILE_GAP_X: u16 = 1;
const TILE_GAP_Y: u16 = 1;
const MIN_TILE_W: u16 = 4;
const PANEL_MIN_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const INK: Rgb = Rgb::new(20, 20, 20);
const CARD_FACE: Rgb = Rgb::new(225, 225, 235);
const MATCHED_FG: Rgb = Rgb::new(170, 220, 170);
const MATCHED_BG: Rgb = Rgb::new(40, 80, 50);
const POPUP_BG: Rgb = Rgb::new(20, 60, 30);

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns (shrunk to fit narrow terminals).
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 12,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(MIN_TILE_W),
            tile_h: tile_h.max(1),
        }
    }

    /// Board placement, centered in the viewport.
    pub fn geometry(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardGeometry {
        let columns = snap.columns.max(1);
        let rows = snap.rows;

        let gaps_w = (columns - 1) * TILE_GAP_X;
        let fit_w = viewport.width.saturating_sub(4 + gaps_w) / columns;
        let tile_w = self.tile_w.min(fit_w).max(MIN_TILE_W);

        let inner_w = columns * tile_w + gaps_w;
        let inner_h = rows * self.tile_h + rows.saturating_sub(1) * TILE_GAP_Y;
        let frame_w = inner_w + 4;
        let frame_h = inner_h + 2;

        BoardGeometry {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            tile_w,
            tile_h: self.tile_h,
            columns,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        ui: &UiOverlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let geo = self.geometry(snap, viewport);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            geo.start_x + 1,
            geo.start_y + 1,
            geo.frame_w.saturating_sub(2),
            geo.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        draw_box(
            fb,
            geo.start_x,
            geo.start_y,
            geo.frame_w,
            geo.frame_h,
            border,
            BoxChars::LIGHT,
        );

        for (i, card) in snap.cards.iter().enumerate() {
            let (x, y) = geo.tile_origin(i);
            self.draw_tile(fb, x, y, &geo, card, ui.cursor == Some(i));
        }

        self.draw_side_panel(fb, snap, viewport, &geo);

        if let Some(text) = ui.banner {
            let style = CellStyle::new(Rgb::new(250, 200, 80), PANEL_BG).bold();
            fb.put_str(0, 0, "! ", style);
            fb.put_str(2, 0, text, style);
        }

        if snap.won {
            self.draw_won_popup(fb, &geo, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        ui: &UiOverlay<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        geo: &BoardGeometry,
        card: &CardSnapshot,
        selected: bool,
    ) {
        let (w, h) = (geo.tile_w, geo.tile_h);
        match card.face {
            CardFace::Down => {
                let style = CellStyle::new(Rgb::new(70, 90, 160), BOARD_BG);
                fb.fill_rect(x, y, w, h, '▒', style);
            }
            CardFace::Up => {
                let style = CellStyle::new(INK, CARD_FACE).bold();
                fb.fill_rect(x, y, w, h, ' ', style);
                put_label(fb, x, y + h / 2, w, &card.identity, style);
            }
            CardFace::Matched => {
                let style = CellStyle::new(MATCHED_FG, MATCHED_BG).dim();
                fb.fill_rect(x, y, w, h, ' ', style);
                put_label(fb, x, y + h / 2, w, &card.identity, style);
            }
        }

        if selected && h >= 3 {
            let bg = fb.get(x + 1, y + 1).map(|c| c.style.bg).unwrap_or(BOARD_BG);
            let style = CellStyle::new(Rgb::new(250, 210, 60), bg).bold();
            draw_box(fb, x, y, w, h, style, BoxChars::HEAVY);
        } else if selected {
            let style = CellStyle::new(Rgb::new(250, 210, 60), BOARD_BG).bold();
            fb.put_char(x, y, '▶', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        geo: &BoardGeometry,
    ) {
        let panel_x = geo.start_x.saturating_add(geo.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            self.draw_status_line(fb, snap, viewport, geo);
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = geo.start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format_elapsed(snap.elapsed_seconds), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let matched = (snap.matched_count() / 2) as u32;
        let total = (snap.cards.len() / 2) as u32;
        fb.put_u32(panel_x, y, matched, value);
        let slash_x = panel_x + digits(matched);
        fb.put_char(slash_x, y, '/', value);
        fb.put_u32(slash_x + 1, y, total, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        if snap.won {
            fb.put_u32(panel_x, y, snap.score, value);
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
        y = y.saturating_add(2);

        for help in ["arrows move", "space flip", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    /// Compact single-line stats under the board, for narrow terminals.
    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        geo: &BoardGeometry,
    ) {
        let y = geo.start_y.saturating_add(geo.frame_h);
        if y >= viewport.height {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let line = format!(
            "MOVES {}  TIME {}  PAIRS {}/{}",
            snap.moves,
            format_elapsed(snap.elapsed_seconds),
            snap.matched_count() / 2,
            snap.cards.len() / 2
        );
        fb.put_str(geo.start_x, y, &line, style);
    }

    fn draw_won_popup(&self, fb: &mut FrameBuffer, geo: &BoardGeometry, score: u32) {
        let mut score_line = String::from("You won! - Score: ");
        score_line.push_str(&score.to_string());
        let lines = ["Congratulations!", score_line.as_str(), "Enter: play again"];

        let text_w = lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let w = text_w + 4;
        let h = lines.len() as u16 + 2;
        let x = geo.start_x.saturating_add(geo.frame_w.saturating_sub(w) / 2);
        let y = geo.start_y.saturating_add(geo.frame_h.saturating_sub(h) / 2);

        let body = CellStyle::new(Rgb::new(255, 255, 255), POPUP_BG).bold();
        fb.fill_rect(x, y, w, h, ' ', body);
        draw_box(fb, x, y, w, h, body, BoxChars::HEAVY);
        for (i, line) in lines.iter().enumerate() {
            let lx = x + (w - line.chars().count() as u16) / 2;
            fb.put_str(lx, y + 1 + i as u16, line, body);
        }
    }
}

struct BoxChars {
    tl: char,
    tr: char,
    bl: char,
    br: char,
    h: char,
    v: char,
}

impl BoxChars {
    const LIGHT: BoxChars = BoxChars {
        tl: '┌',
        tr: '┐',
        bl: '└',
        br: '┘',
        h: '─',
        v: '│',
    };
    const HEAVY: BoxChars = BoxChars {
        tl: '┏',
        tr: '┓',
        bl: '┗',
        br: '┛',
        h: '━',
        v: '┃',
    };
}

fn draw_box(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: CellStyle,
    chars: BoxChars,
) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, chars.tl, style);
    fb.put_char(x + w - 1, y, chars.tr, style);
    fb.put_char(x, y + h - 1, chars.bl, style);
    fb.put_char(x + w - 1, y + h - 1, chars.br, style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, chars.h, style);
        fb.put_char(x + dx, y + h - 1, chars.h, style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, chars.v, style);
        fb.put_char(x + w - 1, y + dy, chars.v, style);
    }
}

/// Center `text` on row `y` of a tile, leaving one column of margin.
fn put_label(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str, style: CellStyle) {
    let room = w.saturating_sub(2) as usize;
    let shown: String = text.chars().take(room).collect();
    let len = shown.chars().count() as u16;
    let lx = x + (w - len) / 2;
    fb.put_str(lx, y, &shown, style);
}

fn digits(v: u32) -> u16 {
    let mut n = v;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap_with(faces: &[(&str, CardFace)], columns: u16, rows: u16) -> GameSnapshot {
        GameSnapshot {
            cards: faces
                .iter()
                .map(|(id, face)| CardSnapshot {
                    identity: id.to_string(),
                    face: *face,
                })
                .collect(),
            columns,
            rows,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_label_is_centered_and_truncated() {
        let mut fb = FrameBuffer::new(8, 1);
        put_label(&mut fb, 0, 0, 8, "JavaScript", CellStyle::default());
        assert_eq!(fb.row_text(0), " JavaSc ");

        let mut fb = FrameBuffer::new(8, 1);
        put_label(&mut fb, 0, 0, 8, "Go", CellStyle::default());
        assert_eq!(fb.row_text(0), "   Go   ");
    }

    #[test]
    fn test_tiles_shrink_to_fit_narrow_viewport() {
        let snap = snap_with(&[("A", CardFace::Down); 12], 6, 2);
        let view = GameView::default();
        let geo = view.geometry(&snap, Viewport::new(50, 20));
        assert!(geo.frame_w <= 50);
        assert!(geo.tile_w >= MIN_TILE_W);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(1024), 4);
    }

    #[test]
    fn test_cursor_draws_heavy_box() {
        let snap = snap_with(&[("A", CardFace::Down), ("A", CardFace::Down)], 2, 1);
        let view = GameView::default();
        let vp = Viewport::new(40, 10);
        let ui = UiOverlay {
            cursor: Some(1),
            banner: None,
        };
        let fb = view.render(&snap, &ui, vp);
        let geo = view.geometry(&snap, vp);

        let (x1, y1) = geo.tile_origin(1);
        assert_eq!(fb.get(x1, y1).unwrap().ch, '┏');
        let (x0, y0) = geo.tile_origin(0);
        assert_eq!(fb.get(x0, y0).unwrap().ch, '▒');
    }
}
