//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PegId, Rank, MAX_DISKS};

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

/// Widest disk (rank 9) in terminal columns.
const MAX_DISK_W: u16 = 2 * (MAX_DISKS as u16 - 1) + 3;

/// Column reserved per peg, with one space of slack either side.
const PEG_COL_W: u16 = MAX_DISK_W + 2;

/// Gap between peg columns.
const PEG_GAP: u16 = 2;

/// Rows of stacked disks plus one row of bare pole above them.
const STACK_H: u16 = MAX_DISKS as u16 + 1;

/// Full scene: header (2), stack, base, labels, message, help.
const SCENE_W: u16 = 3 * PEG_COL_W + 2 * PEG_GAP;
const SCENE_H: u16 = 2 + STACK_H + 1 + 1 + 2;

/// One color per disk rank, smallest first.
const DISK_COLORS: [Rgb; MAX_DISKS as usize] = [
    Rgb::new(220, 80, 80),
    Rgb::new(255, 165, 0),
    Rgb::new(240, 220, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(80, 220, 220),
    Rgb::new(80, 120, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(220, 120, 160),
    Rgb::new(160, 160, 220),
    Rgb::new(180, 180, 180),
];

/// A lightweight terminal renderer for the Hanoi scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only pay for a
    /// resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let start_x = viewport.width.saturating_sub(SCENE_W) / 2;
        let start_y = viewport.height.saturating_sub(SCENE_H) / 2;

        self.draw_header(fb, game, start_x, start_y);

        let stack_top = start_y + 2;
        let base_y = stack_top + STACK_H;
        for peg in PegId::ALL {
            self.draw_peg(fb, game, peg, start_x, stack_top, base_y);
        }

        self.draw_base(fb, start_x, base_y);
        self.draw_labels(fb, game, start_x, base_y + 1);
        self.draw_message(fb, game, start_x, base_y + 2);
        self.draw_help(fb, start_x, base_y + 3);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Terminal column of the given peg's pole.
    fn peg_center(&self, start_x: u16, peg: PegId) -> u16 {
        let col = start_x + (peg.index() as u16) * (PEG_COL_W + PEG_GAP);
        col + PEG_COL_W / 2
    }

    fn draw_header(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        fb.put_str(start_x, y, "TOWER OF HANOI", label);

        let stats = format!(
            "DISKS {:>2}   MOVES {:>4}   BEST {:>4}",
            game.disk_count(),
            game.move_count(),
            game.min_moves()
        );
        fb.put_str(start_x, y + 1, &stats, value);

        if game.is_solving() {
            let style = CellStyle {
                fg: Rgb::new(80, 220, 220),
                bold: true,
                ..CellStyle::default()
            };
            let text = "SOLVING";
            fb.put_str(start_x + SCENE_W - text.len() as u16, y + 1, text, style);
        }
    }

    fn draw_peg(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        peg: PegId,
        start_x: u16,
        stack_top: u16,
        base_y: u16,
    ) {
        let cx = self.peg_center(start_x, peg);
        let pole = CellStyle {
            fg: Rgb::new(150, 120, 90),
            dim: true,
            ..CellStyle::default()
        };

        for y in stack_top..base_y {
            fb.put_char(cx, y, '|', pole);
        }

        let stack = game.puzzle().peg(peg);
        let selected_top = game
            .selected()
            .is_some_and(|sel| sel.peg == peg && !stack.is_empty());

        for (slot, &rank) in stack.iter().enumerate() {
            let y = base_y - 1 - slot as u16;
            let is_top = slot + 1 == stack.len();
            self.draw_disk(fb, cx, y, rank, selected_top && is_top);
        }
    }

    fn draw_disk(&self, fb: &mut FrameBuffer, cx: u16, y: u16, rank: Rank, selected: bool) {
        let half = rank as u16 + 1;
        let style = CellStyle {
            fg: DISK_COLORS[rank as usize],
            bold: selected,
            ..CellStyle::default()
        };
        let ch = if selected { '▓' } else { '█' };
        fb.fill_rect(cx - half, y, 2 * half + 1, 1, ch, style);
    }

    fn draw_base(&self, fb: &mut FrameBuffer, start_x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(150, 120, 90),
            ..CellStyle::default()
        };
        for peg in PegId::ALL {
            let col = start_x + (peg.index() as u16) * (PEG_COL_W + PEG_GAP);
            for dx in 0..PEG_COL_W {
                fb.put_char(col + dx, y, '=', style);
            }
        }
    }

    fn draw_labels(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, y: u16) {
        for peg in PegId::ALL {
            let selected = game.selected().is_some_and(|sel| sel.peg == peg);
            let style = CellStyle {
                bold: selected,
                dim: !selected,
                ..CellStyle::default()
            };
            let cx = self.peg_center(start_x, peg);
            let label = ['[', char::from(b'1' + peg.index() as u8), ']'];
            for (i, ch) in label.into_iter().enumerate() {
                fb.put_char(cx - 1 + i as u16, y, ch, style);
            }
        }
    }

    fn draw_message(&self, fb: &mut FrameBuffer, game: &Game, start_x: u16, y: u16) {
        if !game.is_solved() {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(100, 220, 120),
            bold: true,
            ..CellStyle::default()
        };
        let text = "YOU WIN!";
        let x = start_x + (SCENE_W.saturating_sub(text.len() as u16)) / 2;
        fb.put_str(x, y, text, style);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, start_x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(
            start_x,
            y,
            "1-3 select peg   +/- disks   r restart   v solve   q quit",
            style,
        );
    }
}
