//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Commentary, Debrief, GameStatus, Mood};

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

/// Session state shown around the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView<'a> {
    pub commentary: Option<&'a Commentary>,
    pub debrief: Option<&'a Debrief>,
    /// Selected starting interval, shown on the title screen.
    pub initial_speed_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(12, 12, 18);
const PANEL_BG: Rgb = Rgb::new(5, 5, 5);
const NEON_GREEN: Rgb = Rgb::new(57, 255, 20);
const NEON_BLUE: Rgb = Rgb::new(0, 200, 255);
const NEON_PINK: Rgb = Rgb::new(255, 16, 240);
const DEAD_RED: Rgb = Rgb::new(200, 40, 40);

/// A lightweight terminal renderer for the Snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size (board plus border) in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.board.width as u16 * self.cell_w + 2,
            snap.board.height as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, &HudView::default(), viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        // One extra row under the frame for the commentary bubble.
        let total_h = frame_h + 1;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::fg_on(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::fg_on(NEON_BLUE, PANEL_BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.board.height as u16 {
            for x in 0..snap.board.width as u16 {
                self.draw_empty_cell(fb, start_x, start_y, x, y);
            }
        }

        // Food.
        let food_style = CellStyle::fg_on(NEON_PINK, BOARD_BG).bold();
        if snap.board.contains(snap.food) && !snap.board_cleared {
            self.fill_cell_rect(
                fb,
                start_x,
                start_y,
                snap.food.x as u16,
                snap.food.y as u16,
                '●',
                food_style,
            );
        }

        // Snake, tail first so the head is drawn on top.
        let dead = snap.status == GameStatus::GameOver && !snap.board_cleared;
        let body_fg = if dead { DEAD_RED } else { Rgb::new(40, 190, 20) };
        for (i, seg) in snap.snake.iter().enumerate().rev() {
            if !snap.board.contains(*seg) {
                continue;
            }
            let (ch, style) = if i == 0 {
                let fg = if dead { DEAD_RED } else { NEON_GREEN };
                ('█', CellStyle::fg_on(fg, BOARD_BG).bold())
            } else {
                ('▓', CellStyle::fg_on(body_fg, BOARD_BG))
            };
            self.fill_cell_rect(fb, start_x, start_y, seg.x as u16, seg.y as u16, ch, style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(line) = hud.commentary {
            self.draw_commentary(fb, line, viewport, start_y + frame_h);
        }

        match snap.status {
            GameStatus::Idle => self.draw_title(fb, snap, hud, start_x, start_y, frame_w, frame_h),
            GameStatus::Paused => self.draw_overlay_lines(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["PAUSED", "", "P to resume"],
            ),
            GameStatus::GameOver => {
                self.draw_game_over(fb, snap, hud, start_x, start_y, frame_w, frame_h)
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::fg_on(Rgb::new(45, 45, 60), BOARD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::fg_on(NEON_GREEN, PANEL_BG).bold();
        let value = CellStyle::fg_on(Rgb::new(230, 230, 230), PANEL_BG).bold();
        let dim = CellStyle::fg_on(Rgb::new(140, 140, 140), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32_padded(panel_x, y, snap.score, 3, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, CellStyle::fg_on(NEON_PINK, PANEL_BG));
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.ticks_per_second(), CellStyle::fg_on(NEON_BLUE, PANEL_BG));
        fb.put_str(end + 1, y, "TPS", dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WASD/arrows", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "P pause  Q quit", dim);
    }

    fn draw_commentary(&self, fb: &mut FrameBuffer, line: &Commentary, viewport: Viewport, y: u16) {
        if y >= viewport.height {
            return;
        }
        let fg = match line.mood {
            Mood::Excited => NEON_GREEN,
            Mood::Sarcastic => NEON_PINK,
            Mood::Neutral => NEON_BLUE,
        };
        let style = CellStyle::fg_on(fg, PANEL_BG).bold();

        let max = viewport.width.saturating_sub(4) as usize;
        let text_len = line.text.chars().count();
        let shown = text_len.min(max.saturating_sub(2));
        let w = (shown + 2) as u16;
        let x = viewport.width.saturating_sub(w) / 2;

        let mut cx = fb.put_str(x, y, "\"", style);
        for ch in line.text.chars().take(shown) {
            fb.put_char(cx, y, ch, style);
            cx = cx.saturating_add(1);
        }
        fb.put_str(cx, y, "\"", style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_title(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(3);
        let title = CellStyle::fg_on(NEON_GREEN, PANEL_BG).bold();
        let text = CellStyle::fg_on(Rgb::new(230, 230, 230), PANEL_BG);
        let accent = CellStyle::fg_on(NEON_BLUE, PANEL_BG).bold();

        fb.put_str_centered(start_x, frame_w, mid_y, " S N A K E ", title);
        fb.put_str_centered(start_x, frame_w, mid_y + 2, " ENTER to start ", text);

        // " SPEED < 150ms > "
        let label = " SPEED < ";
        let w = label.len() as u16 + digits(hud.initial_speed_ms) + 5;
        let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
        let x = fb.put_str(x, mid_y + 4, label, text);
        let x = fb.put_u32(x, mid_y + 4, hud.initial_speed_ms, accent);
        fb.put_str(x, mid_y + 4, "ms > ", text);

        fb.put_str_centered(start_x, frame_w, mid_y + 5, " +/- to change ", text.dim());

        if snap.high_score > 0 {
            let label = " HIGH SCORE ";
            let w = label.len() as u16 + digits(snap.high_score) + 1;
            let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
            let x = fb.put_str(x, mid_y + 7, label, text);
            let x = fb.put_u32(x, mid_y + 7, snap.high_score, CellStyle::fg_on(NEON_PINK, PANEL_BG));
            fb.put_str(x, mid_y + 7, " ", text);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(3);
        let headline = if snap.board_cleared {
            " BOARD CLEARED "
        } else {
            " GAME OVER "
        };
        let head_style = CellStyle::fg_on(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let text = CellStyle::fg_on(Rgb::new(230, 230, 230), PANEL_BG);

        fb.put_str_centered(start_x, frame_w, mid_y, headline, head_style);

        let label = " SCORE ";
        let w = label.len() as u16 + digits(snap.score) + 1;
        let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
        let x = fb.put_str(x, mid_y + 2, label, text);
        let x = fb.put_u32(x, mid_y + 2, snap.score, head_style);
        fb.put_str(x, mid_y + 2, " ", text);

        if let Some(report) = hud.debrief {
            let rating = CellStyle::fg_on(NEON_PINK, PANEL_BG).bold();
            let inner = frame_w.saturating_sub(4) as usize;
            let shown: String = report.score_rating.chars().take(inner).collect();
            fb.put_str_centered(start_x, frame_w, mid_y + 3, &shown, rating);
            if let Some(tip) = report.tips.first() {
                let shown: String = tip.chars().take(inner).collect();
                fb.put_str_centered(start_x, frame_w, mid_y + 4, &shown, text.dim());
            }
        }

        fb.put_str_centered(start_x, frame_w, mid_y + 6, " ENTER retry  ESC exit ", text);
    }

    fn draw_overlay_lines(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::fg_on(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            fb.put_str_centered(start_x, frame_w, top + i as u16, line, style);
        }
    }
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

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(150), 3);
        assert_eq!(digits(1000), 4);
    }

    #[test]
    fn test_frame_size_for_standard_board() {
        let snap = GameSnapshot::default();
        assert_eq!(GameView::default().frame_size(&snap), (52, 27));
    }
}
