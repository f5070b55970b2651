//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{column_width, wrap_words, GameSnapshot, Letter, Snowfall};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::snow_view::draw_flakes;
use crate::types::{
    Point, SessionPhase, FIELD_HEIGHT, FIELD_WIDTH, WRAP_MAX_LINES, WRAP_WIDTH,
};

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

/// Where the play field sits inside the viewport.
///
/// The field is centered; on a viewport smaller than the field the origin is
/// pinned to the top-left corner and the rest is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Terminal cell showing field cell `(0, 0)`.
    pub origin: Point,
}

impl FieldLayout {
    pub fn centered(viewport: Viewport) -> Self {
        let x = (viewport.width as i32 - FIELD_WIDTH).max(0) / 2;
        let y = (viewport.height as i32 - FIELD_HEIGHT).max(0) / 2;
        Self {
            origin: Point::new(x, y),
        }
    }

    /// Field position -> terminal position
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x + self.origin.x, p.y + self.origin.y)
    }

    /// Terminal position -> field position
    pub fn to_field(&self, column: u16, row: u16) -> Point {
        Point::new(column as i32 - self.origin.x, row as i32 - self.origin.y)
    }
}

const SKY: Rgb = Rgb::new(12, 18, 40);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const INK: Rgb = Rgb::new(20, 20, 20);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const BIN_BLUE: Rgb = Rgb::new(30, 60, 200);
const RED: Rgb = Rgb::new(230, 50, 50);
const FROST: Rgb = Rgb::new(170, 190, 220);

/// Renders the welcome, playing, and game-over screens.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render one frame into an existing framebuffer.
    ///
    /// `snow` is drawn behind the welcome screen when given.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        snow: Option<&Snowfall>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(FROST, SKY).into_cell(' '));

        let layout = FieldLayout::centered(viewport);
        let frame = CellStyle::new(FROST, SKY).dim();
        fb.draw_border_at(
            layout.origin.x - 1,
            layout.origin.y - 1,
            FIELD_WIDTH + 2,
            FIELD_HEIGHT + 2,
            frame,
        );

        match snap.phase {
            SessionPhase::NotStarted => {
                if let Some(snow) = snow {
                    draw_flakes(fb, snow, layout.origin, SKY);
                }
                self.draw_welcome(fb, snap, layout);
            }
            SessionPhase::Active => self.draw_playing(fb, snap, layout),
            SessionPhase::Ended => self.draw_game_over(fb, snap, layout),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, snow: Option<&Snowfall>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, snow, viewport, &mut fb);
        fb
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: FieldLayout) {
        let title = CellStyle::new(GOLD, SKY).bold();
        let text = CellStyle::new(WHITE, SKY);

        centered_line(fb, layout, FIELD_HEIGHT / 3, "Santa's Letter Sorter", title);
        centered_line(fb, layout, FIELD_HEIGHT / 2, "Press SPACE to start", text);
        let high = format!("High Score: {}", snap.high_score);
        centered_line(fb, layout, 2 * FIELD_HEIGHT / 3, &high, text);
        centered_line(fb, layout, FIELD_HEIGHT - 2, "q to quit", text.dim());
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: FieldLayout) {
        let hud = CellStyle::new(WHITE, SKY).bold();
        let o = layout.origin;

        fb.put_str_at(o.x + 4, o.y + 1, "Score: ", hud);
        fb.put_i32_at(o.x + 11, o.y + 1, snap.score, hud);
        let time = format!("Time: {}s", snap.remaining_secs());
        fb.put_str_at(o.x + FIELD_WIDTH - 4 - time.len() as i32, o.y + 1, &time, hud);

        let bin = CellStyle::new(WHITE, BIN_BLUE).bold();
        for zone in &snap.zones {
            let r = zone.rect;
            let p = layout.to_screen(Point::new(r.x, r.y));
            fb.fill_rect_at(p.x, p.y, r.w, r.h, ' ', bin);
            fb.put_str_at(p.x + 2, p.y + r.h / 2, zone.category.label(), bin);
        }

        // Held letter last so it floats above the others.
        for letter in snap.letters.iter().filter(|l| !l.held) {
            self.draw_letter(fb, letter, layout);
        }
        if let Some(letter) = snap.held() {
            self.draw_letter(fb, letter, layout);
        }
    }

    fn draw_letter(&self, fb: &mut FrameBuffer, letter: &Letter, layout: FieldLayout) {
        let r = letter.rect();
        let p = layout.to_screen(Point::new(r.x, r.y));
        let paper = CellStyle::new(INK, WHITE);
        let edge = if letter.held {
            CellStyle::new(RED, WHITE).bold()
        } else {
            CellStyle::new(GOLD, WHITE)
        };

        fb.fill_rect_at(p.x, p.y, r.w, r.h, ' ', paper);
        fb.draw_border_at(p.x, p.y, r.w, r.h, edge);

        let lines = wrap_words(letter.text, WRAP_WIDTH, WRAP_MAX_LINES, column_width);
        let inner = (r.w - 4).max(0) as usize;
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_clipped_at(p.x + 2, p.y + 1 + i as i32, line, inner, paper);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: FieldLayout) {
        let mid = FIELD_HEIGHT / 2;
        let text = CellStyle::new(WHITE, SKY);

        centered_line(fb, layout, mid - 4, "GAME OVER", CellStyle::new(RED, SKY).bold());
        let final_score = format!("Final Score: {}", snap.score);
        centered_line(fb, layout, mid - 1, &final_score, text);
        let high = format!("High Score: {}", snap.high_score);
        centered_line(fb, layout, mid + 1, &high, text);
        centered_line(fb, layout, mid + 4, "Press SPACE to continue", text);
    }
}

fn centered_line(fb: &mut FrameBuffer, layout: FieldLayout, field_y: i32, text: &str, style: CellStyle) {
    let w = text.chars().count() as i32;
    let x = layout.origin.x + (FIELD_WIDTH - w).max(0) / 2;
    fb.put_str_at(x, layout.origin.y + field_y, text, style);
}
