//! SnowView: the snow particle menu screen.

use crate::core::Snowfall;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::Point;

const NIGHT: Rgb = Rgb::new(8, 10, 28);
const SNOW: Rgb = Rgb::new(240, 245, 255);

/// Draw every flake with `origin` as the screen position of snow cell (0, 0).
pub fn draw_flakes(fb: &mut FrameBuffer, snow: &Snowfall, origin: Point, bg: Rgb) {
    let near = CellStyle::new(SNOW, bg).bold();
    let far = CellStyle::new(SNOW, bg).dim();
    for flake in snow.flakes() {
        let (ch, style) = if flake.is_fast() { ('*', near) } else { ('·', far) };
        fb.put_char_at(origin.x + flake.x, origin.y + flake.row(), ch, style);
    }
}

/// Full-screen snowfall with a title card.
#[derive(Debug, Default)]
pub struct SnowView;

impl SnowView {
    pub fn render_into(&self, snow: &Snowfall, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(SNOW, NIGHT).into_cell(' '));
        draw_flakes(fb, snow, Point::default(), NIGHT);

        let mid = viewport.height / 2;
        let title = CellStyle::new(SNOW, NIGHT).bold();
        let hint = CellStyle::new(SNOW, NIGHT).dim();
        put_centered(fb, viewport, mid.saturating_sub(1), "Snow Menu", title);
        put_centered(fb, viewport, mid.saturating_add(1), "q to quit", hint);
    }

    pub fn render(&self, snow: &Snowfall, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snow, viewport, &mut fb);
        fb
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    fb.put_str(viewport.width.saturating_sub(w) / 2, y, text, style);
}
