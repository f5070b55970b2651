//! Framebuffer and style types for terminal rendering.
//!
//! Two coordinate flavours: the `u16` methods address screen cells directly,
//! the `*_at` methods take signed positions and silently clip, which is what
//! field-space drawing needs when a dragged letter hangs off the screen.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        self.set_at(x as i32, y as i32, cell);
    }

    pub fn set_at(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char_at(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set_at(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        self.put_str_at(x as i32, y as i32, s, style);
    }

    /// Write `s` starting at `(x, y)`; characters off either side are dropped.
    pub fn put_str_at(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= self.width as i32 {
                break;
            }
            self.put_char_at(cx, y, ch, style);
        }
    }

    /// Like [`put_str_at`](Self::put_str_at) but never writes past `max_chars`.
    pub fn put_str_clipped_at(&mut self, x: i32, y: i32, s: &str, max_chars: usize, style: CellStyle) {
        for (i, ch) in s.chars().take(max_chars).enumerate() {
            self.put_char_at(x + i as i32, y, ch, style);
        }
    }

    /// Write `v` in decimal without allocating. Returns the columns used.
    pub fn put_i32_at(&mut self, x: i32, y: i32, v: i32, style: CellStyle) -> i32 {
        let mut buf = [0u8; 12];
        let s = format_i32(v, &mut buf);
        self.put_str_at(x, y, s, style);
        s.len() as i32
    }

    pub fn fill_rect_at(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                self.put_char_at(x + dx, y + dy, ch, style);
            }
        }
    }

    /// Single-line box outline covering `w x h` cells.
    pub fn draw_border_at(&mut self, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (r, b) = (x + w - 1, y + h - 1);

        self.put_char_at(x, y, '┌', style);
        self.put_char_at(r, y, '┐', style);
        self.put_char_at(x, b, '└', style);
        self.put_char_at(r, b, '┘', style);
        for cx in x + 1..r {
            self.put_char_at(cx, y, '─', style);
            self.put_char_at(cx, b, '─', style);
        }
        for cy in y + 1..b {
            self.put_char_at(x, cy, '│', style);
            self.put_char_at(r, cy, '│', style);
        }
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

/// Format without allocating; `buf` must hold 11 bytes plus sign.
fn format_i32(v: i32, buf: &mut [u8; 12]) -> &str {
    let mut n = (v as i64).unsigned_abs();
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    if v < 0 {
        i -= 1;
        buf[i] = b'-';
    }
    std::str::from_utf8(&buf[i..]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_i32_handles_sign_and_extremes() {
        let mut fb = FrameBuffer::new(16, 3);
        let style = CellStyle::default();
        assert_eq!(fb.put_i32_at(0, 0, -25, style), 3);
        assert_eq!(fb.put_i32_at(0, 1, 0, style), 1);
        assert_eq!(fb.put_i32_at(0, 2, i32::MIN, style), 11);
        assert!(fb.row_text(0).starts_with("-25 "));
        assert!(fb.row_text(1).starts_with("0 "));
        assert!(fb.row_text(2).starts_with("-2147483648"));
    }

    #[test]
    fn signed_writes_clip() {
        let mut fb = FrameBuffer::new(4, 1);
        let style = CellStyle::default();
        fb.put_str_at(-2, 0, "abcdef", style);
        assert_eq!(fb.row_text(0), "cdef");
        fb.put_str_at(0, -1, "zz", style);
        fb.put_str_at(0, 1, "zz", style);
        assert_eq!(fb.row_text(0), "cdef");
    }

    #[test]
    fn clipped_write_respects_limit() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str_clipped_at(0, 0, "abcdef", 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "abc   ");
    }

    #[test]
    fn border_corners() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.draw_border_at(0, 0, 5, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌───┐");
        assert_eq!(fb.row_text(1), "│   │");
        assert_eq!(fb.row_text(2), "└───┘");
    }

    #[test]
    fn resize_keeps_cell_count_consistent() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(5, 2);
        assert_eq!(fb.cells().len(), 10);
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 2);
    }
}
