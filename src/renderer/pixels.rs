//! Pixel buffer presented with half-block glyphs
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

/// Row-major pixel grid, twice as tall as the terminal it is drawn into
#[derive(Debug, Clone)]
pub struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, fill: Rgb) -> Self {
        Self {
            w,
            h,
            px: vec![fill; w * h],
        }
    }

    /// Sized for a terminal of `cols` x `rows` cells
    pub fn for_terminal(cols: u16, rows: u16, fill: Rgb) -> Self {
        Self::new(cols as usize, rows as usize * 2, fill)
    }

    pub fn resize(&mut self, w: usize, h: usize, fill: Rgb) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, fill);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn clear(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    /// Pixel at (x, y); `None` outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.px[i])
    }

    #[cfg(test)]
    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.px[i] = c;
        }
    }

    /// Fill a rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.w as i32);
        let y1 = (y + h).min(self.h as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for py in y0..y1 {
            let row = py as usize * self.w;
            self.px[row + x0 as usize..row + x1 as usize].fill(c);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            Some(y as usize * self.w + x as usize)
        } else {
            None
        }
    }

    /// Write the whole buffer to `out`, changing colors only when needed
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..rows {
            if row > 0 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
            for col in 0..self.w {
                let upper = self.px[row * 2 * self.w + col];
                let lower = self.px[(row * 2 + 1) * self.w + col];

                if bg != Some(lower) {
                    queue!(out, style::SetBackgroundColor(lower.into()))?;
                    bg = Some(lower);
                }
                if upper == lower {
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(upper) {
                        queue!(out, style::SetForegroundColor(upper.into()))?;
                        fg = Some(upper);
                    }
                    queue!(out, style::Print('\u{2580}'))?;
                }
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb(0, 0, 0);
    const RED: Rgb = Rgb(255, 0, 0);

    #[test]
    fn test_terminal_sizing() {
        let buf = PixelBuf::for_terminal(80, 24, BLACK);
        assert_eq!(buf.width(), 80);
        assert_eq!(buf.height(), 48);
    }

    #[test]
    fn test_set_get_clips() {
        let mut buf = PixelBuf::new(4, 4, BLACK);
        buf.set(1, 2, RED);
        buf.set(-1, 0, RED);
        buf.set(4, 0, RED);
        assert_eq!(buf.get(1, 2), Some(RED));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, 0), Some(BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = PixelBuf::new(4, 4, BLACK);
        buf.fill_rect(-2, 2, 4, 10, RED);
        assert_eq!(buf.get(0, 2), Some(RED));
        assert_eq!(buf.get(1, 3), Some(RED));
        assert_eq!(buf.get(2, 2), Some(BLACK));
        assert_eq!(buf.get(0, 1), Some(BLACK));

        // Entirely off-buffer
        buf.fill_rect(10, 10, 3, 3, RED);
        buf.fill_rect(10, 3, 3, 3, RED);
        buf.fill_rect(-10, 0, 3, 3, RED);
        assert_eq!(buf.get(0, 0), Some(BLACK));
    }

    #[test]
    fn test_present_emits_half_blocks() {
        let mut buf = PixelBuf::new(2, 2, BLACK);
        buf.set(0, 0, RED);
        let mut out = Vec::new();
        buf.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\u{2580}').count(), 1);
    }

    #[test]
    fn test_present_empty_buffer() {
        let buf = PixelBuf::new(0, 0, BLACK);
        let mut out = Vec::new();
        buf.present(&mut out).unwrap();
    }
}
