//! 3x5 bitmap digits

use super::pixels::{PixelBuf, Rgb};

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;

#[rustfmt::skip]
const GLYPHS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

/// Draw one digit with its top-left at (x, y), each glyph pixel `scale` wide
pub fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, digit: u8, scale: i32, fg: Rgb) {
    let glyph = &GLYPHS[digit as usize % 10];
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if glyph[(row * GLYPH_W + col) as usize] == 1 {
                buf.fill_rect(x + col * scale, y + row * scale, scale, scale, fg);
            }
        }
    }
}

/// Draw `n` left-aligned at (x, y) with a drop shadow; returns the drawn width
pub fn draw_number(
    buf: &mut PixelBuf,
    x: i32,
    y: i32,
    n: u32,
    scale: i32,
    fg: Rgb,
    shadow: Rgb,
) -> i32 {
    let advance = (GLYPH_W + 1) * scale;
    let shadow_offset = scale / 2 + 1;
    let text = n.to_string();
    for (color, offset) in [(shadow, shadow_offset), (fg, 0)] {
        for (i, ch) in text.bytes().enumerate() {
            let dx = x + i as i32 * advance + offset;
            draw_digit(buf, dx, y + offset, ch - b'0', scale, color);
        }
    }
    text.len() as i32 * advance - scale
}
