//! Drawing a simulation snapshot into a pixel buffer

use glam::{IVec2, Vec2};

use super::digits::{GLYPH_H, draw_number};
use super::pixels::{PixelBuf, Rgb};
use crate::sim::{Rect, Snapshot};

pub const LETTERBOX: Rgb = Rgb(0, 0, 0);
pub const SKY: Rgb = Rgb(135, 206, 250);
pub const PIPE: Rgb = Rgb(0, 128, 0);
pub const GROUND: Rgb = Rgb(139, 69, 19);
pub const BIRD: Rgb = Rgb(255, 255, 0);
pub const GAME_OVER: Rgb = Rgb(255, 0, 0);
pub const SCORE: Rgb = Rgb(255, 255, 255);
pub const SHADOW: Rgb = Rgb(30, 30, 30);

/// Game-over panel size in field units
const PANEL_SIZE: IVec2 = IVec2::new(200, 60);
/// Score position and digit height in field units
const SCORE_POS: IVec2 = IVec2::new(20, 20);
const SCORE_HEIGHT: f32 = 24.0;

/// Uniform field-to-buffer mapping, letterboxed and centered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
    /// Field area in buffer pixels
    pub area: Rect,
}

impl Viewport {
    pub fn fit(field: IVec2, buf_w: usize, buf_h: usize) -> Self {
        let buf = Vec2::new(buf_w as f32, buf_h as f32);
        let field_f = field.as_vec2().max(Vec2::ONE);
        let scale = (buf.x / field_f.x).min(buf.y / field_f.y);
        let offset = ((buf - field_f * scale) / 2.0).round();
        let min = offset.as_ivec2();
        let max = (offset + field_f * scale).round().as_ivec2();
        Self {
            scale,
            offset,
            area: Rect {
                pos: min,
                size: max - min,
            },
        }
    }

    /// Field point to buffer pixel
    #[inline]
    pub fn to_buf(&self, p: IVec2) -> IVec2 {
        (p.as_vec2() * self.scale + self.offset).round().as_ivec2()
    }

    /// Field rectangle to buffer rectangle, clipped to the field area.
    /// Anything with positive size stays at least one pixel big.
    pub fn map_rect(&self, r: &Rect) -> Option<Rect> {
        if r.w() <= 0 || r.h() <= 0 {
            return None;
        }
        let min = self.to_buf(r.pos);
        let max = self.to_buf(r.max()).max(min + IVec2::ONE);
        let min = min.max(self.area.pos);
        let max = max.min(self.area.max());
        if min.cmplt(max).all() {
            Some(Rect {
                pos: min,
                size: max - min,
            })
        } else {
            None
        }
    }
}

fn fill(buf: &mut PixelBuf, view: &Viewport, r: &Rect, c: Rgb) {
    if let Some(px) = view.map_rect(r) {
        buf.fill_rect(px.x(), px.y(), px.w(), px.h(), c);
    }
}

/// Paint one frame
pub fn draw(buf: &mut PixelBuf, snap: &Snapshot) {
    let view = Viewport::fit(snap.field, buf.width(), buf.height());
    let field = Rect {
        pos: IVec2::ZERO,
        size: snap.field,
    };

    buf.clear(LETTERBOX);
    fill(buf, &view, &field, SKY);

    for pipe in &snap.pipes {
        fill(buf, &view, &pipe.top, PIPE);
        fill(buf, &view, &pipe.bottom, PIPE);
    }

    let ground = Rect::new(0, snap.floor_y, snap.field.x, snap.field.y - snap.floor_y);
    fill(buf, &view, &ground, GROUND);
    fill(buf, &view, &snap.bird, BIRD);

    if snap.over {
        let pos = snap.field / 2 - PANEL_SIZE / 2;
        let panel = Rect {
            pos,
            size: PANEL_SIZE,
        };
        fill(buf, &view, &panel, GAME_OVER);
    }

    let digit_scale = ((SCORE_HEIGHT * view.scale) / GLYPH_H as f32).round().max(1.0) as i32;
    let at = view.to_buf(SCORE_POS);
    draw_number(buf, at.x, at.y, snap.score, digit_scale, SCORE, SHADOW);
}
