//! Axis-aligned integer rectangles
//!
//! Screen space: x grows right, y grows down, `pos` is the top-left corner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with non-negative size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn w(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.size.y
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.pos + self.size
    }

    /// Same rectangle moved horizontally to `x`
    #[inline]
    pub fn with_x(self, x: i32) -> Self {
        Self {
            pos: IVec2::new(x, self.pos.y),
            ..self
        }
    }

    /// Same rectangle moved vertically to `y`
    #[inline]
    pub fn with_y(self, y: i32) -> Self {
        Self {
            pos: IVec2::new(self.pos.x, y),
            ..self
        }
    }
}
