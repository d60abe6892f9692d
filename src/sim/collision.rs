//! Collision detection
//!
//! Everything in the game is an axis-aligned box, so a single overlap test
//! covers pipes; floor and ceiling are plain coordinate comparisons done by
//! the bird itself.

use super::rect::Rect;
use super::state::Pipe;

/// True if the two rectangles overlap with positive area.
///
/// Edges that merely touch (one rectangle's right edge equal to the other's
/// left edge, and so on) do not count.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.pos.cmplt(b.max()).all() && b.pos.cmplt(a.max()).all()
}

/// True if `bird` overlaps either segment of `pipe`
pub fn hits_pipe(bird: &Rect, pipe: &Pipe) -> bool {
    intersects(bird, &pipe.top) || intersects(bird, &pipe.bottom)
}
