//! Read-only view of the world for renderers
//!
//! A renderer only ever sees a [`Snapshot`], never the [`GameState`] itself.

use glam::IVec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::GameState;

/// Both segments of one live pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipeRects {
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Logical field size
    pub field: IVec2,
    /// Top of the floor band
    pub floor_y: i32,
    pub bird: Rect,
    /// Live pipes in slot order
    pub pipes: Vec<PipeRects>,
    pub score: u32,
    pub over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        Self {
            field: IVec2::new(tuning.field_width, tuning.field_height),
            floor_y: tuning.floor_y(),
            bird: state.bird.rect,
            pipes: state
                .pipes
                .live(tuning.offscreen_limit())
                .map(|(_, p)| PipeRects {
                    top: p.top,
                    bottom: p.bottom,
                })
                .collect(),
            score: state.score,
            over: state.is_over(),
        }
    }
}

impl GameState {
    /// Capture a [`Snapshot`] of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
