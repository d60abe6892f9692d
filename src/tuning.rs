//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults come from [`crate::consts`]; a settings file may override any
//! subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a [`Tuning`] cannot drive a simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("jump impulse must point upward (negative), got {0}")]
    ImpulseNotUpward(f32),

    #[error("gap of {gap} with margin {margin} leaves no room in a field {height} high")]
    GapTooLarge { gap: i32, margin: i32, height: i32 },

    #[error("floor margin {floor_margin} must be smaller than field height {height}")]
    FloorTooHigh { floor_margin: i32, height: i32 },

    #[error("off-screen margin {margin} must be smaller than field width {width}")]
    OffscreenMarginTooWide { margin: i32, width: i32 },
}

/// Gameplay constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: i32,
    pub field_height: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub pipe_speed: i32,
    pub spawn_interval_ms: u64,
    pub gap_margin: i32,
    pub floor_margin: i32,
    pub offscreen_margin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval_ms: PIPE_SPAWN_MS,
            gap_margin: GAP_MARGIN,
            floor_margin: FLOOR_MARGIN,
            offscreen_margin: OFFSCREEN_MARGIN,
        }
    }
}

impl Tuning {
    /// Half the gap height (integer division, as the pipe rectangles use it)
    #[inline]
    pub fn half_gap(&self) -> i32 {
        self.pipe_gap / 2
    }

    /// Lowest allowed gap center (inclusive)
    #[inline]
    pub fn min_gap_center(&self) -> i32 {
        self.half_gap() + self.gap_margin
    }

    /// Highest allowed gap center (exclusive)
    #[inline]
    pub fn max_gap_center(&self) -> i32 {
        self.field_height - self.half_gap() - self.gap_margin
    }

    /// Y coordinate the bird's bottom edge must not exceed
    #[inline]
    pub fn floor_y(&self) -> i32 {
        self.field_height - self.floor_margin
    }

    /// X past which a pipe is considered parked and is not updated
    #[inline]
    pub fn offscreen_limit(&self) -> i32 {
        self.field_width + self.offscreen_margin
    }

    /// X at which reset parks every pool slot
    #[inline]
    pub fn parked_x(&self) -> i32 {
        self.field_width * 2
    }

    /// Bird spawn position (top-left of its hitbox)
    pub fn bird_start(&self) -> (f32, f32) {
        ((self.field_width / 4) as f32, (self.field_height / 2) as f32)
    }

    /// Check that these values describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive: [(&'static str, f64); 8] = [
            ("field_width", self.field_width as f64),
            ("field_height", self.field_height as f64),
            ("bird_width", self.bird_width as f64),
            ("bird_height", self.bird_height as f64),
            ("gravity", self.gravity as f64),
            ("pipe_width", self.pipe_width as f64),
            ("pipe_gap", self.pipe_gap as f64),
            ("pipe_speed", self.pipe_speed as f64),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { name, value });
            }
        }
        if self.spawn_interval_ms == 0 {
            return Err(TuningError::NotPositive {
                name: "spawn_interval_ms",
                value: 0.0,
            });
        }
        if self.jump_impulse >= 0.0 {
            return Err(TuningError::ImpulseNotUpward(self.jump_impulse));
        }
        if self.gap_margin < 0 || self.min_gap_center() >= self.max_gap_center() {
            return Err(TuningError::GapTooLarge {
                gap: self.pipe_gap,
                margin: self.gap_margin,
                height: self.field_height,
            });
        }
        if self.floor_margin < 0 || self.floor_margin >= self.field_height {
            return Err(TuningError::FloorTooHigh {
                floor_margin: self.floor_margin,
                height: self.field_height,
            });
        }
        // Parked slots sit at 2 * width and must stay past the update limit.
        if self.offscreen_margin < 0 || self.offscreen_margin >= self.field_width {
            return Err(TuningError::OffscreenMarginTooWide {
                margin: self.offscreen_margin,
                width: self.field_width,
            });
        }
        Ok(())
    }
}
