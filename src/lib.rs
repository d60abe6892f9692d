//! Flappy Rect - a rectangle-only Flappy Bird
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (physics, pipe pool, collisions, run state)
//! - `renderer`: Terminal half-block renderer for simulation snapshots
//! - `platform`: Clock and input translation for the terminal front end
//! - `settings`: Front-end preferences loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (pixels)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Bird hitbox
    pub const BIRD_WIDTH: i32 = 40;
    pub const BIRD_HEIGHT: i32 = 30;
    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set (not added) on jump
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: i32 = 60;
    pub const PIPE_GAP: i32 = 170;
    /// Pixels per tick, independent of elapsed wall time
    pub const PIPE_SPEED: i32 = 3;
    /// Number of slots in the pipe ring buffer
    pub const PIPE_CAPACITY: usize = 10;
    /// Wall-clock spawn interval
    pub const PIPE_SPAWN_MS: u64 = 1500;
    /// Minimum height of either pipe segment
    pub const GAP_MARGIN: i32 = 50;
    /// Height of the floor band at the bottom of the field
    pub const FLOOR_MARGIN: i32 = 20;
    /// Pipes farther than this past the right edge are not updated
    pub const OFFSCREEN_MARGIN: i32 = 100;

    /// Front-end frame pacing (~60 Hz)
    pub const TICK_MS: u64 = 16;
}
