//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of terminal,
//! timing and input concerns:
//! - Time arrives as an explicit millisecond reading
//! - Randomness comes from the world's own seeded RNG
//! - Renderers read a [`Snapshot`], never the state itself

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{hits_pipe, intersects};
pub use rect::Rect;
pub use snapshot::{PipeRects, Snapshot};
pub use state::{Bird, GamePhase, GameState, Pipe, PipePool};
pub use tick::{Command, CrashCause, GameEvent, TickInput, apply, step, tick};
