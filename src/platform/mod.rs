//! Platform abstraction layer
//!
//! Everything the simulation treats as an outside collaborator:
//! - Monotonic time in milliseconds
//! - Input events translated into game inputs
//! - Terminal setup and teardown

pub mod input;
pub mod terminal;
pub mod time;

pub use input::{Input, poll_inputs, translate};
pub use terminal::TerminalGuard;
pub use time::Clock;
