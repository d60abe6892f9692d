//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by one frame. Pipe movement is a
//! fixed number of pixels per tick, while spawning is timed against the
//! wall clock passed in as `now_ms`; a slower frame rate therefore means
//! more closely spaced pipes.

use super::collision::hits_pipe;
use super::state::{GamePhase, GameState, PipePool};

/// Abstract player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap upward
    Jump,
    /// Start a new run after game over
    Restart,
}

impl Command {
    /// What a single flap press means in the current phase
    pub fn from_press(is_over: bool) -> Self {
        if is_over {
            Command::Restart
        } else {
            Command::Jump
        }
    }
}

/// Commands collected for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub restart: bool,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Jump => self.jump = true,
            Command::Restart => self.restart = true,
        }
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Floor,
    Pipe { slot: usize },
}

/// Notable things that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { slot: usize, gap_center: i32 },
    Scored { score: u32 },
    Crashed(CrashCause),
}

/// Apply one command immediately
pub fn apply(state: &mut GameState, command: Command, now_ms: u64) {
    match command {
        Command::Jump => state.handle_jump(),
        Command::Restart => state.handle_restart(now_ms),
    }
}

/// Apply this frame's commands, then advance one step
///
/// A restart is applied before a jump. A frame that restarts a finished run
/// drops its jump, so the new run never starts with a flap.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let restarting = input.restart && state.is_over();
    if input.restart {
        apply(state, Command::Restart, now_ms);
    }
    if input.jump && !restarting {
        apply(state, Command::Jump, now_ms);
    }
    step(state, now_ms)
}

/// Advance the world by one tick. Does nothing once the run is over.
pub fn step(state: &mut GameState, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::Over {
        return events;
    }

    // Spawn before moving anything so a new pipe gets its first shift this frame
    if PipePool::should_spawn(now_ms, state.last_spawn_ms, state.tuning.spawn_interval_ms) {
        let slot = state.pipes.spawn(&mut state.rng, &state.tuning);
        let gap_center = state.pipes.slots()[slot].gap_center;
        state.last_spawn_ms = now_ms;
        log::debug!("Spawned pipe in slot {slot} with gap at {gap_center}");
        events.push(GameEvent::Spawned { slot, gap_center });
    }

    state.bird.integrate(state.tuning.gravity);
    state.bird.clamp_ceiling();

    if state.bird.hits_floor(state.tuning.floor_y()) {
        state.phase = GamePhase::Over;
        log::info!("Hit the floor. Final score: {}", state.score);
        events.push(GameEvent::Crashed(CrashCause::Floor));
        return events;
    }

    let limit = state.tuning.offscreen_limit();
    state.pipes.advance(state.tuning.pipe_speed, limit);

    let bird = state.bird.rect;
    let mut crashed_into = None;
    for (slot, pipe) in state.pipes.live_mut(limit) {
        if !pipe.passed && pipe.trailing_edge() < bird.x() {
            pipe.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored { score: state.score });
        }
        if crashed_into.is_none() && hits_pipe(&bird, pipe) {
            crashed_into = Some(slot);
        }
    }

    if let Some(slot) = crashed_into {
        state.phase = GamePhase::Over;
        log::info!("Hit pipe {slot}. Final score: {}", state.score);
        events.push(GameEvent::Crashed(CrashCause::Pipe { slot }));
    }

    events
}
