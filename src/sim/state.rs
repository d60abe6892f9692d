//! Game state and core simulation types
//!
//! One [`GameState`] is a complete, self-contained world: tuning, RNG, bird,
//! pipe pool and run bookkeeping.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::PIPE_CAPACITY;
use crate::tuning::Tuning;

/// Run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics, spawning and scoring advance every tick
    Running,
    /// Run ended; only a restart changes anything
    Over,
}

/// The player's bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position
    pub x: f32,
    /// Vertical position of the hitbox top
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    /// Hitbox; top-left is always `(x, floor(y))`
    pub rect: Rect,
}

impl Bird {
    /// A bird at the tuning's start position, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.bird_start();
        Self {
            x,
            y,
            velocity: 0.0,
            rect: Rect::new(
                x.floor() as i32,
                y.floor() as i32,
                tuning.bird_width,
                tuning.bird_height,
            ),
        }
    }

    /// Apply one tick of gravity and move
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
        self.sync_rect();
    }

    /// Jump: velocity is replaced, not accumulated
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// Stop at the top of the field. Hitting the ceiling is not fatal.
    pub fn clamp_ceiling(&mut self) {
        if self.rect.y() < 0 {
            self.y = 0.0;
            self.velocity = 0.0;
            self.sync_rect();
        }
    }

    /// True once the hitbox bottom sinks past `floor_y`
    pub fn hits_floor(&self, floor_y: i32) -> bool {
        self.rect.bottom() > floor_y
    }

    fn sync_rect(&mut self) {
        self.rect = self.rect.with_y(self.y.floor() as i32);
    }
}

/// One pipe: a top and bottom segment around a gap
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: i32,
    /// Vertical middle of the gap
    pub gap_center: i32,
    /// Score has been credited for this pipe
    pub passed: bool,
    /// Segment from the top of the field to the gap
    pub top: Rect,
    /// Segment from the gap to the bottom of the field
    pub bottom: Rect,
}

impl Pipe {
    pub fn new(x: i32, gap_center: i32, tuning: &Tuning) -> Self {
        let gap_top = gap_center - tuning.half_gap();
        let gap_bottom = gap_center + tuning.half_gap();
        Self {
            x,
            gap_center,
            passed: false,
            top: Rect::new(x, 0, tuning.pipe_width, gap_top),
            bottom: Rect::new(
                x,
                gap_bottom,
                tuning.pipe_width,
                tuning.field_height - gap_bottom,
            ),
        }
    }

    /// A placeholder pipe far right of the field, never updated or drawn
    pub fn parked(tuning: &Tuning) -> Self {
        Self::new(tuning.parked_x(), tuning.field_height / 2, tuning)
    }

    /// Move left by `dx`, keeping both segments aligned
    pub fn shift(&mut self, dx: i32) {
        self.x -= dx;
        self.top = self.top.with_x(self.x);
        self.bottom = self.bottom.with_x(self.x);
    }

    /// Right edge of the pipe (the last part the bird clears)
    #[inline]
    pub fn trailing_edge(&self) -> i32 {
        self.top.right()
    }

    /// Pipes beyond `limit` are parked or not yet relevant
    #[inline]
    pub fn is_live(&self, limit: i32) -> bool {
        self.x <= limit
    }
}

/// Fixed-capacity ring of pipes
///
/// Slots are never freed. A spawn overwrites whatever sits under the write
/// cursor, then the cursor moves on, wrapping at [`PIPE_CAPACITY`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipePool {
    slots: [Pipe; PIPE_CAPACITY],
    cursor: usize,
}

impl PipePool {
    /// A pool with every slot parked
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            slots: std::array::from_fn(|_| Pipe::parked(tuning)),
            cursor: 0,
        }
    }

    /// Park every slot and rewind the cursor
    pub fn park_all(&mut self, tuning: &Tuning) {
        for slot in &mut self.slots {
            *slot = Pipe::parked(tuning);
        }
        self.cursor = 0;
    }

    /// True if more than `interval_ms` has elapsed since the last spawn
    pub fn should_spawn(now_ms: u64, last_spawn_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(last_spawn_ms) > interval_ms
    }

    /// Spawn a pipe at the right edge with a random gap; returns its slot
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> usize {
        let gap_center = rng.random_range(tuning.min_gap_center()..tuning.max_gap_center());
        self.insert(Pipe::new(tuning.field_width, gap_center, tuning))
    }

    /// Write `pipe` at the cursor, overwriting the slot; returns the slot
    pub fn insert(&mut self, pipe: Pipe) -> usize {
        let slot = self.cursor;
        self.slots[slot] = pipe;
        self.cursor = (self.cursor + 1) % PIPE_CAPACITY;
        slot
    }

    /// Move every live pipe left by `speed`
    pub fn advance(&mut self, speed: i32, limit: i32) {
        for (_, pipe) in self.live_mut(limit) {
            pipe.shift(speed);
        }
    }

    /// Live pipes with their slot index
    pub fn live(&self, limit: i32) -> impl Iterator<Item = (usize, &Pipe)> {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_live(limit))
    }

    pub fn live_mut(&mut self, limit: i32) -> impl Iterator<Item = (usize, &mut Pipe)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(_, p)| p.is_live(limit))
    }

    pub fn slots(&self) -> &[Pipe] {
        &self.slots
    }

    /// Slot the next spawn will overwrite
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Complete world state for one simulation
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG started from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Gameplay constants for this world
    pub tuning: Tuning,
    pub bird: Bird,
    pub pipes: PipePool,
    /// Pipes cleared this run
    pub score: u32,
    pub phase: GamePhase,
    /// Clock reading (ms) of the last spawn, or of the last reset
    pub last_spawn_ms: u64,
}

impl GameState {
    /// Create a world ready to run, as if reset at `now_ms`
    ///
    /// `tuning` must pass [`Tuning::validate`]; spawning panics on a gap
    /// range that is empty.
    pub fn new(seed: u64, tuning: Tuning, now_ms: u64) -> Self {
        debug_assert!(tuning.validate().is_ok(), "invalid tuning: {tuning:?}");
        let bird = Bird::new(&tuning);
        let pipes = PipePool::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            bird,
            pipes,
            score: 0,
            phase: GamePhase::Running,
            last_spawn_ms: now_ms,
        }
    }

    /// Start a fresh run. The first spawn waits a full interval from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.park_all(&self.tuning);
        self.score = 0;
        self.phase = GamePhase::Running;
        self.last_spawn_ms = now_ms;
        log::info!("Game reset. Score: 0");
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Jump command; ignored once the run is over
    pub fn handle_jump(&mut self) {
        if !self.is_over() {
            self.bird.apply_impulse(self.tuning.jump_impulse);
        }
    }

    /// Restart command; only acts on a finished run
    pub fn handle_restart(&mut self, now_ms: u64) {
        if self.is_over() {
            self.reset(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bird_starts_at_rest() {
        let tuning = Tuning::default();
        let bird = Bird::new(&tuning);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.rect, Rect::new(200, 300, 40, 30));
    }

    #[test]
    fn test_integrate_accumulates_gravity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.integrate(0.4);
        bird.integrate(0.4);
        assert!((bird.velocity - 0.8).abs() < 1e-6);
        assert!((bird.y - 301.2).abs() < 1e-4);
        assert_eq!(bird.rect.y(), 301);
        assert_eq!(bird.rect.x(), 200);
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let mut bird = Bird::new(&Tuning::default());
        bird.velocity = 12.0;
        bird.apply_impulse(-8.0);
        assert_eq!(bird.velocity, -8.0);
        bird.apply_impulse(-8.0);
        assert_eq!(bird.velocity, -8.0);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut bird = Bird::new(&Tuning::default());
        bird.y = -5.0;
        bird.velocity = -3.0;
        bird.integrate(0.4);
        bird.clamp_ceiling();
        assert_eq!(bird.y, 0.0);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.rect.y(), 0);
    }

    #[test]
    fn test_ceiling_leaves_bird_below_alone() {
        let mut bird = Bird::new(&Tuning::default());
        bird.velocity = -3.0;
        bird.clamp_ceiling();
        assert_eq!(bird.velocity, -3.0);
    }

    #[test]
    fn test_hits_floor_is_strict() {
        let mut bird = Bird::new(&Tuning::default());
        bird.y = 550.0;
        bird.sync_rect();
        // Bottom exactly on the floor line
        assert!(!bird.hits_floor(580));
        bird.y = 551.0;
        bird.sync_rect();
        assert!(bird.hits_floor(580));
    }

    #[test]
    fn test_pipe_segments() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(800, 300, &tuning);
        assert_eq!(pipe.top, Rect::new(800, 0, 60, 215));
        assert_eq!(pipe.bottom, Rect::new(800, 385, 60, 215));
        assert_eq!(pipe.trailing_edge(), 860);
    }

    #[test]
    fn test_pipe_shift_moves_both_segments() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::new(800, 300, &tuning);
        pipe.shift(3);
        assert_eq!(pipe.x, 797);
        assert_eq!(pipe.top.x(), 797);
        assert_eq!(pipe.bottom.x(), 797);
        assert_eq!(pipe.gap_center, 300);
    }

    #[test]
    fn test_new_pool_is_all_parked() {
        let tuning = Tuning::default();
        let pool = PipePool::new(&tuning);
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.live(tuning.offscreen_limit()).count(), 0);
        assert!(pool.slots().iter().all(|p| p.x == 1600));
    }

    #[test]
    fn test_pool_wraps_and_overwrites() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new(&tuning);
        for i in 0..PIPE_CAPACITY {
            assert_eq!(pool.insert(Pipe::new(i as i32, 300, &tuning)), i);
        }
        assert_eq!(pool.cursor(), 0);

        let slot = pool.insert(Pipe::new(777, 200, &tuning));
        assert_eq!(slot, 0);
        assert_eq!(pool.slots()[0].x, 777);
        assert_eq!(pool.slots()[1].x, 1);
        assert_eq!(pool.cursor(), 1);
    }

    #[test]
    fn test_advance_skips_parked_slots() {
        let tuning = Tuning::default();
        let limit = tuning.offscreen_limit();
        let mut pool = PipePool::new(&tuning);
        pool.insert(Pipe::new(800, 300, &tuning));
        pool.insert(Pipe::new(limit + 1, 300, &tuning));
        pool.insert(Pipe::new(limit, 300, &tuning));

        pool.advance(3, limit);

        assert_eq!(pool.slots()[0].x, 797);
        assert_eq!(pool.slots()[1].x, limit + 1);
        assert_eq!(pool.slots()[2].x, limit - 3);
        assert_eq!(pool.slots()[3].x, 1600);
    }

    #[test]
    fn test_should_spawn_is_strict() {
        assert!(!PipePool::should_spawn(1500, 0, 1500));
        assert!(PipePool::should_spawn(1501, 0, 1500));
        // Clock readings older than the last spawn never trigger
        assert!(!PipePool::should_spawn(10, 5000, 1500));
    }

    #[test]
    fn test_spawn_places_pipe_at_right_edge() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(42);
        let slot = pool.spawn(&mut rng, &tuning);
        let pipe = &pool.slots()[slot];
        assert_eq!(slot, 0);
        assert_eq!(pipe.x, 800);
        assert!(!pipe.passed);
        assert_eq!(pool.live(tuning.offscreen_limit()).count(), 1);
    }

    #[test]
    fn test_jump_ignored_when_over() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.phase = GamePhase::Over;
        state.handle_jump();
        assert_eq!(state.bird.velocity, 0.0);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.score = 4;
        state.handle_restart(999);
        assert_eq!(state.score, 4);
        assert_eq!(state.last_spawn_ms, 0);
    }

    #[test]
    fn test_reset_restores_start_of_run() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, tuning.clone(), 0);
        let mut rng = Pcg32::seed_from_u64(3);
        state.pipes.spawn(&mut rng, &tuning);
        state.bird.y = 12.0;
        state.bird.velocity = 5.0;
        state.score = 9;
        state.phase = GamePhase::Over;

        state.reset(4242);

        assert_eq!(state.bird, Bird::new(&tuning));
        assert_eq!(state.pipes, PipePool::new(&tuning));
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.last_spawn_ms, 4242);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = GameState::new(5, Tuning::default(), 0);
        once.score = 3;
        once.reset(100);

        let mut twice = once.clone();
        twice.reset(200);

        assert_eq!(once.bird, twice.bird);
        assert_eq!(once.pipes, twice.pipes);
        assert_eq!(once.score, twice.score);
        assert_eq!(once.phase, twice.phase);
        assert_eq!(twice.last_spawn_ms, 200);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid tuning")]
    fn test_new_rejects_invalid_tuning() {
        let tuning = Tuning {
            pipe_gap: 500,
            ..Tuning::default()
        };
        GameState::new(1, tuning, 0);
    }

    proptest! {
        #[test]
        fn prop_spawned_gaps_stay_in_bounds(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let mut pool = PipePool::new(&tuning);
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..PIPE_CAPACITY * 3 {
                let slot = pool.spawn(&mut rng, &tuning);
                let pipe = &pool.slots()[slot];
                prop_assert!(pipe.gap_center >= tuning.min_gap_center());
                prop_assert!(pipe.gap_center < tuning.max_gap_center());
                prop_assert!(pipe.top.h() >= tuning.gap_margin);
                prop_assert!(pipe.bottom.h() >= tuning.gap_margin);
                prop_assert_eq!(pipe.bottom.y() - pipe.top.bottom(), tuning.pipe_gap);
                prop_assert_eq!(pipe.top.x(), pipe.bottom.x());
                prop_assert_eq!(pipe.top.w(), pipe.bottom.w());
            }
        }
    }
}
