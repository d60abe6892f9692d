//! Flappy Rect entry point
//!
//! Sets up logging and the terminal, then runs the fixed-rate game loop.

use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use flappy_rect::Settings;
use flappy_rect::platform::{Clock, Input, TerminalGuard, poll_inputs};
use flappy_rect::renderer::TerminalRenderer;
use flappy_rect::sim::{Command, GameEvent, GameState, TickInput, tick};

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    // The terminal is busy drawing, so logs go to a file when possible
    let path = Settings::log_path();
    match File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!(
            "Could not open log file {}: {e}; logging to stderr",
            path.display()
        ),
    }
    builder.init();
}

fn main() {
    init_logging();
    log::info!("Flappy Rect starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {seed}");

    let mut out = io::stdout();
    if let Err(e) = run(&settings, seed, &mut out) {
        log::error!("Fatal: {e}");
        eprintln!("flappy-rect: {e}");
        std::process::exit(1);
    }
    log::info!("Game exited cleanly.");
}

fn run(settings: &Settings, seed: u64, out: &mut impl Write) -> io::Result<()> {
    let _terminal = TerminalGuard::enter(out)?;
    let (cols, rows) = crossterm::terminal::size()?;
    let mut renderer = TerminalRenderer::new(cols, rows);

    let clock = Clock::start();
    let mut state = GameState::new(seed, settings.tuning.clone(), clock.now_ms());
    let frame_dur = Duration::from_millis(settings.tick_ms);

    loop {
        let frame_start = Instant::now();

        // Input
        let mut input = TickInput::default();
        for event in poll_inputs()? {
            match event {
                Input::Quit => return Ok(()),
                Input::Flap => input.push(Command::from_press(state.is_over())),
                Input::Resize(c, r) => renderer.resize(c, r),
            }
        }

        // Update
        let events = tick(&mut state, &input, clock.now_ms());
        for event in &events {
            match event {
                GameEvent::Scored { score } => log::info!("Score: {score}"),
                GameEvent::Crashed(_) => {
                    match serde_json::to_string(&state.snapshot()) {
                        Ok(json) => log::debug!("Final frame: {json}"),
                        Err(e) => log::warn!("Could not serialize final frame: {e}"),
                    }
                }
                GameEvent::Spawned { .. } => {}
            }
        }

        // Render
        renderer.draw(&state.snapshot());
        renderer.present(out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
