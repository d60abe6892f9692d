//! Terminal input translation
//!
//! Raw crossterm events become a small set of [`Input`]s. Whether a flap
//! press means jump or restart is decided by the caller via
//! [`crate::sim::Command::from_press`].

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Game-relevant input from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Space, Up, Enter or left click
    Flap,
    /// Esc, `q` or Ctrl-C
    Quit,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}

/// Map one terminal event to an input, if it means anything to the game
pub fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Flap),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(Input::Resize(*cols, *rows)),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Input> {
    // Some terminals report releases and repeats too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Input::Flap),
        _ => None,
    }
}

/// Drain every pending event without blocking
pub fn poll_inputs() -> io::Result<Vec<Input>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = translate(&event::read()?) {
            inputs.push(input);
        }
    }
    Ok(inputs)
}
