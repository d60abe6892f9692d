//! Terminal mode management

use std::io::{self, Write};

use crossterm::{cursor, event, execute, terminal};

/// Puts the terminal into game mode and restores it on drop
///
/// Game mode is raw input, the alternate screen, a hidden cursor, no line
/// wrapping and mouse capture.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            event::EnableMouseCapture,
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            event::DisableMouseCapture,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        ) {
            log::warn!("Failed to restore terminal screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {e}");
        }
    }
}
