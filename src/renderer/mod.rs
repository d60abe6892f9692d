//! Terminal rendering module
//!
//! Draws a [`Snapshot`] into a half-block pixel buffer and writes it to the
//! terminal with 24-bit colors.

pub mod digits;
pub mod pixels;
pub mod scene;

use std::io::{self, Write};

pub use pixels::{PixelBuf, Rgb};
pub use scene::Viewport;

use crate::sim::Snapshot;

/// Owns the frame buffer for one terminal
pub struct TerminalRenderer {
    buf: PixelBuf,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::for_terminal(cols, rows, scene::LETTERBOX),
        }
    }

    /// Follow a terminal resize; the simulation field is unaffected
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf
            .resize(cols as usize, rows as usize * 2, scene::LETTERBOX);
    }

    pub fn draw(&mut self, snap: &Snapshot) {
        scene::draw(&mut self.buf, snap);
    }

    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        self.buf.present(out)
    }

    #[cfg(test)]
    pub fn buffer(&self) -> &PixelBuf {
        &self.buf
    }
}
