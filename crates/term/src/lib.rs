//! Terminal presentation layer.
//!
//! Implements the core's display and clock ports on top of crossterm:
//! [`TerminalDisplay`] publishes game grids through the diffing
//! [`TerminalRenderer`], and [`StdClock`] backs the flash animation's waits
//! with real sleeps.

pub mod fb;
pub mod game_view;
pub mod renderer;

use std::time::Duration;

use tui_ravine_core::{Clock, DisplayPort, Grid};

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{RavineView, Viewport};
pub use renderer::TerminalRenderer;

/// Milliseconds per clock tick unit; the original's delay loop counted
/// half-cycles of a 500 Hz timer.
pub const CLOCK_TICK_MS: u64 = 2;

/// `DisplayPort` over a real terminal.
///
/// The port contract is infallible, so terminal I/O errors are captured
/// here and surfaced to the runner through [`TerminalDisplay::take_error`].
pub struct TerminalDisplay {
    view: RavineView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    last: Grid,
    flash: bool,
    error: Option<anyhow::Error>,
}

impl TerminalDisplay {
    /// Wrap a renderer that has already entered raw mode.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            view: RavineView,
            renderer,
            fb: FrameBuffer::new(0, 0),
            last: Grid::new(),
            flash: false,
            error: None,
        }
    }

    /// Give the renderer back, for terminal restore on exit.
    pub fn into_renderer(self) -> TerminalRenderer {
        self.renderer
    }

    /// First terminal error since the last call, if any.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// Force a full redraw on the next publish (terminal resize).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    fn redraw(&mut self) {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(&self.last, self.flash, Viewport::new(w, h), &mut self.fb);
        if let Err(err) = self.renderer.draw(&self.fb) {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }
}

impl DisplayPort for TerminalDisplay {
    fn publish(&mut self, grid: &Grid) {
        self.last = grid.clone();
        self.redraw();
    }

    fn set_flash(&mut self, on: bool) {
        self.flash = on;
        self.redraw();
    }
}

/// Wall-clock implementation of the core's wait port.
pub struct StdClock;

impl Clock for StdClock {
    fn wait(&mut self, ticks: u8) {
        std::thread::sleep(Duration::from_millis(u64::from(ticks) * CLOCK_TICK_MS));
    }
}
