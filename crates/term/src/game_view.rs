//! RavineView: maps the core game grid into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Grid row `Y_MAX + 1` (the top
//! border row) renders at the top of the screen and the ship's edge at the
//! bottom, matching the game's y-grows-toward-the-player convention.

use tui_ravine_core::Grid;
use tui_ravine_types::{BorderGlyph, Cell, GRID_HEIGHT, GRID_WIDTH};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyph and color mapping for the ravine grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RavineView;

impl RavineView {
    /// Render the grid into an existing framebuffer, centered in the
    /// viewport. `flash` swaps the palette for the death animation, the
    /// terminal equivalent of the original's palette-register toggle.
    pub fn render_into(&self, grid: &Grid, flash: bool, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let base = backdrop_style(flash);
        fb.clear(base.into_cell(' '));

        let grid_w = GRID_WIDTH as u16;
        let grid_h = GRID_HEIGHT as u16;
        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = viewport.height.saturating_sub(grid_h) / 2;

        for y in 0..GRID_HEIGHT {
            // y = 0 is the player's edge, drawn at the bottom.
            let row = start_y + (grid_h - 1 - y as u16);
            for x in 0..GRID_WIDTH {
                let cell = grid.get(x, y).unwrap_or_default();
                let (ch, style) = cell_visual(cell, flash);
                fb.put_char(start_x + x as u16, row, ch, style);
            }
        }
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, grid: &Grid, flash: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, flash, viewport, &mut fb);
        fb
    }
}

fn backdrop_style(flash: bool) -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: if flash {
            Rgb::new(150, 20, 20)
        } else {
            Rgb::new(0, 0, 0)
        },
        bold: false,
    }
}

fn cell_visual(cell: Cell, flash: bool) -> (char, CellStyle) {
    let bg = backdrop_style(flash).bg;
    match cell {
        Cell::Empty => (' ', backdrop_style(flash)),
        Cell::Wall => (
            '█',
            CellStyle {
                fg: Rgb::new(200, 140, 60),
                bg,
                bold: false,
            },
        ),
        Cell::Ship => (
            '▲',
            CellStyle {
                fg: Rgb::new(80, 220, 220),
                bg,
                bold: true,
            },
        ),
        Cell::Border(glyph) => (
            border_char(glyph),
            CellStyle {
                fg: Rgb::new(160, 160, 160),
                bg,
                bold: false,
            },
        ),
    }
}

/// The reference glyph table reuses one character for both horizontal edges
/// and one for both vertical edges.
fn border_char(glyph: BorderGlyph) -> char {
    match glyph {
        BorderGlyph::CornerTopLeft => '┌',
        BorderGlyph::CornerTopRight => '┐',
        BorderGlyph::CornerBottomLeft => '└',
        BorderGlyph::CornerBottomRight => '┘',
        BorderGlyph::EdgeTop | BorderGlyph::EdgeBottom => '─',
        BorderGlyph::EdgeLeft | BorderGlyph::EdgeRight => '│',
    }
}
