//! Static rectangular frame around the playfield.

use tui_ravine_types::{BorderGlyph, Cell, GRID_HEIGHT, GRID_WIDTH};

/// Draw the border into the grid's outermost ring of cells.
///
/// Stateless and idempotent; redrawn every tick because scrolling treats the
/// grid as transient. Row `GRID_HEIGHT - 1` is the top of the screen.
pub fn draw_border(grid: &mut crate::grid::Grid) {
    let x2 = GRID_WIDTH - 1;
    let y2 = GRID_HEIGHT - 1;

    grid.set(0, y2, Cell::Border(BorderGlyph::CornerTopLeft));
    grid.set(x2, y2, Cell::Border(BorderGlyph::CornerTopRight));
    grid.set(0, 0, Cell::Border(BorderGlyph::CornerBottomLeft));
    grid.set(x2, 0, Cell::Border(BorderGlyph::CornerBottomRight));

    for x in 1..x2 {
        grid.set(x, y2, Cell::Border(BorderGlyph::EdgeTop));
        grid.set(x, 0, Cell::Border(BorderGlyph::EdgeBottom));
    }
    for y in 1..y2 {
        grid.set(0, y, Cell::Border(BorderGlyph::EdgeLeft));
        grid.set(x2, y, Cell::Border(BorderGlyph::EdgeRight));
    }
}
