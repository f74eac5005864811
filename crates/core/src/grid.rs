//! The off-screen game grid.
//!
//! A fixed-size, bounds-checked 2D container of [`Cell`]s using the game's
//! `(x, y)` convention: `x` grows rightward, `y` grows toward the player's
//! starting edge. Flat array storage, no allocation after construction.
//!
//! All game-state mutations land here; the display port publishes the whole
//! grid at the end of a tick, so partial updates are never visible.

use tui_ravine_types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells in the grid.
const GRID_AREA: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Fixed 28x32 grid of symbolic cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_AREA],
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_AREA],
        }
    }

    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Write `(x, y)`; returns false (and writes nothing) out of bounds.
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order, for renderers and hashing.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                assert_eq!(grid.get(x, y), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = Grid::new();
        assert!(grid.set(5, 20, Cell::Wall));
        assert_eq!(grid.get(5, 20), Some(Cell::Wall));

        assert!(grid.set(5, 20, Cell::Empty));
        assert_eq!(grid.get(5, 20), Some(Cell::Empty));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new();
        assert_eq!(grid.get(GRID_WIDTH, 0), None);
        assert_eq!(grid.get(0, GRID_HEIGHT), None);
        assert!(!grid.set(GRID_WIDTH, 0, Cell::Wall));
        assert!(!grid.set(0, GRID_HEIGHT, Cell::Wall));
    }

    #[test]
    fn clear_wipes_all_cells() {
        let mut grid = Grid::new();
        grid.set(3, 3, Cell::Ship);
        grid.set(10, 10, Cell::Wall);
        grid.clear();
        assert_eq!(grid, Grid::new());
    }
}
