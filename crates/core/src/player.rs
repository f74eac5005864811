//! Player position and movement.

use tui_ravine_types::{Buttons, Cell, PLAYER_START_X, PLAYER_START_Y, X_MAX, X_MIN, Y_MAX, Y_MIN};

use crate::grid::Grid;

/// The ship's cell position, always inside the playfield bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: u8,
    pub y: u8,
}

impl Player {
    /// Player at the spawn cell.
    pub fn new() -> Self {
        Self::at(PLAYER_START_X, PLAYER_START_Y)
    }

    pub fn at(x: u8, y: u8) -> Self {
        debug_assert!((X_MIN..=X_MAX).contains(&x) && (Y_MIN..=Y_MAX).contains(&y));
        Self { x, y }
    }

    /// Write the ship glyph at the current position.
    pub fn spawn(&self, grid: &mut Grid) {
        grid.set(self.x, self.y, Cell::Ship);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one tick of directional input.
///
/// At most one cell of movement per call, resolved first-match-wins in the
/// order left, right, up, down. The bounds check is part of each match arm,
/// so a direction blocked at the playfield edge falls through to the next
/// pressed one. The vacated cell is emptied and the ship rewritten in the
/// same call; no intermediate state is ever published.
pub fn handle_input(grid: &mut Grid, player: &mut Player, buttons: Buttons) {
    let (x, y) = (player.x, player.y);

    if buttons.left && x > X_MIN {
        player.x -= 1;
    } else if buttons.right && x < X_MAX {
        player.x += 1;
    } else if buttons.up && y < Y_MAX {
        player.y += 1;
    } else if buttons.down && y > Y_MIN {
        player.y -= 1;
    } else {
        return;
    }

    grid.set(x, y, Cell::Empty);
    grid.set(player.x, player.y, Cell::Ship);
}
