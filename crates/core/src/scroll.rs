//! The per-tick scroll pass: wall relocation, capture, collision.
//!
//! One call walks the playfield column by column, rows from the player's
//! edge outward, moving every wall cell one row toward the player. The walk
//! is in-place: a wall moved from `y` to `y - 1` lands on a row the column
//! scan has already visited, so nothing is moved twice.

use arrayvec::ArrayVec;

use tui_ravine_types::{Cell, WallPair, X_MAX, X_MIN, Y_MAX, Y_MIN};

use crate::grid::Grid;
use crate::player::Player;

/// Result of one scroll pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Wall columns found on row `Y_MAX` before the shift, in found order.
    /// Seeds the next generated row. `None` when the far row held fewer
    /// than two walls (only possible on a malformed grid).
    pub top_row: Option<WallPair>,
    /// A wall was relocated onto the player's cell; the pass stopped there.
    pub collision: bool,
}

/// Shift every wall one row toward the player and test for collision.
///
/// Walls reaching past `Y_MIN` fall off the grid. On collision the pass
/// returns immediately, leaving the rest of the grid untouched; the caller
/// freezes the frame in that state.
pub fn scroll_and_collide(grid: &mut Grid, player: Player) -> ScrollOutcome {
    let mut found: ArrayVec<u8, 2> = ArrayVec::new();

    for x in X_MIN..=X_MAX {
        for y in Y_MIN..=Y_MAX {
            if grid.get(x, y) != Some(Cell::Wall) {
                continue;
            }

            // Row Y_MAX is about to scroll off the far edge; its wall
            // columns seed the replacement row.
            if y == Y_MAX && !found.is_full() {
                found.push(x);
            }

            grid.set(x, y, Cell::Empty);
            if y > Y_MIN {
                grid.set(x, y - 1, Cell::Wall);
                if player.x == x && player.y == y - 1 {
                    return ScrollOutcome {
                        top_row: None,
                        collision: true,
                    };
                }
            }
        }
    }

    let top_row = match found.as_slice() {
        [a, b] => Some(WallPair::new(*a, *b)),
        _ => None,
    };
    ScrollOutcome {
        top_row,
        collision: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_move_one_row_toward_player() {
        let mut grid = Grid::new();
        grid.set(5, 10, Cell::Wall);
        grid.set(20, 10, Cell::Wall);

        let player = Player::new();
        let outcome = scroll_and_collide(&mut grid, player);

        assert!(!outcome.collision);
        assert_eq!(grid.get(5, 10), Some(Cell::Empty));
        assert_eq!(grid.get(20, 10), Some(Cell::Empty));
        assert_eq!(grid.get(5, 9), Some(Cell::Wall));
        assert_eq!(grid.get(20, 9), Some(Cell::Wall));
    }

    #[test]
    fn far_row_walls_are_captured_in_found_order() {
        let mut grid = Grid::new();
        grid.set(20, Y_MAX, Cell::Wall);
        grid.set(5, Y_MAX, Cell::Wall);

        let outcome = scroll_and_collide(&mut grid, Player::new());

        // Column-major scan finds the leftmost wall first here, but the
        // contract only promises both columns, not their order.
        assert_eq!(
            outcome.top_row.map(WallPair::ordered),
            Some(WallPair::new(5, 20))
        );
        assert_eq!(grid.get(5, Y_MAX), Some(Cell::Empty));
        assert_eq!(grid.get(5, Y_MAX - 1), Some(Cell::Wall));
    }

    #[test]
    fn wall_at_player_edge_falls_off() {
        let mut grid = Grid::new();
        grid.set(8, Y_MIN, Cell::Wall);

        let outcome = scroll_and_collide(&mut grid, Player::new());

        assert!(!outcome.collision);
        assert_eq!(grid.get(8, Y_MIN), Some(Cell::Empty));
        assert_eq!(grid.get(8, Y_MIN - 1), Some(Cell::Empty));
    }

    #[test]
    fn relocation_onto_player_is_a_collision() {
        let mut grid = Grid::new();
        let player = Player::at(10, Y_MAX - 1);
        grid.set(player.x, player.y, Cell::Ship);
        grid.set(10, Y_MAX, Cell::Wall);

        let outcome = scroll_and_collide(&mut grid, player);

        assert!(outcome.collision);
        // The wall was placed onto the player's cell before the pass stopped.
        assert_eq!(grid.get(10, Y_MAX - 1), Some(Cell::Wall));
    }

    #[test]
    fn pass_stops_at_the_colliding_cell() {
        let mut grid = Grid::new();
        let player = Player::at(10, 5);
        grid.set(10, 6, Cell::Wall);
        // A wall in a later column would normally move; the early return
        // must leave it in place.
        grid.set(20, 12, Cell::Wall);

        let outcome = scroll_and_collide(&mut grid, player);

        assert!(outcome.collision);
        assert_eq!(grid.get(20, 12), Some(Cell::Wall));
        assert_eq!(grid.get(20, 11), Some(Cell::Empty));
    }
}
