//! Shared types and constants for the ravine game.
//!
//! Pure data structures with no external dependencies, usable from the core
//! engine, the input layer, and the terminal renderer alike.
//!
//! # Grid conventions
//!
//! The grid is `GRID_WIDTH x GRID_HEIGHT` cells (28x32 in the reference
//! build), addressed by `(x, y)` with `y` increasing toward the player's
//! starting edge. The outermost ring of cells is the decorative border; the
//! playable field is `[X_MIN, X_MAX] x [Y_MIN, Y_MAX]`. The ship spawns at
//! `(PLAYER_START_X, Y_MIN)` and walls scroll from `Y_MAX` toward `Y_MIN`.
//!
//! # Corridor invariant
//!
//! Every generated row keeps its corridor width (`x2 - x1`) within
//! `[MIN_DIFF + 2, MAX_DIFF]`, i.e. `[3, 8]` with the reference values.

/// Full grid width in cells, border included.
pub const GRID_WIDTH: u8 = 28;

/// Full grid height in cells, border included.
pub const GRID_HEIGHT: u8 = 32;

/// Leftmost playable column.
pub const X_MIN: u8 = 1;

/// Rightmost playable column.
pub const X_MAX: u8 = 26;

/// Playable row nearest the player's starting edge.
pub const Y_MIN: u8 = 1;

/// Playable row farthest from the player; new wall rows appear here.
pub const Y_MAX: u8 = 30;

/// Corridor width floor is `MIN_DIFF + 2`.
pub const MIN_DIFF: u8 = 1;

/// Corridor width ceiling.
pub const MAX_DIFF: u8 = 8;

/// Wall columns the corridor walk is seeded from at round start.
pub const WALL_SEED_X1: u8 = 5;

/// Right-hand counterpart of [`WALL_SEED_X1`].
pub const WALL_SEED_X2: u8 = 20;

/// Ship spawn column.
pub const PLAYER_START_X: u8 = 14;

/// Ship spawn row.
pub const PLAYER_START_Y: u8 = Y_MIN;

/// Game tick cadence in milliseconds (one scroll step per tick).
pub const TICK_MS: u64 = 80;

/// Number of on/off cycles in the terminal flash animation.
pub const FLASH_CYCLES: u8 = 40;

/// Clock ticks waited per flash half-cycle.
pub const FLASH_HALF_TICKS: u8 = 10;

/// The eight border glyph roles drawn by the border renderer.
///
/// The view may map opposite edges onto the same visual glyph (the reference
/// glyph table reuses one horizontal and one vertical character), but the
/// roles stay distinct in the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderGlyph {
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    EdgeTop,
    EdgeBottom,
    EdgeLeft,
    EdgeRight,
}

/// A single cell of the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Ship,
    Border(BorderGlyph),
}

/// The two wall columns of one corridor row.
///
/// `x1 < x2` is maintained by the corridor generator's branch logic, never
/// by after-the-fact clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallPair {
    pub x1: u8,
    pub x2: u8,
}

impl WallPair {
    pub const fn new(x1: u8, x2: u8) -> Self {
        Self { x1, x2 }
    }

    /// Return the pair with the smaller column in `x1`.
    ///
    /// The scroll pass captures wall columns in the order it finds them,
    /// which callers must not assume is left-to-right.
    pub fn ordered(self) -> Self {
        if self.x1 <= self.x2 {
            self
        } else {
            Self::new(self.x2, self.x1)
        }
    }

    /// Corridor width, `x2 - x1`.
    pub fn width(self) -> u8 {
        debug_assert!(self.x1 < self.x2, "wall pair not ordered: {:?}", self);
        self.x2 - self.x1
    }
}

/// One tick's worth of sampled directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Buttons {
    /// No buttons held.
    pub const NONE: Buttons = Buttons {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn any(self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Round lifecycle. `Terminal` is absorbing: a collided round never resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Terminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bounds_match_28x32_build() {
        assert_eq!(GRID_WIDTH, 28);
        assert_eq!(GRID_HEIGHT, 32);
        assert_eq!((X_MIN, X_MAX), (1, 26));
        assert_eq!((Y_MIN, Y_MAX), (1, 30));

        // Corridor width invariant window is [3, 8].
        assert_eq!(MIN_DIFF + 2, 3);
        assert_eq!(MAX_DIFF, 8);
    }

    #[test]
    fn wall_pair_ordered_swaps_when_reversed() {
        assert_eq!(WallPair::new(20, 5).ordered(), WallPair::new(5, 20));
        assert_eq!(WallPair::new(5, 20).ordered(), WallPair::new(5, 20));
        assert_eq!(WallPair::new(5, 20).width(), 15);
    }

    #[test]
    fn buttons_any_reports_held_directions() {
        assert!(!Buttons::NONE.any());
        assert!(Buttons {
            down: true,
            ..Buttons::NONE
        }
        .any());
    }
}
