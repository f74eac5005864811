//! Core game logic - pure, deterministic, and testable.
//!
//! Everything that makes the ravine a game lives here: the LFSR stream, the
//! corridor walk, the scroll-and-collide pass, player movement, the border,
//! and the tick loop that sequences them. No I/O: the display, input, and
//! timing surfaces are traits in [`game`], implemented by the terminal
//! crates.
//!
//! # Module structure
//!
//! - [`lfsr`]: 16-bit LFSR pseudo-random source
//! - [`grid`]: the 28x32 off-screen cell grid
//! - [`corridor`]: next-row wall generation with the swappable narrow predicate
//! - [`scroll`]: per-tick wall relocation, capture, and collision detection
//! - [`player`]: ship position and one-cell-per-tick movement
//! - [`border`]: static frame redraw
//! - [`game`]: the `Running`/`Terminal` state machine and its ports

pub mod border;
pub mod corridor;
pub mod game;
pub mod grid;
pub mod lfsr;
pub mod player;
pub mod scroll;

pub use tui_ravine_types as types;

pub use border::draw_border;
pub use corridor::{low_bit_narrow, reference_narrow, CorridorGenerator, NarrowPredicate};
pub use game::{Clock, DisplayPort, Game, InputPort};
pub use grid::Grid;
pub use lfsr::Lfsr;
pub use player::{handle_input, Player};
pub use scroll::{scroll_and_collide, ScrollOutcome};
