//! Keyboard input for the terminal ravine game.
//!
//! Maps crossterm key events onto the four direction lines the core polls,
//! and provides [`KeyboardInput`], the polled input source handed to the
//! game tick.

pub mod map;

pub use map::{map_key, should_quit, KeyboardInput};
