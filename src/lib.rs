//! TUI Ravine (workspace facade crate).
//!
//! Re-exports the member crates under stable module paths so callers and
//! tests can use `tui_ravine::{core, input, term, types}`.

pub use tui_ravine_core as core;
pub use tui_ravine_input as input;
pub use tui_ravine_term as term;
pub use tui_ravine_types as types;
