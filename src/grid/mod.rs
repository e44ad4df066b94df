//! Grid storage.
//!
//! The grid is the only long-lived state of a game: allocated once with
//! every cell empty, then mutated in place by moves and spawns.

mod cells;

pub use cells::{Grid, LineIndices};
