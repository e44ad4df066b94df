//! Game rules over a `Grid`.
//!
//! - `resolver`: directional slide-and-merge
//! - `spawner`: random tile placement
//! - `terminal`: win and game-over detection
//!
//! These are free functions over a borrowed grid; `engine::Game` owns the
//! grid and RNG and wires them together.

pub mod resolver;
pub mod spawner;
pub mod terminal;

pub use resolver::{can_move, collapse_line, preview_move, resolve_move, MoveOutcome};
pub use spawner::{spawn, Spawn};
pub use terminal::{evaluate, is_over, is_over_by_simulation, is_won, Evaluation};
