//! # slide-merge
//!
//! Rules engine for 2048-style sliding-tile merge puzzles on an NxN grid.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: Grid state, moves, spawns and win/loss detection.
//!    Rendering, input mapping and persistence belong to the host.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a seed and a move list reproduce a game exactly.
//!
//! 3. **Configuration Over Constants**: Board size, win threshold, spawn
//!    odds and spawn gating are set through `EngineConfig`.
//!
//! ## Architecture
//!
//! - **Exponent cells**: Each cell stores `k` for a tile of value `2^k`,
//!   `0` for empty, row-major in one flat buffer.
//!
//! - **Single owner**: A `Game` exclusively owns its grid. Every operation
//!   is synchronous; hosts sharing a game across threads must lock it.
//!
//! ## Modules
//!
//! - `core`: Directions, errors, configuration, RNG
//! - `grid`: Cell storage and line addressing
//! - `rules`: Move resolution, spawning, terminal-state evaluation
//! - `engine`: `Game` facade and `Session` lifecycle
//!
//! ```
//! use slide_merge::{Direction, EngineConfig, Game};
//!
//! let mut game = Game::with_config(EngineConfig::new(4).with_seed(7)).unwrap();
//! game.start();
//! let outcome = game.move_cells(Direction::Left, true);
//! assert_eq!(game.cells().len(), 16);
//! if !outcome.changed {
//!     assert_eq!(game.empty_cells_qty(), 14);
//! }
//! ```

pub mod core;
pub mod grid;
pub mod rules;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction,
    EngineConfig, SpawnPolicy,
    EngineError, Result,
    GameRng, GameRngState,
    DEFAULT_WIN_EXPONENT, MAX_EXPONENT, MAX_SIDE, MIN_SIDE,
};

pub use crate::grid::Grid;

pub use crate::rules::{
    MoveOutcome, Spawn, Evaluation,
    resolve_move, preview_move, can_move,
    spawn,
    is_won, is_over, is_over_by_simulation, evaluate,
};

pub use crate::engine::{Game, GameStatus, Session, Snapshot, Turn};
