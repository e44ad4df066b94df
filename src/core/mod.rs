//! Core engine types: directions, errors, configuration, RNG.
//!
//! Everything here is independent of the grid itself; the grid, rules
//! and engine modules build on these.

pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use config::{
    EngineConfig, SpawnPolicy, DEFAULT_HIGH_TILE_PROBABILITY, DEFAULT_WIN_EXPONENT, HIGH_SPAWN_EXPONENT,
    LOW_SPAWN_EXPONENT, MAX_EXPONENT, MAX_SIDE, MIN_SIDE,
};
pub use direction::{Axis, Direction};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
