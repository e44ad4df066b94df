//! Tile spawning.
//!
//! A spawn picks one empty cell uniformly at random and places a 2
//! (exponent 1) or, with probability `high_tile_probability`, a 4
//! (exponent 2). With a seeded `GameRng` the sequence is reproducible:
//! the cell is drawn first, then the tile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{HIGH_SPAWN_EXPONENT, LOW_SPAWN_EXPONENT, MAX_SIDE};
use crate::core::{EngineError, GameRng, Result};
use crate::grid::Grid;

/// Where a tile was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub exponent: u8,
}

/// Place one new tile into a random empty cell.
///
/// Fails with `NoSpaceAvailable` on a full board, leaving it unchanged.
/// A probability outside `[0, 1]` fails with `InvalidSpawnProbability`
/// before the RNG is touched.
pub fn spawn(grid: &mut Grid, rng: &mut GameRng, high_tile_probability: f64) -> Result<Spawn> {
    if !(0.0..=1.0).contains(&high_tile_probability) {
        return Err(EngineError::InvalidSpawnProbability(high_tile_probability));
    }

    let empty: SmallVec<[usize; MAX_SIDE * MAX_SIDE]> = grid.empty_cells().collect();
    if empty.is_empty() {
        return Err(EngineError::NoSpaceAvailable);
    }

    let idx = empty[rng.gen_index(empty.len())];
    let exponent = if rng.gen_bool(high_tile_probability) {
        HIGH_SPAWN_EXPONENT
    } else {
        LOW_SPAWN_EXPONENT
    };

    let (row, col) = grid.position_of(idx);
    grid.set(row, col, exponent)?;
    Ok(Spawn { row, col, exponent })
}
