//! The `Game` facade: one grid, one RNG, one configuration.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Direction, EngineConfig, GameRng, GameRngState, Result, SpawnPolicy};
use crate::grid::Grid;
use crate::rules::{self, MoveOutcome, Spawn};

/// A single game of the merge puzzle.
///
/// Owns its grid exclusively. Callers read cells through `cells()` / `grid()`
/// and change them only through moves and spawns.
#[derive(Clone, Debug)]
pub struct Game {
    config: EngineConfig,
    grid: Grid,
    rng: GameRng,
    score: u64,
    moves: u32,
}

/// Serializable capture of a game, RNG position included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: EngineConfig,
    pub cells: Vec<u8>,
    pub score: u64,
    pub moves: u32,
    pub rng: GameRngState,
}

impl Game {
    /// Create a game on an empty `side x side` grid with default settings.
    pub fn new(side: usize) -> Result<Self> {
        Self::with_config(EngineConfig::new(side))
    }

    /// Create a game from a full configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.side)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            config,
            grid,
            rng,
            score: 0,
            moves: 0,
        })
    }

    /// Seed an empty board with its two opening tiles.
    ///
    /// Returns the number of tiles placed: `0` if the board already holds
    /// any tile.
    pub fn start(&mut self) -> usize {
        if self.grid.empty_count() != self.grid.len() {
            debug!("start skipped: board already seeded");
            return 0;
        }
        (0..2).take_while(|_| self.generate()).count()
    }

    /// Spawn one tile, reporting whether there was room for it.
    pub fn generate(&mut self) -> bool {
        match self.spawn() {
            Ok(_) => true,
            Err(err) => {
                warn!("spawn skipped: {err}");
                false
            }
        }
    }

    /// Spawn one tile, returning where it landed.
    pub fn spawn(&mut self) -> Result<Spawn> {
        let placed = rules::spawn(&mut self.grid, &mut self.rng, self.config.high_tile_probability)?;
        debug!(
            "spawned exponent {} at ({}, {})",
            placed.exponent, placed.row, placed.col
        );
        Ok(placed)
    }

    /// Apply a move without spawning.
    pub fn resolve(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = rules::resolve_move(&mut self.grid, direction, self.config.max_exponent);
        if outcome.changed {
            self.score += outcome.points;
            self.moves += 1;
            debug!(
                "moved {direction}: {} merges, {} points",
                outcome.merges, outcome.points
            );
        } else {
            trace!("move {direction} had no effect");
        }
        outcome
    }

    /// Apply a move, then spawn if `should_spawn` allows it.
    ///
    /// Under `SpawnPolicy::OnChange` a move that changed nothing never spawns.
    /// On a game-over board this does nothing and reports `changed == false`.
    pub fn move_cells(&mut self, direction: Direction, should_spawn: bool) -> MoveOutcome {
        if self.is_game_over() {
            trace!("ignoring {direction}: game over");
            return MoveOutcome::default();
        }

        let outcome = self.resolve(direction);
        let spawn_allowed = match self.config.spawn_policy {
            SpawnPolicy::OnChange => outcome.changed,
            SpawnPolicy::Always => true,
        };
        if should_spawn && spawn_allowed {
            self.generate();
        }
        outcome
    }

    /// Grid a move would produce, without touching this game.
    #[must_use]
    pub fn preview(&self, direction: Direction) -> (Grid, MoveOutcome) {
        rules::preview_move(&self.grid, direction, self.config.max_exponent)
    }

    /// Replace every cell, keeping score and RNG.
    pub fn set_cells(&mut self, cells: &[u8]) -> Result<()> {
        self.grid.replace_cells(cells, self.config.max_exponent)
    }

    /// The raw row-major exponent buffer.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        self.grid.cells()
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Exponent at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<u8> {
        self.grid.cell_at(row, col)
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.grid.side()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn empty_cells_qty(&self) -> usize {
        self.grid.empty_count()
    }

    /// Points from all merges so far.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True if any tile reached the winning exponent.
    #[must_use]
    pub fn is_game_win(&self) -> bool {
        rules::is_won(&self.grid, self.config.win_exponent)
    }

    /// True if no move can change the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        rules::is_over(&self.grid, self.config.max_exponent)
    }

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            cells: self.grid.cells().to_vec(),
            score: self.score,
            moves: self.moves,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot.
    pub fn restore(snapshot: &Snapshot) -> Result<Self> {
        snapshot.config.validate()?;
        let grid = Grid::from_cells(snapshot.config.side, &snapshot.cells, snapshot.config.max_exponent)?;
        Ok(Self {
            config: snapshot.config.clone(),
            grid,
            rng: GameRng::from_state(&snapshot.rng),
            score: snapshot.score,
            moves: snapshot.moves,
        })
    }
}
