//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, SpawnPolicy};
use crate::engine::Game;

use super::py_core::{DirectionArg, PyMoveOutcome};

/// Python wrapper for Game.
///
/// The surface a renderer needs: construct, `generate`, `move_cells`, the
/// flat cell buffer, and the two terminal flags.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game on an empty board.
    ///
    /// # Arguments
    /// - side: Grid side length (2-8)
    /// - seed: RNG seed; omit for a random game
    /// - win_exponent: Exponent that counts as a win (11 = tile 2048)
    /// - spawn_always: Spawn after every requested move, even no-op ones
    #[new]
    #[pyo3(signature = (side = 4, seed = None, win_exponent = 11, spawn_always = false))]
    fn new(side: usize, seed: Option<u64>, win_exponent: u8, spawn_always: bool) -> PyResult<Self> {
        let mut config = EngineConfig::new(side).with_win_exponent(win_exponent);
        config.seed = seed;
        if spawn_always {
            config = config.with_spawn_policy(SpawnPolicy::Always);
        }
        let game = Game::with_config(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    /// Spawn one tile. Returns False if the board is full.
    fn generate(&mut self) -> bool {
        self.game.generate()
    }

    /// Place the two opening tiles on an empty board.
    fn start(&mut self) -> usize {
        self.game.start()
    }

    /// Apply a move, optionally spawning.
    ///
    /// `dir` is a `Direction` or its integer value.
    #[pyo3(signature = (dir, should_spawn = true))]
    fn move_cells(&mut self, dir: DirectionArg, should_spawn: bool) -> PyResult<PyMoveOutcome> {
        let direction = dir.resolve()?;
        Ok(PyMoveOutcome(self.game.move_cells(direction, should_spawn)))
    }

    /// Flat row-major exponent buffer as a numpy array.
    #[getter]
    fn cells<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, self.game.cells())
    }

    #[getter]
    fn side(&self) -> usize {
        self.game.side()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.game.score()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    #[getter]
    fn is_game_win(&self) -> bool {
        self.game.is_game_win()
    }

    /// Replace the board from a flat list of exponents.
    fn set_cells(&mut self, cells: Vec<u8>) -> PyResult<()> {
        self.game
            .set_cells(&cells)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("Game(side={}, score={})", self.game.side(), self.game.score())
    }
}
