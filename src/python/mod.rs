//! Python bindings for the slide-merge engine.
//!
//! A thin presentation boundary: hosts read the flat cell buffer and the
//! terminal flags, and send moves as stable direction integers. Key and
//! gesture mapping stays on the host side.
//!
//! # Quick Start
//!
//! ```python
//! import slide_merge as sm
//!
//! game = sm.Game(side=4, seed=42)
//! game.start()
//! outcome = game.move_cells(sm.Direction.LEFT, True)
//! print(game.cells.reshape(4, 4), outcome.changed, game.is_game_over)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// slide_merge: rules engine for 2048-style sliding-tile puzzles.
#[pymodule]
fn slide_merge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDirection>()?;
    m.add_class::<PyMoveOutcome>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
