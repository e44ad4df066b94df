//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Direction;
use crate::rules::MoveOutcome;

/// Python wrapper for Direction.
///
/// Values match the stable integer encoding: `UP = 0`, `DOWN = 1`,
/// `LEFT = 2`, `RIGHT = 3`.
#[pyclass(name = "Direction")]
#[derive(Clone, Debug)]
pub struct PyDirection(pub Direction);

#[pymethods]
impl PyDirection {
    #[classattr]
    const UP: u8 = Direction::Up as u8;
    #[classattr]
    const DOWN: u8 = Direction::Down as u8;
    #[classattr]
    const LEFT: u8 = Direction::Left as u8;
    #[classattr]
    const RIGHT: u8 = Direction::Right as u8;

    /// Create a direction from its integer value.
    #[new]
    fn new(value: u8) -> PyResult<Self> {
        decode_direction(value).map(Self)
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.as_u8()
    }

    fn __repr__(&self) -> String {
        format!("Direction({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.as_u8() as u64
    }
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    #[getter]
    fn merges(&self) -> u32 {
        self.0.merges
    }

    #[getter]
    fn points(&self) -> u64 {
        self.0.points
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(changed={}, merges={}, points={})",
            self.0.changed, self.0.merges, self.0.points
        )
    }
}

/// A direction as Python passes it: a `Direction` instance or its integer value.
#[derive(FromPyObject)]
pub enum DirectionArg {
    Wrapped(PyDirection),
    Raw(u8),
}

impl DirectionArg {
    pub(crate) fn resolve(self) -> PyResult<Direction> {
        match self {
            DirectionArg::Wrapped(dir) => Ok(dir.0),
            DirectionArg::Raw(value) => decode_direction(value),
        }
    }
}

/// Map a raw direction integer to `Direction`, raising `ValueError` otherwise.
pub(crate) fn decode_direction(value: u8) -> PyResult<Direction> {
    Direction::try_from(value).map_err(|e| PyValueError::new_err(e.to_string()))
}
