//! Engine error taxonomy.

/// Errors produced by grid construction, cell access, spawning and configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("grid side must be between {min} and {max}, got {side}", min = super::config::MIN_SIDE, max = super::config::MAX_SIDE)]
    InvalidSize { side: usize },

    #[error("cell ({row}, {col}) is outside a {side}x{side} grid")]
    IndexOutOfBounds { row: usize, col: usize, side: usize },

    #[error("no empty cell available for a new tile")]
    NoSpaceAvailable,

    #[error("expected {expected} cells, got {actual}")]
    InvalidCells { expected: usize, actual: usize },

    #[error("cell {index} holds exponent {exponent}, above the ceiling {max}")]
    ExponentOutOfRange { index: usize, exponent: u8, max: u8 },

    #[error("unknown direction value: {0}")]
    InvalidDirection(u8),

    #[error("win exponent {exponent} must be between 1 and {max}")]
    InvalidWinExponent { exponent: u8, max: u8 },

    #[error("max exponent must be between 1 and {max}, got {0}", max = super::config::MAX_EXPONENT)]
    InvalidMaxExponent(u8),

    #[error("high tile probability must be within [0, 1], got {0}")]
    InvalidSpawnProbability(f64),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
