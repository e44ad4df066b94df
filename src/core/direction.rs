//! Move directions and their stable integer encoding.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A direction tiles slide toward.
///
/// The discriminants are the stable encoding used across the binding
/// boundary: `Up = 0`, `Down = 1`, `Left = 2`, `Right = 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Whether a move runs along rows or columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines are columns (`Up`/`Down`).
    Vertical,
    /// Lines are rows (`Left`/`Right`).
    Horizontal,
}

impl Direction {
    /// All four directions in encoding order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Decode a direction from its stable integer value.
    ///
    /// Returns `None` for values outside `0..=3`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Get the stable integer value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The axis lines are taken along for this direction.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::from_u8(value).ok_or(EngineError::InvalidDirection(value))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.as_u8()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
