//! Terminal-state evaluation.
//!
//! `is_won` and `is_over` are independent, memoryless queries: a board can
//! be both won and over. Remembering that a win was already announced is
//! the caller's job (see `engine::Session`).
//!
//! `is_over` checks adjacency directly. `is_over_by_simulation` tries all
//! four moves on the grid instead; the two must agree on every board.

use serde::{Deserialize, Serialize};

use super::resolver::can_move;
use crate::core::{Direction, MAX_EXPONENT};
use crate::grid::Grid;

/// Win/over flags for one board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub won: bool,
    pub over: bool,
}

/// True if any tile has reached `win_exponent`.
#[must_use]
pub fn is_won(grid: &Grid, win_exponent: u8) -> bool {
    grid.cells().iter().any(|&e| e >= win_exponent)
}

/// True if no move can change the board.
///
/// That is: no empty cell, and no two orthogonal neighbours hold equal
/// exponents below `max_exponent` (tiles at the ceiling never merge).
/// The ceiling is capped at `MAX_EXPONENT`.
#[must_use]
pub fn is_over(grid: &Grid, max_exponent: u8) -> bool {
    if grid.empty_count() > 0 {
        return false;
    }

    let ceiling = max_exponent.min(MAX_EXPONENT);
    let n = grid.side();
    let cells = grid.cells();
    for row in 0..n {
        for col in 0..n {
            let here = cells[row * n + col];
            if here >= ceiling {
                continue;
            }
            if col + 1 < n && cells[row * n + col + 1] == here {
                return false;
            }
            if row + 1 < n && cells[(row + 1) * n + col] == here {
                return false;
            }
        }
    }
    true
}

/// `is_over` computed by trying each direction.
#[must_use]
pub fn is_over_by_simulation(grid: &Grid, max_exponent: u8) -> bool {
    !Direction::ALL
        .iter()
        .any(|&dir| can_move(grid, dir, max_exponent))
}

/// Evaluate both terminal conditions.
#[must_use]
pub fn evaluate(grid: &Grid, win_exponent: u8, max_exponent: u8) -> Evaluation {
    Evaluation {
        won: is_won(grid, win_exponent),
        over: is_over(grid, max_exponent),
    }
}
