//! Move resolution: slide every line toward an edge and merge equal pairs.
//!
//! Each line is handled on its own:
//! 1. Read the line starting at the target edge and drop empty cells.
//! 2. Scan from the edge inward, merging two consecutive equal tiles into one
//!    tile of the next exponent. A merged tile does not merge again in the
//!    same move.
//! 3. Write the result back against the edge and clear the rest of the line.
//!
//! Tiles at the exponent ceiling do not merge. The ceiling passed in is
//! capped at `MAX_EXPONENT`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{MAX_EXPONENT, MAX_SIDE};
use crate::core::Direction;
use crate::grid::Grid;

/// Exponents of one line, edge first.
type Line = SmallVec<[u8; MAX_SIDE]>;

/// What a single move did to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Any cell changed position or value.
    pub changed: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Sum of the values of tiles created by merges.
    pub points: u64,
}

impl MoveOutcome {
    fn absorb(&mut self, other: MoveOutcome) {
        self.changed |= other.changed;
        self.merges += other.merges;
        self.points += other.points;
    }
}

/// Apply one move to `grid` in place.
///
/// A move with no effect is a valid result with `changed == false`.
pub fn resolve_move(grid: &mut Grid, direction: Direction, max_exponent: u8) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    for line in 0..grid.side() {
        let indices = grid.line_indices(direction, line);
        let before: Line = indices.iter().map(|&i| grid.cells()[i]).collect();
        let (after, line_outcome) = collapse_line(&before, max_exponent);
        if line_outcome.changed {
            for (&idx, &exponent) in indices.iter().zip(after.iter()) {
                grid.set_index(idx, exponent);
            }
        }
        outcome.absorb(line_outcome);
    }
    outcome
}

/// Grid that `direction` would produce, leaving `grid` untouched.
#[must_use]
pub fn preview_move(grid: &Grid, direction: Direction, max_exponent: u8) -> (Grid, MoveOutcome) {
    let mut next = grid.clone();
    let outcome = resolve_move(&mut next, direction, max_exponent);
    (next, outcome)
}

/// Whether `direction` would change `grid`.
#[must_use]
pub fn can_move(grid: &Grid, direction: Direction, max_exponent: u8) -> bool {
    (0..grid.side()).any(|line| {
        let before: Line = grid
            .line_indices(direction, line)
            .iter()
            .map(|&i| grid.cells()[i])
            .collect();
        collapse_line(&before, max_exponent).1.changed
    })
}

/// Collapse one line (edge first) toward its edge.
///
/// Returns the new line, padded with zeros to the same length.
pub fn collapse_line(line: &[u8], max_exponent: u8) -> (Line, MoveOutcome) {
    let ceiling = max_exponent.min(MAX_EXPONENT);
    let mut tiles = line.iter().copied().filter(|&e| e != 0).peekable();
    let mut out = Line::with_capacity(line.len());
    let mut outcome = MoveOutcome::default();

    while let Some(tile) = tiles.next() {
        if tile < ceiling && tiles.peek() == Some(&tile) {
            tiles.next();
            let merged = tile + 1;
            out.push(merged);
            outcome.merges += 1;
            outcome.points += 1u64 << merged;
        } else {
            out.push(tile);
        }
    }
    out.resize(line.len(), 0);

    outcome.changed = out.as_slice() != line;
    (out, outcome)
}
