//! Row-major NxN storage of tile exponents.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{MAX_EXPONENT, MAX_SIDE, MIN_SIDE};
use crate::core::{Direction, EngineError, Result};

/// Indices of one line, ordered from the target edge inward.
pub type LineIndices = SmallVec<[usize; MAX_SIDE]>;

/// Square grid of tile exponents.
///
/// `0` is an empty cell and `k >= 1` a tile of value `2^k`. Cells are stored
/// row-major, so cell `(row, col)` lives at `row * side + col`.
///
/// Deserialization goes through the same checks as `from_cells`, with the
/// ceiling at `MAX_EXPONENT`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    side: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(side: usize) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(EngineError::InvalidSize { side });
        }
        Ok(Self {
            side,
            cells: vec![0; side * side],
        })
    }

    /// Build a grid from a row-major exponent buffer.
    ///
    /// Every value must be at most `max_exponent`, which itself may not
    /// exceed `MAX_EXPONENT`.
    pub fn from_cells(side: usize, cells: &[u8], max_exponent: u8) -> Result<Self> {
        let mut grid = Self::new(side)?;
        grid.replace_cells(cells, max_exponent)?;
        Ok(grid)
    }

    /// Grid side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`side * side`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least `MIN_SIDE^2` cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw row-major exponent buffer.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Exponent at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<u8> {
        self.index_of(row, col).map(|idx| self.cells[idx])
    }

    /// Set the exponent at `(row, col)`.
    pub(crate) fn set(&mut self, row: usize, col: usize, exponent: u8) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = exponent;
        Ok(())
    }

    /// Set a cell by linear index.
    pub(crate) fn set_index(&mut self, idx: usize, exponent: u8) {
        debug_assert!(idx < self.cells.len(), "cell index {idx} out of bounds");
        self.cells[idx] = exponent;
    }

    /// Swap in a new buffer after checking its length and exponent range.
    ///
    /// The grid is left untouched on error.
    pub(crate) fn replace_cells(&mut self, cells: &[u8], max_exponent: u8) -> Result<()> {
        if max_exponent > MAX_EXPONENT {
            return Err(EngineError::InvalidMaxExponent(max_exponent));
        }
        if cells.len() != self.cells.len() {
            return Err(EngineError::InvalidCells {
                expected: self.cells.len(),
                actual: cells.len(),
            });
        }
        if let Some((index, &exponent)) = cells.iter().enumerate().find(|(_, &e)| e > max_exponent) {
            return Err(EngineError::ExponentOutOfRange {
                index,
                exponent,
                max: max_exponent,
            });
        }
        self.cells.copy_from_slice(cells);
        Ok(())
    }

    /// Linear index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.side || col >= self.side {
            return Err(EngineError::IndexOutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        Ok(row * self.side + col)
    }

    /// `(row, col)` of a linear index.
    #[must_use]
    pub fn position_of(&self, idx: usize) -> (usize, usize) {
        (idx / self.side, idx % self.side)
    }

    /// Linear indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &cell)| (cell == 0).then_some(i))
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 0).count()
    }

    /// Largest exponent on the board (`0` when empty).
    #[must_use]
    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of tile values, `Σ 2^k` over non-empty cells.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| 1u64 << c)
            .sum()
    }

    /// Cell indices of line `line` for a move toward `direction`.
    ///
    /// The first index sits on the edge tiles collapse toward: column 0 for
    /// `Left`, the last column for `Right`, row 0 for `Up`, the last row for
    /// `Down`.
    #[must_use]
    pub fn line_indices(&self, direction: Direction, line: usize) -> LineIndices {
        debug_assert!(line < self.side, "line {line} out of bounds");
        let n = self.side;
        (0..n)
            .map(|k| match direction {
                Direction::Left => line * n + k,
                Direction::Right => line * n + (n - 1 - k),
                Direction::Up => k * n + line,
                Direction::Down => (n - 1 - k) * n + line,
            })
            .collect()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.side)
    }
}

/// Unchecked wire form of a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    side: usize,
    cells: Vec<u8>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = EngineError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::from_cells(raw.side, &raw.cells, MAX_EXPONENT)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("side", &self.side)
            .field("rows", &self.rows().collect::<Vec<_>>())
            .finish()
    }
}

impl std::fmt::Display for Grid {
    /// Tile values (not exponents), one row per line, `.` for empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if cell == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", 1u64 << cell)?;
                }
            }
        }
        Ok(())
    }
}
