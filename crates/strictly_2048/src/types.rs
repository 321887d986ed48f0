//! Core domain types for the 2048 grid.

use super::error::EngineError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Position {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square `size × size` matrix of tile values.
///
/// Cells are stored flat in row-major order. A value of `0` is an empty
/// cell; every other value is a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Box<[u64]>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows. [`EngineConfig`](crate::EngineConfig)
    /// bounds the sizes the engine passes in.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size].into_boxed_slice(),
        }
    }

    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotSquare`] if any row length differs from
    /// the number of rows.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Self, EngineError> {
        let size = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(EngineError::NotSquare {
                rows: size,
                row,
                len: cells.len(),
            });
        }

        Ok(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the value at a position, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<u64> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Value at an in-bounds position.
    pub(crate) fn at(&self, pos: Position) -> u64 {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Writes a value at an in-bounds position.
    pub(crate) fn set(&mut self, pos: Position, value: u64) {
        self.cells[pos.row * self.size + pos.col] = value;
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|pos| self.at(*pos) == 0).collect()
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|v| **v != 0).count()
    }

    /// Checks if every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|v| *v != 0)
    }

    /// Largest tile on the grid (`0` for an empty grid).
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

/// Checks that `value` is `base * 2^k` for some `k ≥ 0`.
pub fn is_tile(value: u64, base: u64) -> bool {
    base != 0 && value % base == 0 && (value / base).is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.empty_positions().len(), 16);
    }

    #[test]
    fn test_from_rows_round_trips_layout() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0], vec![16, 0, 2]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.get(Position::new(1, 1)), Some(8));
        assert_eq!(grid.get(Position::new(2, 0)), Some(16));
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.max_tile(), 16);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![2, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(EngineError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2);
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_is_tile() {
        assert!(is_tile(2, 2));
        assert!(is_tile(2048, 2));
        assert!(is_tile(3, 3));
        assert!(is_tile(24, 3));
        assert!(!is_tile(6, 2));
        assert!(!is_tile(0, 2));
        assert!(!is_tile(9, 3));
        assert!(!is_tile(4, 0));
    }
}
