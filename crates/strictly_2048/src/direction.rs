//! Slide directions and the geometry each one implies.

use super::types::Position;
use serde::{Deserialize, Serialize};

/// Direction the whole grid is tilted in.
///
/// Besides naming the move, a direction knows which neighbor a cell
/// slides into and the order cells must be visited in so that the
/// neighbor toward the target edge is always settled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    /// Row/column step toward the target edge.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True for directions that move tiles along columns.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The neighbor one step toward the target edge.
    ///
    /// Returns `None` at the boundary: there is no wraparound.
    pub fn neighbor(self, pos: Position, size: usize) -> Option<Position> {
        let (dr, dc) = self.offset();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        (row < size && col < size).then(|| Position::new(row, col))
    }

    /// Cells of one lane (a column for vertical moves, a row otherwise).
    pub fn lane(self, index: usize, size: usize) -> impl Iterator<Item = Position> {
        let vertical = self.is_vertical();
        (0..size).map(move |depth| {
            if vertical {
                Position::new(depth, index)
            } else {
                Position::new(index, depth)
            }
        })
    }

    /// Visit order for one sweep of the slide algorithm.
    ///
    /// Cells on the target edge are skipped since they have no neighbor to
    /// move into. Remaining cells are ordered nearest-the-edge first.
    pub fn sweep_order(self, size: usize) -> Vec<Position> {
        let depths: Vec<usize> = match self {
            Direction::Up | Direction::Left => (1..size).collect(),
            Direction::Down | Direction::Right => (0..size.saturating_sub(1)).rev().collect(),
        };

        let vertical = self.is_vertical();
        depths
            .into_iter()
            .flat_map(|depth| {
                (0..size).map(move |lane| {
                    if vertical {
                        Position::new(depth, lane)
                    } else {
                        Position::new(lane, depth)
                    }
                })
            })
            .collect()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
