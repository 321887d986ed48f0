//! Movability and terminal-state detection.

use super::slide::merged_value;
use crate::direction::Direction;
use crate::types::Grid;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if sliding in `direction` would change the grid.
///
/// True iff some tile has a neighbor toward `direction` that is empty or
/// holds the same value (and that merge fits in a `u64`). A missing
/// neighbor (grid edge) never qualifies.
#[instrument(skip(grid))]
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let size = grid.size();
    grid.positions().any(|pos| {
        let value = grid.at(pos);
        value != 0
            && direction.neighbor(pos, size).is_some_and(|target| {
                let neighbor = grid.at(target);
                neighbor == 0 || (neighbor == value && merged_value(value).is_some())
            })
    })
}

/// Checks if at least one direction would change the grid.
#[instrument(skip(grid))]
pub fn is_playable(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|d| can_move(grid, *d))
}

/// Directions that would change the grid, in declaration order.
#[instrument(skip(grid))]
pub fn legal_directions(grid: &Grid) -> Vec<Direction> {
    Direction::iter().filter(|d| can_move(grid, *d)).collect()
}
