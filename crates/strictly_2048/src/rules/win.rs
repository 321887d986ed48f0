//! Win detection.

use crate::config::WIN_MULTIPLIER;
use crate::types::Grid;
use tracing::instrument;

/// Tile value that wins a game played with `base`.
pub fn win_target(base: u64) -> u64 {
    base.saturating_mul(WIN_MULTIPLIER)
}

/// Checks if any cell has reached the winning value.
///
/// This is a pure predicate over the current grid, not a latch: callers
/// that want a one-time announcement track that themselves.
#[instrument(skip(grid))]
pub fn has_won(grid: &Grid, base: u64) -> bool {
    let target = win_target(base);
    grid.cells().iter().any(|v| *v >= target)
}
