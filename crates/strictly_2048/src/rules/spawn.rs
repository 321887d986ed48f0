//! Random tile spawns.

use crate::types::{Grid, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Out of ten spawns, how many get the base value (the rest get double).
const BASE_SPAWNS_PER_TEN: u32 = 9;

/// Positions a new tile could spawn into.
pub fn empty_cells(grid: &Grid) -> Vec<Position> {
    grid.empty_positions()
}

/// Draws a spawn value: `base` 90% of the time, `2 * base` otherwise.
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R, base: u64) -> u64 {
    if rng.gen_range(0..10) < BASE_SPAWNS_PER_TEN {
        base
    } else {
        base * 2
    }
}

/// Places one tile in a uniformly chosen empty cell.
///
/// Returns the chosen position, or `None` without touching the grid when
/// there is no empty cell.
#[instrument(skip(grid, rng))]
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, base: u64, rng: &mut R) -> Option<Position> {
    let empty = empty_cells(grid);
    let Some(&pos) = empty.choose(rng) else {
        debug!("Grid full, nothing spawned");
        return None;
    };

    let value = spawn_value(rng, base);
    grid.set(pos, value);
    debug!(%pos, value, "Spawned tile");
    Some(pos)
}
