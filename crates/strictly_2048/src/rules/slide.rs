//! The slide/merge algorithm.
//!
//! One procedure serves all four directions. Each sweep visits cells in
//! [`Direction::sweep_order`] and shifts every tile at most one step toward
//! the target edge, so `size - 1` sweeps settle the longest possible lane.

use crate::action::MoveSummary;
use crate::direction::Direction;
use crate::types::{Grid, Position};
use tracing::{debug, instrument, trace};

/// Positions that absorbed a merge during the current move.
///
/// Keyed by position, not tile identity. A position in the record may not
/// take part in a second merge in the same move, in either role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    size: usize,
    merged: Vec<bool>,
}

impl MergeRecord {
    /// Creates an empty record for a grid of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            merged: vec![false; size * size],
        }
    }

    /// Checks if a position has already merged this move.
    pub fn contains(&self, pos: Position) -> bool {
        self.merged[pos.row * self.size + pos.col]
    }

    /// Marks a position as merged.
    pub fn insert(&mut self, pos: Position) {
        self.merged[pos.row * self.size + pos.col] = true;
    }
}

/// Value two equal `value` tiles merge into, or `None` if it would
/// overflow. Such tiles stay apart.
pub fn merged_value(value: u64) -> Option<u64> {
    value.checked_mul(2)
}

/// Slides every tile toward `direction`, merging equal neighbors once.
///
/// The grid is mutated in place. If no tile can move the grid is left
/// untouched and the summary reports `changed == false`.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn slide(grid: &mut Grid, direction: Direction) -> MoveSummary {
    let size = grid.size();
    let order = direction.sweep_order(size);
    let mut record = MergeRecord::new(size);
    let mut merges = Vec::new();
    let mut changed = false;

    for sweep in 1..size {
        for &pos in &order {
            let value = grid.at(pos);
            if value == 0 {
                continue;
            }
            let Some(target) = direction.neighbor(pos, size) else {
                continue;
            };

            let neighbor = grid.at(target);
            if neighbor == 0 {
                grid.set(target, value);
                grid.set(pos, 0);
                changed = true;
            } else if neighbor == value && !record.contains(pos) && !record.contains(target) {
                let Some(merged) = merged_value(value) else {
                    continue;
                };
                record.insert(target);
                grid.set(target, merged);
                grid.set(pos, 0);
                merges.push(merged);
                changed = true;
                trace!(sweep, %pos, %target, merged, "Merged tiles");
            }
        }
    }

    debug!(merges = merges.len(), changed, "Slide complete");
    MoveSummary::new(merges, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(rows: &[Vec<u64>], direction: Direction) -> (Vec<Vec<u64>>, MoveSummary) {
        let mut grid = Grid::from_rows(rows).unwrap();
        let summary = slide(&mut grid, direction);
        (grid.to_rows(), summary)
    }

    #[test]
    fn test_three_in_a_row_merges_once() {
        let (rows, summary) = slid(
            &[
                vec![2, 2, 2, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            Direction::Left,
        );
        assert_eq!(rows[0], vec![4, 2, 0, 0]);
        assert_eq!(summary.merges(), &vec![4]);
        assert_eq!(summary.gained(), 4);
    }

    #[test]
    fn test_three_in_a_row_right() {
        let (rows, summary) = slid(&[vec![0, 2, 2, 2], vec![0, 0, 0, 0], vec![0; 4], vec![0; 4]], Direction::Right);
        assert_eq!(rows[0], vec![0, 0, 2, 4]);
        assert_eq!(summary.gained(), 4);
    }

    #[test]
    fn test_merged_tile_does_not_chain() {
        let (rows, _) = slid(&[vec![2, 2, 4], vec![0, 0, 0], vec![0, 0, 0]], Direction::Left);
        assert_eq!(rows[0], vec![4, 4, 0]);
    }

    #[test]
    fn test_two_pairs_merge_independently() {
        let (rows, summary) = slid(&[vec![4, 4, 8, 8], vec![0; 4], vec![0; 4], vec![0; 4]], Direction::Left);
        assert_eq!(rows[0], vec![8, 16, 0, 0]);
        assert_eq!(summary.merges(), &vec![8, 16]);
        assert_eq!(summary.gained(), 24);
    }

    #[test]
    fn test_gap_closes_before_merge() {
        let (rows, summary) = slid(&[vec![2, 0, 2, 4], vec![0; 4], vec![0; 4], vec![0; 4]], Direction::Left);
        assert_eq!(rows[0], vec![4, 4, 0, 0]);
        assert_eq!(summary.gained(), 4);
    }

    #[test]
    fn test_tiles_travel_full_lane() {
        let (rows, summary) = slid(
            &[vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![8, 0, 0, 2]],
            Direction::Up,
        );
        assert_eq!(rows[0], vec![8, 0, 0, 2]);
        assert_eq!(rows[3], vec![0, 0, 0, 0]);
        assert!(summary.merges().is_empty());
        assert!(*summary.changed());
    }

    #[test]
    fn test_column_down() {
        let (rows, summary) = slid(
            &[vec![2, 0, 0], vec![2, 0, 0], vec![2, 0, 0]],
            Direction::Down,
        );
        assert_eq!(
            rows,
            vec![vec![0, 0, 0], vec![2, 0, 0], vec![4, 0, 0]]
        );
        assert_eq!(summary.gained(), 4);
    }

    #[test]
    fn test_blocked_move_leaves_grid_unchanged() {
        let rows = vec![vec![2, 4], vec![4, 2]];
        let (after, summary) = slid(&rows, Direction::Left);
        assert_eq!(after, rows);
        assert!(!*summary.changed());
        assert_eq!(summary.gained(), 0);
    }

    #[test]
    fn test_merge_record() {
        let mut record = MergeRecord::new(3);
        assert!(!record.contains(Position::new(2, 1)));
        record.insert(Position::new(2, 1));
        assert!(record.contains(Position::new(2, 1)));
        assert!(!record.contains(Position::new(1, 2)));
    }

    #[test]
    fn test_overflowing_tiles_do_not_merge() {
        let top = 1u64 << 63;
        let rows = vec![vec![top, top], vec![0, 0]];
        let (after, summary) = slid(&rows, Direction::Left);
        assert_eq!(after, rows);
        assert!(!*summary.changed());
        assert_eq!(summary.gained(), 0);
    }

    #[test]
    fn test_largest_mergeable_tile() {
        let (after, summary) = slid(&[vec![1 << 62, 1 << 62], vec![0, 0]], Direction::Left);
        assert_eq!(after[0], vec![1 << 63, 0]);
        assert_eq!(summary.gained(), 1 << 63);
    }
}
