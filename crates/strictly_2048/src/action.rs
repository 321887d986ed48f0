//! Results of moves and turns, and the errors they can raise.
//!
//! A slide is reported as a first-class value rather than only as a grid
//! mutation, so callers can log merges and check score deltas.

use super::direction::Direction;
use super::types::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// What a single slide did to the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveSummary {
    /// Value produced by each merge, in the order the merges happened.
    merges: Vec<u64>,
    /// Whether any tile slid or merged.
    changed: bool,
}

impl MoveSummary {
    /// Score earned by this slide: the sum of every merged value.
    pub fn gained(&self) -> u64 {
        self.merges.iter().sum()
    }
}

/// A complete turn: slide, then spawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Turn {
    /// Direction played.
    direction: Direction,
    /// Result of the slide.
    summary: MoveSummary,
    /// Where the follow-up tile spawned, if the grid had room.
    spawned: Option<Position>,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (+{}, {} merges)",
            self.direction,
            self.summary.gained(),
            self.summary.merges.len()
        )
    }
}

/// Error that can occur when validating or applying a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Sliding this way would not change the grid.
    #[display("Cannot move {}", _0)]
    NoLegalMove(Direction),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
