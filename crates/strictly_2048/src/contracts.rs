//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::MoveError;
use super::direction::Direction;
use super::engine::Engine;
use super::invariants::{EngineInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: sliding in the direction must change the grid.
pub struct DirectionIsOpen;

impl DirectionIsOpen {
    /// Rejects a direction in which nothing can slide or merge.
    #[instrument(skip(engine))]
    pub fn check(direction: Direction, engine: &Engine) -> Result<(), MoveError> {
        if engine.can_move(direction) {
            Ok(())
        } else {
            Err(MoveError::NoLegalMove(direction))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: the score never decreases.
pub struct ScoreMonotonic;

impl ScoreMonotonic {
    /// Checks that `after` has at least the score of `before`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Engine, after: &Engine) -> bool {
        let valid = after.score() >= before.score();
        if !valid {
            warn!(
                before = before.score(),
                after = after.score(),
                "Score decreased"
            );
        }
        valid
    }
}

/// Postcondition: no tile merged twice in one move.
///
/// In every lane along the move axis, the largest value after the slide is
/// at most twice the largest value before it.
pub struct MergeOnce;

impl MergeOnce {
    /// Compares lane maxima before and after a slide in `direction`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Engine, direction: Direction, after: &Engine) -> bool {
        let size = before.grid().size();
        (0..size).all(|lane| {
            let lane_max = |engine: &Engine| {
                direction
                    .lane(lane, size)
                    .filter_map(|pos| engine.grid().get(pos))
                    .max()
                    .unwrap_or(0)
            };
            let (was, now) = (lane_max(before), lane_max(after));
            let valid = now <= was.saturating_mul(2);
            if !valid {
                warn!(lane, was, now, "Lane merged more than once");
            }
            valid
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for slides.
///
/// Preconditions:
/// - The direction is open
///
/// Postconditions:
/// - Score did not decrease
/// - No lane merged a tile twice
/// - All engine invariants hold
pub struct MoveContract;

impl Contract<Engine, Direction> for MoveContract {
    fn pre(engine: &Engine, direction: &Direction) -> Result<(), MoveError> {
        DirectionIsOpen::check(*direction, engine)
    }

    fn post(before: &Engine, direction: &Direction, after: &Engine) -> Result<(), MoveError> {
        if !ScoreMonotonic::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: score decreased".to_string(),
            ));
        }

        if !MergeOnce::holds(before, *direction, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: tile merged more than once".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
