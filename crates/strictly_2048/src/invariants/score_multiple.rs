//! Score invariant: the score is built only from merges.

use super::Invariant;
use crate::Engine;

/// Invariant: the score is a multiple of `2 * base`.
///
/// Each merge adds `2v` where `v = base * 2^k`, so every increment is a
/// multiple of `2 * base`.
pub struct ScoreMultipleInvariant;

impl Invariant<Engine> for ScoreMultipleInvariant {
    fn holds(engine: &Engine) -> bool {
        let step = engine.config().base().saturating_mul(2);
        step != 0 && engine.score() % step == 0
    }

    fn description() -> &'static str {
        "Score is a multiple of twice the base number"
    }
}
