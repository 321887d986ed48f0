//! Power-of-base invariant: every tile is `base * 2^k`.

use super::Invariant;
use crate::Engine;
use crate::types::is_tile;

/// Invariant: every non-empty cell holds `base * 2^k` for some `k ≥ 0`.
///
/// Spawns write `base` or `2 * base`, and merges only ever double a
/// value, so nothing else can appear on the grid.
pub struct PowerOfBaseInvariant;

impl Invariant<Engine> for PowerOfBaseInvariant {
    fn holds(engine: &Engine) -> bool {
        let base = *engine.config().base();
        engine
            .grid()
            .cells()
            .iter()
            .all(|v| *v == 0 || is_tile(*v, base))
    }

    fn description() -> &'static str {
        "Every tile is a power-of-two multiple of the base number"
    }
}
