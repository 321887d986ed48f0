//! Grid shape invariant: the grid matches its configuration.

use super::Invariant;
use crate::Engine;

/// Invariant: the grid is `size × size` for the configured size, and the
/// size is at least 2.
pub struct GridShapeInvariant;

impl Invariant<Engine> for GridShapeInvariant {
    fn holds(engine: &Engine) -> bool {
        let size = *engine.config().size();
        let grid = engine.grid();
        size >= 2 && grid.size() == size && grid.cells().len() == size * size
    }

    fn description() -> &'static str {
        "Grid is square with the configured size"
    }
}
