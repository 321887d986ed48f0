//! The grid engine: owns the board, score and configuration.

use super::action::{MoveError, MoveSummary, Turn};
use super::config::EngineConfig;
use super::contracts::{Contract, MoveContract};
use super::direction::Direction;
use super::error::EngineError;
use super::rules;
use super::types::{Grid, Position, is_tile};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// A single game of 2048.
///
/// The engine exclusively owns its grid. Collaborators read it through
/// [`Engine::grid`] and change it only through [`Engine::slide`],
/// [`Engine::add_cell`] and [`Engine::play`].
///
/// Turn shape: `slide` then `add_cell`. Game over is not a state of its
/// own; it is `!status()`.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) config: EngineConfig,
    pub(crate) grid: Grid,
    pub(crate) score: u64,
    pub(crate) playable: bool,
    pub(crate) rng: StdRng,
}

impl Engine {
    /// Starts a game on a `size × size` grid with two spawned tiles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` or `base`
    /// falls outside the [`EngineConfig`] bounds.
    #[instrument]
    pub fn new(size: usize, base: u64) -> Result<Self, EngineError> {
        Ok(Self::from_config(EngineConfig::new(size, base)?))
    }

    /// Starts a game from a validated configuration, seeded from entropy.
    #[instrument]
    pub fn from_config(config: EngineConfig) -> Self {
        Self::start(config, StdRng::from_entropy())
    }

    /// Starts a reproducible game: the same seed yields the same spawns.
    #[instrument]
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::start(config, StdRng::seed_from_u64(seed))
    }

    fn start(config: EngineConfig, rng: StdRng) -> Self {
        let mut engine = Self {
            config,
            grid: Grid::new(*config.size()),
            score: 0,
            playable: true,
            rng,
        };
        engine.add_cell();
        engine.add_cell();
        engine.playable = rules::is_playable(&engine.grid);
        info!(size = config.size(), base = config.base(), "New game started");
        engine
    }

    /// Builds an engine around a prescribed grid, with score 0.
    ///
    /// No tiles are spawned. Later spawns draw from a generator seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotSquare`] for ragged rows
    /// - [`EngineError::InvalidConfiguration`] for a row count or base
    ///   outside the [`EngineConfig`] bounds
    /// - [`EngineError::InvalidTile`] for a value that is not `base * 2^k`,
    ///   or whose merge would overflow
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(base: u64, rows: &[Vec<u64>], seed: u64) -> Result<Self, EngineError> {
        let grid = Grid::from_rows(rows)?;
        let config = EngineConfig::new(grid.size(), base)?;

        if let Some(value) = grid
            .cells()
            .iter()
            .copied()
            .find(|v| *v != 0 && (!is_tile(*v, base) || rules::merged_value(*v).is_none()))
        {
            return Err(EngineError::InvalidTile { value, base });
        }

        let playable = rules::is_playable(&grid);
        Ok(Self {
            config,
            grid,
            score: 0,
            playable,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Tile value that wins this game.
    pub fn win_target(&self) -> u64 {
        self.config.win_target()
    }

    /// Recomputes whether any direction can still move, caches and
    /// returns it.
    #[instrument(skip(self))]
    pub fn status(&mut self) -> bool {
        self.playable = rules::is_playable(&self.grid);
        if !self.playable {
            info!(score = self.score, "No moves left");
        }
        self.playable
    }

    /// Result of the last [`Engine::status`] call (or of construction).
    pub fn is_playable(&self) -> bool {
        self.playable
    }

    /// Checks if any tile has reached the winning value.
    #[instrument(skip(self))]
    pub fn has_won(&self) -> bool {
        rules::has_won(&self.grid, *self.config.base())
    }

    /// Directions that would change the grid.
    pub fn legal_directions(&self) -> Vec<Direction> {
        rules::legal_directions(&self.grid)
    }

    /// Checks if sliding in `direction` would change the grid.
    #[instrument(skip(self))]
    pub fn can_move(&self, direction: Direction) -> bool {
        rules::can_move(&self.grid, direction)
    }

    /// Slides and merges every tile toward `direction`, adding merges to
    /// the score.
    ///
    /// A blocked direction is a silent no-op. Use [`Engine::can_move`]
    /// first, or [`Engine::play`], to avoid spawning after a wasted move.
    #[instrument(skip(self))]
    pub fn slide(&mut self, direction: Direction) -> MoveSummary {
        let summary = rules::slide(&mut self.grid, direction);
        self.score = self.score.saturating_add(summary.gained());
        debug!(gained = summary.gained(), score = self.score, "Applied slide");
        summary
    }

    /// Spawns one tile in a random empty cell.
    ///
    /// Returns `None` and leaves the grid unchanged when it is full.
    #[instrument(skip(self))]
    pub fn add_cell(&mut self) -> Option<Position> {
        rules::spawn_tile(&mut self.grid, *self.config.base(), &mut self.rng)
    }

    /// Plays one turn: slide in `direction`, then spawn.
    ///
    /// Postconditions are verified in debug builds.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] when `direction` is blocked, and
    /// [`MoveError::InvariantViolation`] if a postcondition fails. Either
    /// way the game is left as it was before the call.
    #[instrument(skip(self))]
    pub fn play(&mut self, direction: Direction) -> Result<Turn, MoveError> {
        MoveContract::pre(self, &direction)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let summary = self.slide(direction);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, &direction, self) {
                tracing::warn!(error = %e, "Move postcondition failed, rolling back");
                *self = before;
                return Err(e);
            }
        }

        let spawned = self.add_cell();
        Ok(Turn::new(direction, summary, spawned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_has_two_tiles() {
        let engine = Engine::new(4, 2).unwrap();
        assert_eq!(engine.grid().tile_count(), 2);
        assert_eq!(engine.score(), 0);
        assert!(engine.is_playable());
    }

    #[test]
    fn test_new_rejects_tiny_grid() {
        assert_eq!(
            Engine::new(1, 2).unwrap_err(),
            EngineError::InvalidConfiguration { size: 1, base: 2 }
        );
    }

    #[test]
    fn test_seeded_engines_match() {
        let config = EngineConfig::new(5, 3).unwrap();
        let mut a = Engine::seeded(config, 11);
        let mut b = Engine::seeded(config, 11);
        assert_eq!(a.grid(), b.grid());
        for direction in [Direction::Left, Direction::Up, Direction::Right] {
            assert_eq!(a.play(direction).ok(), b.play(direction).ok());
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_from_rows_rejects_foreign_tile() {
        assert_eq!(
            Engine::from_rows(2, &[vec![2, 6], vec![0, 0]], 0).unwrap_err(),
            EngineError::InvalidTile { value: 6, base: 2 }
        );
    }

    #[test]
    fn test_from_rows_rejects_single_cell() {
        assert!(matches!(
            Engine::from_rows(2, &[vec![2]], 0),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_play_rejects_blocked_direction() {
        let mut engine = Engine::from_rows(2, &[vec![2, 0], vec![0, 0]], 0).unwrap();
        let before = engine.grid().clone();
        assert_eq!(
            engine.play(Direction::Left),
            Err(MoveError::NoLegalMove(Direction::Left))
        );
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_play_slides_then_spawns() {
        let mut engine = Engine::from_rows(2, &[vec![2, 2], vec![0, 0]], 0).unwrap();
        let turn = engine.play(Direction::Left).unwrap();
        assert_eq!(turn.summary().gained(), 4);
        assert_eq!(engine.score(), 4);
        assert_eq!(engine.grid().get(Position::new(0, 0)), Some(4));
        assert_eq!(engine.grid().tile_count(), 2);
        assert!(turn.spawned().is_some());
    }

    #[test]
    fn test_from_rows_rejects_tile_too_large_to_merge() {
        let huge = 1u64 << 63;
        assert_eq!(
            Engine::from_rows(2, &[vec![huge, huge], vec![0, 0]], 0).unwrap_err(),
            EngineError::InvalidTile {
                value: huge,
                base: 2
            }
        );
        assert!(Engine::from_rows(2, &[vec![1 << 62, 1 << 62], vec![0, 0]], 0).is_ok());
    }

    #[test]
    fn test_large_base_spawns_without_overflow() {
        let config = EngineConfig::new(4, crate::MAX_BASE).unwrap();
        for seed in 0..20 {
            let engine = Engine::seeded(config, seed);
            assert_eq!(engine.grid().tile_count(), 2);
            assert!(
                engine
                    .grid()
                    .cells()
                    .iter()
                    .all(|v| *v == 0 || *v == crate::MAX_BASE || *v == crate::MAX_BASE * 2)
            );
        }
    }

    #[test]
    fn test_legal_directions_match_can_move() {
        let engine = Engine::from_rows(2, &[vec![0, 0], vec![0, 2]], 0).unwrap();
        assert_eq!(
            engine.legal_directions(),
            vec![Direction::Up, Direction::Left]
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_rolls_back() {
        let mut engine = Engine::from_rows(2, &[vec![2, 2], vec![0, 0]], 0).unwrap();
        engine.grid.set(Position::new(1, 1), 6);
        let before = engine.grid().clone();

        let result = engine.play(Direction::Left);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_status_caches_result() {
        let mut engine = Engine::from_rows(2, &[vec![2, 4], vec![4, 0]], 0).unwrap();
        assert!(engine.is_playable());
        engine.grid.set(Position::new(1, 1), 2);
        assert!(engine.is_playable());
        assert!(!engine.status());
        assert!(!engine.is_playable());
    }
}
