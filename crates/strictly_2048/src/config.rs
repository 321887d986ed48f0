//! Engine configuration.

use super::error::EngineError;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Default grid side length.
pub const DEFAULT_SIZE: usize = 4;

/// Default base number (smallest spawnable tile).
pub const DEFAULT_BASE: u64 = 2;

/// Winning tile is `base * WIN_MULTIPLIER`, regardless of grid size.
pub const WIN_MULTIPLIER: u64 = 1024;

/// Largest accepted grid side length.
pub const MAX_SIZE: usize = 16;

/// Largest accepted base number. Keeps spawns and the win target well
/// inside `u64`.
pub const MAX_BASE: u64 = 1 << 32;

/// Grid size and base number. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct EngineConfig {
    /// Side length of the square grid.
    size: usize,
    /// Smallest spawnable tile; also scales the winning threshold.
    base: u64,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] unless `size` is in
    /// `2..=MAX_SIZE` and `base` in `1..=MAX_BASE`.
    #[instrument]
    pub fn new(size: usize, base: u64) -> Result<Self, EngineError> {
        if !(2..=MAX_SIZE).contains(&size) || !(1..=MAX_BASE).contains(&base) {
            debug!("Rejecting configuration");
            return Err(EngineError::InvalidConfiguration { size, base });
        }
        Ok(Self { size, base })
    }

    /// Tile value that wins the game.
    pub fn win_target(&self) -> u64 {
        self.base * WIN_MULTIPLIER
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            base: DEFAULT_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_game() {
        let config = EngineConfig::default();
        assert_eq!(*config.size(), 4);
        assert_eq!(*config.base(), 2);
        assert_eq!(config.win_target(), 2048);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert_eq!(
            EngineConfig::new(1, 2),
            Err(EngineError::InvalidConfiguration { size: 1, base: 2 })
        );
        assert!(EngineConfig::new(0, 2).is_err());
        assert!(EngineConfig::new(2, 2).is_ok());
    }

    #[test]
    fn test_rejects_zero_base() {
        assert!(EngineConfig::new(4, 0).is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(EngineConfig::new(MAX_SIZE, 2).is_ok());
        assert_eq!(
            EngineConfig::new(MAX_SIZE + 1, 2),
            Err(EngineError::InvalidConfiguration {
                size: MAX_SIZE + 1,
                base: 2
            })
        );
        assert!(EngineConfig::new(1 << 33, 2).is_err());
    }

    #[test]
    fn test_rejects_base_that_would_overflow() {
        let config = EngineConfig::new(4, MAX_BASE).unwrap();
        assert_eq!(config.win_target(), MAX_BASE * 1024);
        assert!(EngineConfig::new(4, MAX_BASE + 1).is_err());
        assert!(EngineConfig::new(4, u64::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_win_target_ignores_size() {
        let small = EngineConfig::new(4, 3).unwrap();
        let large = EngineConfig::new(10, 3).unwrap();
        assert_eq!(small.win_target(), 3072);
        assert_eq!(large.win_target(), small.win_target());
    }
}
