//! Engine construction errors.

use derive_more::{Display, Error};

/// Error raised when an engine or grid cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Size outside `2..=MAX_SIZE` or base outside `1..=MAX_BASE`.
    #[display(
        "Invalid configuration: size {size}, base {base} (size must be 2 to {}, base 1 to {})",
        crate::MAX_SIZE,
        crate::MAX_BASE
    )]
    InvalidConfiguration {
        /// Requested grid size.
        size: usize,
        /// Requested base number.
        base: u64,
    },

    /// Rows of differing length.
    #[display("Grid is not square: row {row} has {len} cells, expected {rows}")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },

    /// A cell value that is not `base * 2^k`, or too large to merge.
    #[display("Tile {value} is not a mergeable power-of-two multiple of {base}")]
    InvalidTile {
        /// The rejected value.
        value: u64,
        /// Base number of the engine.
        base: u64,
    },
}
