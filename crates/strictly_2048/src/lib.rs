//! Strictly 2048 - pure grid engine for the 2048 sliding puzzle
//!
//! The engine owns a square grid of tiles, slides and merges them in one of
//! four directions, spawns new tiles, and answers the terminal questions
//! (can this direction move, is the game still playable, has it been won).
//! It performs no I/O.
//!
//! # Architecture
//!
//! - **Engine**: owns grid, score and configuration
//! - **Rules**: pure functions the engine delegates to
//! - **Invariants / Contracts**: properties checked after every move in
//!   debug builds
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Engine, EngineConfig};
//!
//! let mut engine = Engine::seeded(EngineConfig::default(), 7);
//! assert_eq!(engine.grid().tile_count(), 2);
//!
//! for direction in Direction::ALL {
//!     if engine.can_move(direction) {
//!         let turn = engine.play(direction).unwrap();
//!         println!("{turn}, score {}", engine.score());
//!         break;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod direction;
mod engine;
mod error;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use engine::Engine;

// Crate-level exports - Configuration
pub use config::{DEFAULT_BASE, DEFAULT_SIZE, EngineConfig, MAX_BASE, MAX_SIZE, WIN_MULTIPLIER};

// Crate-level exports - Domain types
pub use direction::Direction;
pub use types::{Grid, Position, is_tile};

// Crate-level exports - Moves and errors
pub use action::{MoveError, MoveSummary, Turn};
pub use error::EngineError;
