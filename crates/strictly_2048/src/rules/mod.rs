//! Game rules for 2048.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! the engine that owns the grid so contracts and tests can compose them.

pub mod movability;
pub mod slide;
pub mod spawn;
pub mod win;

pub use movability::{can_move, is_playable, legal_directions};
pub use slide::{MergeRecord, merged_value, slide};
pub use spawn::{empty_cells, spawn_tile, spawn_value};
pub use win::{has_won, win_target};
