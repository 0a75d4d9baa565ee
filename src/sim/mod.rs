//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (60 Hz)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drives it by feeding [`InputState`] snapshots into [`tick`] and
//! reading [`GameState`] back out for drawing.

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::{circle_overlaps_wall, resolve_move};
pub use input::InputState;
pub use state::{GameState, Granny, GrannyState, Player};
pub use tick::tick;
pub use wall::Wall;
