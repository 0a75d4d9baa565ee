//! Granny Chase - a top-down chase/evade arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, movement, collision, pursuit AI)
//! - `renderer`: Stateless draw-call projection of simulation state
//! - `level`: Data-driven playfield geometry and tuning
//!
//! The simulation advances in fixed 60 Hz ticks driven by the host frame
//! loop; all speeds are displacement magnitudes per tick.

pub mod level;
pub mod renderer;
pub mod sim;

pub use level::Level;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz; speeds below are per-tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 6;

    /// Playfield dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_START: Vec2 = Vec2::new(120.0, 120.0);
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const PLAYER_SPEED: f32 = 2.2;
    pub const PLAYER_SPRINT_SPEED: f32 = 3.6;

    /// Granny defaults
    pub const GRANNY_START: Vec2 = Vec2::new(760.0, 380.0);
    pub const GRANNY_RADIUS: f32 = 16.0;
    pub const GRANNY_SPEED: f32 = 1.6;

    /// Distance below which the granny switches from patrol to chase
    pub const CHASE_RADIUS: f32 = 220.0;
    /// Patrol wander velocity is re-rolled every this many granny ticks
    pub const WANDER_PERIOD: u32 = 90;
}
