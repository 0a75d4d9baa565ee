//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context: the frame driver owns it
//! and passes it by reference into the tick and the render projection.
//! There are exactly two actors, the player and the granny, plus the
//! static wall list.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::level::Level;
use super::wall::Wall;

/// Behavioral state of the granny AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrannyState {
    /// Wandering on a periodically re-rolled random velocity
    Patrol,
    /// Homing directly on the player's current position
    Chase,
}

impl GrannyState {
    /// Lower-case label for the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            GrannyState::Patrol => "patrol",
            GrannyState::Chase => "chase",
        }
    }
}

/// The player-controlled circle
#[derive(Debug, Clone)]
pub struct Player {
    /// Position (circle center)
    pub pos: Vec2,
    /// Collision radius, fixed for the actor's lifetime
    pub radius: f32,
    /// Base speed, units per tick
    pub speed: f32,
    /// Speed while the sprint modifier is held
    pub sprint_speed: f32,
}

/// The adversary
#[derive(Debug, Clone)]
pub struct Granny {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub state: GrannyState,
    /// Monotonic tick counter gating wander re-rolls
    pub ticks: u32,
    /// Last rolled wander velocity; zero until the first re-roll, so the
    /// granny stands still in patrol until then
    pub wander: Vec2,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for logging/reproducibility
    pub seed: u64,
    /// Playfield bounds (width, height)
    pub bounds: Vec2,
    /// Static obstacles, immutable for the session
    pub walls: Vec<Wall>,
    pub player: Player,
    pub granny: Granny,
    /// Distance below which the granny chases
    pub chase_radius: f32,
    /// Granny tick interval between wander re-rolls
    pub wander_period: u32,
    /// One-way terminal flag: set when the circles overlap, cleared only by
    /// building a fresh state
    pub game_over: bool,
    /// Wander RNG, seeded once per session
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a fresh session from a level description and a run seed.
    pub fn new(level: &Level, seed: u64) -> Self {
        Self {
            seed,
            bounds: level.bounds(),
            walls: level.walls.clone(),
            player: Player {
                pos: level.player_start,
                radius: level.player_radius,
                speed: level.player_speed,
                sprint_speed: level.player_sprint_speed,
            },
            granny: Granny {
                pos: level.granny_start,
                radius: level.granny_radius,
                speed: level.granny_speed,
                state: GrannyState::Patrol,
                ticks: 0,
                wander: Vec2::ZERO,
            },
            chase_radius: level.chase_radius,
            wander_period: level.wander_period,
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
