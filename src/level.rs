//! Data-driven level geometry and tuning
//!
//! A `Level` fixes everything the simulation needs at startup: playfield
//! bounds, the static wall list, spawn positions, and actor tuning. It is
//! immutable once a `GameState` has been built from it. The default level
//! is the shipped layout; hosts may override it with a JSON blob.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Wall;

/// Complete static description of a playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    /// Playfield width in world units (pixels at 1:1 canvas scale)
    pub width: f32,
    /// Playfield height
    pub height: f32,
    /// Static obstacles, in draw order
    pub walls: Vec<Wall>,
    /// Player spawn (circle center)
    pub player_start: Vec2,
    pub player_radius: f32,
    /// Base player speed, units per tick
    pub player_speed: f32,
    /// Player speed while the sprint modifier is held
    pub player_sprint_speed: f32,
    /// Granny spawn (circle center)
    pub granny_start: Vec2,
    pub granny_radius: f32,
    pub granny_speed: f32,
    /// Distance below which the granny chases instead of patrolling
    pub chase_radius: f32,
    /// Granny tick interval between wander velocity re-rolls
    pub wander_period: u32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            walls: vec![
                Wall::new(200.0, 60.0, 30.0, 280.0),
                Wall::new(420.0, 220.0, 260.0, 30.0),
                Wall::new(650.0, 60.0, 30.0, 260.0),
            ],
            player_start: PLAYER_START,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_sprint_speed: PLAYER_SPRINT_SPEED,
            granny_start: GRANNY_START,
            granny_radius: GRANNY_RADIUS,
            granny_speed: GRANNY_SPEED,
            chase_radius: CHASE_RADIUS,
            wander_period: WANDER_PERIOD,
        }
    }
}

impl Level {
    /// Parse a level from JSON. Missing fields fall back to the defaults,
    /// so an override blob only has to name what it changes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Playfield bounds as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_layout() {
        let level = Level::default();
        assert_eq!(level.bounds(), Vec2::new(900.0, 500.0));
        assert_eq!(level.walls.len(), 3);
        // Walls must lie inside the playfield
        for wall in &level.walls {
            assert!(wall.min().cmpge(Vec2::ZERO).all());
            assert!(wall.max().cmple(level.bounds()).all());
        }
        // Spawns must respect the bounds invariant from the start
        let p = level.player_start;
        let r = level.player_radius;
        assert!(p.x >= r && p.x <= level.width - r);
        assert!(p.y >= r && p.y <= level.height - r);
    }

    #[test]
    fn test_from_json_partial_override() {
        let level = Level::from_json(r#"{ "granny_speed": 2.5, "walls": [] }"#).unwrap();
        assert_eq!(level.granny_speed, 2.5);
        assert!(level.walls.is_empty());
        // Untouched fields keep their defaults
        assert_eq!(level.width, 900.0);
        assert_eq!(level.chase_radius, 220.0);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Level::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_json_wall_list() {
        let level = Level::from_json(
            r#"{ "walls": [ { "x": 10.0, "y": 20.0, "w": 30.0, "h": 40.0 } ] }"#,
        )
        .unwrap();
        assert_eq!(level.walls.len(), 1);
        assert_eq!(level.walls[0].max(), Vec2::new(40.0, 60.0));
    }
}
