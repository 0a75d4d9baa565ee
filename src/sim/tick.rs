//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically: player
//! motion from the held keys, granny AI and motion, then the lose check.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_move;
use super::input::InputState;
use super::state::{GameState, GrannyState};

/// Advance the game state by one fixed 60 Hz tick.
///
/// Once `game_over` is set the step is a no-op and the state stays frozen
/// until the session is rebuilt.
///
/// The chase/patrol decision samples the player-granny distance after the
/// player has moved but before the granny does, so the granny always reacts
/// to the player's current position with no lag.
pub fn tick(state: &mut GameState, input: &InputState) {
    if state.game_over {
        return;
    }

    // Player motion
    let speed = if input.is_held("shift") {
        state.player.sprint_speed
    } else {
        state.player.speed
    };
    let mut delta = Vec2::ZERO;
    if input.is_held("w") {
        delta.y -= speed;
    }
    if input.is_held("s") {
        delta.y += speed;
    }
    if input.is_held("a") {
        delta.x -= speed;
    }
    if input.is_held("d") {
        delta.x += speed;
    }
    // Both components carry equal magnitude here, so scaling by 1/√2 makes
    // diagonal speed equal axial speed. Not a general normalize.
    if delta.x != 0.0 && delta.y != 0.0 {
        delta *= FRAC_1_SQRT_2;
    }
    state.player.pos = resolve_move(
        state.player.pos,
        state.player.radius,
        delta,
        &state.walls,
        state.bounds,
    );

    // Granny AI: chase when close, wander otherwise
    state.granny.ticks += 1;
    let dist = state.player.pos.distance(state.granny.pos);

    let velocity = if dist < state.chase_radius {
        state.granny.state = GrannyState::Chase;
        // Instantaneous homing on the player's current position
        (state.player.pos - state.granny.pos).normalize_or_zero() * state.granny.speed
    } else {
        state.granny.state = GrannyState::Patrol;
        if state.granny.ticks % state.wander_period == 0 {
            let speed = state.granny.speed;
            state.granny.wander = Vec2::new(
                state.rng.random_range(-speed..=speed),
                state.rng.random_range(-speed..=speed),
            );
        }
        state.granny.wander
    };

    state.granny.pos = resolve_move(
        state.granny.pos,
        state.granny.radius,
        velocity,
        &state.walls,
        state.bounds,
    );

    // Lose condition: the circles overlap
    if state.player.pos.distance(state.granny.pos) < state.player.radius + state.granny.radius {
        state.game_over = true;
    }
}
