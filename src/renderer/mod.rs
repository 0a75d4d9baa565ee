//! Scene rendering module
//!
//! Projects a [`GameState`] onto an immediate-mode [`DrawSurface`]. The sim
//! never draws; a frame is a pure function of the current state, so backends
//! only have to implement four primitives.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::{GameState, GrannyState};

// ============================================================================
// PALETTE
// ============================================================================

/// Arena floor fill
pub const FLOOR_COLOR: &str = "#070707";
/// Wall fill
pub const WALL_COLOR: &str = "#333";
/// Player disc
pub const PLAYER_COLOR: &str = "#3af";
/// Granny disc while chasing
pub const GRANNY_CHASE_COLOR: &str = "#f33";
/// Granny disc while patrolling
pub const GRANNY_PATROL_COLOR: &str = "#b22";
/// HUD status line
pub const HUD_COLOR: &str = "#0f0";
/// Game-over overlay text
pub const OVERLAY_COLOR: &str = "#fff";

/// HUD status line font
pub const HUD_FONT: &str = "16px monospace";
/// Game-over banner font
pub const OVERLAY_TITLE_FONT: &str = "44px monospace";
/// Restart hint font
pub const OVERLAY_HINT_FONT: &str = "18px monospace";

/// Game-over banner position
const OVERLAY_TITLE_POS: Vec2 = Vec2::new(250.0, 250.0);
/// Restart hint position
const OVERLAY_HINT_POS: Vec2 = Vec2::new(350.0, 285.0);

/// Immediate-mode drawing primitives the renderer emits into.
///
/// Text positions are baseline-anchored, matching Canvas2D `fillText`.
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Draws one complete frame: floor, walls, both actors, the HUD status line,
/// and the game-over overlay once the player has been caught.
pub fn render(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear();

    surface.fill_rect(Vec2::ZERO, state.bounds, FLOOR_COLOR);

    for wall in &state.walls {
        surface.fill_rect(wall.min(), wall.size(), WALL_COLOR);
    }

    surface.fill_circle(state.player.pos, state.player.radius, PLAYER_COLOR);

    let granny_color = match state.granny.state {
        GrannyState::Chase => GRANNY_CHASE_COLOR,
        GrannyState::Patrol => GRANNY_PATROL_COLOR,
    };
    surface.fill_circle(state.granny.pos, state.granny.radius, granny_color);

    let hud = format!("State: {}", state.granny.state.as_str());
    surface.fill_text(
        &hud,
        Vec2::new(10.0, state.bounds.y - 14.0),
        HUD_FONT,
        HUD_COLOR,
    );

    if state.game_over {
        surface.fill_text(
            "YOU GOT TEMU'D",
            OVERLAY_TITLE_POS,
            OVERLAY_TITLE_FONT,
            OVERLAY_COLOR,
        );
        surface.fill_text(
            "Refresh to try again.",
            OVERLAY_HINT_POS,
            OVERLAY_HINT_FONT,
            OVERLAY_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Rect { pos: Vec2, size: Vec2, color: String },
        Circle { center: Vec2, radius: f32, color: String },
        Text { text: String, pos: Vec2, font: String, color: String },
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.calls.push(Call::Rect {
                pos,
                size,
                color: color.to_string(),
            });
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.calls.push(Call::Circle {
                center,
                radius,
                color: color.to_string(),
            });
        }

        fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
            self.calls.push(Call::Text {
                text: text.to_string(),
                pos,
                font: font.to_string(),
                color: color.to_string(),
            });
        }
    }

    fn new_state() -> GameState {
        GameState::new(&Level::default(), 7)
    }

    #[test]
    fn test_frame_draw_order() {
        let state = new_state();
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);

        // clear, floor, 3 walls, player, granny, HUD; no overlay yet
        assert_eq!(surface.calls.len(), 8);
        assert_eq!(surface.calls[0], Call::Clear);
        assert_eq!(
            surface.calls[1],
            Call::Rect {
                pos: Vec2::ZERO,
                size: state.bounds,
                color: FLOOR_COLOR.to_string(),
            }
        );
        for call in &surface.calls[2..5] {
            assert!(matches!(call, Call::Rect { color, .. } if color == WALL_COLOR));
        }
        assert!(matches!(
            &surface.calls[5],
            Call::Circle { color, .. } if color == PLAYER_COLOR
        ));
        assert!(matches!(
            &surface.calls[6],
            Call::Circle { color, .. } if color == GRANNY_PATROL_COLOR
        ));
        assert!(matches!(&surface.calls[7], Call::Text { .. }));
    }

    #[test]
    fn test_wall_rects_match_state() {
        let state = new_state();
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);

        let wall = &state.walls[0];
        assert_eq!(
            surface.calls[2],
            Call::Rect {
                pos: wall.min(),
                size: wall.size(),
                color: WALL_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn test_granny_color_tracks_state() {
        let mut state = new_state();
        state.granny.state = GrannyState::Chase;
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);

        assert!(surface.calls.iter().any(|c| matches!(
            c,
            Call::Circle { color, .. } if color == GRANNY_CHASE_COLOR
        )));
        assert!(!surface.calls.iter().any(|c| matches!(
            c,
            Call::Circle { color, .. } if color == GRANNY_PATROL_COLOR
        )));
    }

    #[test]
    fn test_hud_reads_granny_state() {
        let state = new_state();
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);

        let expected_pos = Vec2::new(10.0, state.bounds.y - 14.0);
        assert!(surface.calls.iter().any(|c| matches!(
            c,
            Call::Text { text, pos, font, color }
                if text == "State: patrol"
                    && *pos == expected_pos
                    && font == HUD_FONT
                    && color == HUD_COLOR
        )));
    }

    #[test]
    fn test_overlay_only_when_game_over() {
        let mut state = new_state();
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);
        assert!(!surface
            .calls
            .iter()
            .any(|c| matches!(c, Call::Text { text, .. } if text == "YOU GOT TEMU'D")));

        state.game_over = true;
        let mut surface = RecordingSurface::default();
        render(&state, &mut surface);

        let texts: Vec<&Call> = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Text { .. }))
            .collect();
        assert_eq!(texts.len(), 3);
        assert!(matches!(
            texts[1],
            Call::Text { text, font, color, .. }
                if text == "YOU GOT TEMU'D"
                    && font == OVERLAY_TITLE_FONT
                    && color == OVERLAY_COLOR
        ));
        assert!(matches!(
            texts[2],
            Call::Text { text, font, .. }
                if text == "Refresh to try again."
                    && font == OVERLAY_HINT_FONT
        ));
    }
}
