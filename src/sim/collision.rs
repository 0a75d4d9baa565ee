//! Circle-vs-wall collision detection and movement resolution
//!
//! Displacements are resolved one axis at a time: an axis move that would
//! overlap any wall is reverted outright for that tick. Axis separation is
//! what lets an actor slide along a wall face when pushing into it
//! diagonally.

use glam::Vec2;

use super::wall::Wall;

/// Check whether a circle overlaps a wall.
///
/// Standard closest-point test: clamp the circle center into the wall's
/// bounds on each axis and compare the distance to the radius. Containment
/// counts as overlap; exact tangency does not (strict `<`).
#[inline]
pub fn circle_overlaps_wall(center: Vec2, radius: f32, wall: &Wall) -> bool {
    let nearest = center.clamp(wall.min(), wall.max());
    nearest.distance_squared(center) < radius * radius
}

/// Apply a displacement to a circle with axis-separated wall collision.
///
/// First `delta.x` is applied; if the circle then overlaps any wall, the x
/// displacement is reverted entirely (never partially). `delta.y` follows
/// under the same rule. The result is finally clamped into
/// `[radius, bounds - radius]` on both axes so actors stay inside the
/// playfield.
///
/// Because the revert is all-or-nothing, an actor can come to rest a
/// fraction short of a wall face rather than flush against it.
pub fn resolve_move(pos: Vec2, radius: f32, delta: Vec2, walls: &[Wall], bounds: Vec2) -> Vec2 {
    let mut next = pos;

    next.x += delta.x;
    if walls.iter().any(|w| circle_overlaps_wall(next, radius, w)) {
        next.x = pos.x;
    }

    next.y += delta.y;
    if walls.iter().any(|w| circle_overlaps_wall(next, radius, w)) {
        next.y = pos.y;
    }

    next.clamp(Vec2::splat(radius), bounds - Vec2::splat(radius))
}
