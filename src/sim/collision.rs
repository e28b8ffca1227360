//! Collision detection and response primitives
//!
//! Everything a ball can hit is either a circle (peg) or an axis-aligned
//! rectangle (scoring slot, tested in `board`), so the primitives here stay
//! small: circle-vs-circle contact and specular reflection.

use glam::Vec2;

/// Below this separation the contact is treated as degenerate
const DEGENERATE_DIST: f32 = 1e-6;

/// A resolved contact against a peg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the peg toward the ball center
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

/// Check a ball center against a peg center.
///
/// Returns a contact when the centers are closer than `collision_radius`
/// (ball radius + peg radius). A ball sitting exactly on the peg center has
/// no meaningful normal; we substitute straight up - in this y-down
/// coordinate system that is `(0, -1)` - so the ball pops out above the peg
/// instead of dividing by zero.
pub fn ball_peg_contact(ball_pos: Vec2, peg_pos: Vec2, collision_radius: f32) -> Option<Contact> {
    let displacement = ball_pos - peg_pos;
    let distance = displacement.length();

    if distance >= collision_radius {
        return None;
    }

    let normal = if distance < DEGENERATE_DIST {
        Vec2::NEG_Y
    } else {
        displacement / distance
    };

    Some(Contact {
        normal,
        penetration: collision_radius - distance,
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
