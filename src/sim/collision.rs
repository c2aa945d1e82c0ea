//! Collision detection and response for the ball
//!
//! The ball is a circle; everything it can hit is axis-aligned (arena walls and
//! obstacle top faces), so every contact normal is one of the four axis directions.

use glam::Vec2;

use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at collision (pointing toward ball center, for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    fn hit(normal: Vec2, penetration: f32) -> Self {
        Self {
            hit: true,
            normal,
            penetration,
        }
    }
}

/// Check collision between a ball and a rectangle
///
/// Uses the closest point on the rectangle to decide whether the circle
/// overlaps at all, then resolves along the axis of least penetration:
/// the horizontal and vertical overlap depths of the ball's bounding box are
/// compared and the smaller one wins. Ties resolve vertically.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let closest = ball_pos.clamp(rect.min, rect.max);
    let inside = closest == ball_pos;
    if !inside && ball_pos.distance_squared(closest) >= ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    let overlap_left = (ball_pos.x + ball_radius) - rect.min.x;
    let overlap_right = rect.max.x - (ball_pos.x - ball_radius);
    let overlap_top = (ball_pos.y + ball_radius) - rect.min.y;
    let overlap_bottom = rect.max.y - (ball_pos.y - ball_radius);

    let overlap_x = overlap_left.min(overlap_right);
    let overlap_y = overlap_top.min(overlap_bottom);

    if overlap_x < overlap_y {
        let normal = if overlap_left < overlap_right {
            Vec2::NEG_X
        } else {
            Vec2::X
        };
        CollisionResult::hit(normal, overlap_x)
    } else {
        let normal = if overlap_top < overlap_bottom {
            Vec2::NEG_Y
        } else {
            Vec2::Y
        };
        CollisionResult::hit(normal, overlap_y)
    }
}

/// Check collision with the arena walls
///
/// Returns one result per axis (horizontal wall, vertical wall) so a corner
/// hit resolves both components in the same step.
pub fn ball_wall_collision(ball_pos: Vec2, ball_radius: f32, arena: Vec2) -> [CollisionResult; 2] {
    let horizontal = if ball_pos.x - ball_radius < 0.0 {
        CollisionResult::hit(Vec2::X, ball_radius - ball_pos.x)
    } else if ball_pos.x + ball_radius > arena.x {
        CollisionResult::hit(Vec2::NEG_X, ball_pos.x + ball_radius - arena.x)
    } else {
        CollisionResult::miss()
    };

    let vertical = if ball_pos.y - ball_radius < 0.0 {
        CollisionResult::hit(Vec2::Y, ball_radius - ball_pos.y)
    } else if ball_pos.y + ball_radius > arena.y {
        CollisionResult::hit(Vec2::NEG_Y, ball_pos.y + ball_radius - arena.y)
    } else {
        CollisionResult::miss()
    };

    [horizontal, vertical]
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Make the velocity leave the surface
///
/// Reflects only when the ball is moving into the surface, so a ball that is
/// already separating after a push-out is not turned back into it.
#[inline]
pub fn bounce_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    if velocity.dot(normal) < 0.0 {
        reflect_velocity(velocity, normal)
    } else {
        velocity
    }
}
