//! The ball and its per-step physics

use glam::Vec2;
use rand::Rng;

use super::collision::{ball_rect_collision, ball_wall_collision, bounce_velocity};
use super::obstacles::ObstacleSet;
use super::rect::Rect;
use crate::consts::BALL_MIN_AXIS_ANGLE;
use crate::direction_vector;
use crate::settings::BallConfig;

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub radius: f32,
    /// Magnitude of `vel`, fixed at creation
    speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed: vel.length(),
        }
    }

    /// Spawn at the arena center heading in a random diagonal-ish direction
    ///
    /// The launch angle keeps at least `BALL_MIN_AXIS_ANGLE` from both axes so
    /// the ball never starts bouncing along a single line.
    pub fn spawn<R: Rng>(arena: Vec2, config: &BallConfig, rng: &mut R) -> Self {
        use std::f32::consts::FRAC_PI_2;

        let quadrant = rng.random_range(0..4u8) as f32;
        let within = rng.random_range(BALL_MIN_AXIS_ANGLE..=FRAC_PI_2 - BALL_MIN_AXIS_ANGLE);
        let theta = quadrant * FRAC_PI_2 + within;

        Self::new(
            arena * 0.5,
            direction_vector(theta, config.speed(arena)),
            config.radius(arena),
        )
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Bounding square, used to keep obstacles off the spawn point
    pub fn exclusion_region(&self) -> Rect {
        Rect::new(
            self.pos - Vec2::splat(self.radius),
            self.pos + Vec2::splat(self.radius),
        )
    }

    /// Advance one step and resolve collisions
    ///
    /// Obstacles are resolved first, in creation order, then the walls, so
    /// the ball always finishes the step inside the arena even when a block
    /// sits against a wall. Each contact pushes the ball just outside the
    /// surface and turns the matching velocity component away from it.
    ///
    /// A gap between a block and a wall narrower than the ball has no valid
    /// position in it. The wall wins there, so the ball can overlap the block
    /// until it slides out of the gap, and a purely perpendicular velocity
    /// keeps it there.
    pub fn step(&mut self, dt: f32, arena: Vec2, obstacles: &ObstacleSet) {
        self.pos += self.vel * dt;

        for obstacle in obstacles.iter() {
            let result = ball_rect_collision(self.pos, self.radius, &obstacle.top);
            if result.hit {
                self.pos += result.normal * result.penetration;
                self.vel = bounce_velocity(self.vel, result.normal);
            }
        }

        for result in ball_wall_collision(self.pos, self.radius, arena) {
            if result.hit {
                self.vel = bounce_velocity(self.vel, result.normal);
            }
        }

        // Wall contacts clamp the center to exactly `radius` from the wall.
        // `hi` never drops below `lo`, even for an arena narrower than the ball.
        let lo = Vec2::splat(self.radius);
        let hi = (arena - lo).max(lo);
        self.pos = self.pos.clamp(lo, hi);

        // Reflections only flip signs; renormalizing cancels rounding drift
        if let Some(dir) = self.vel.try_normalize() {
            self.vel = dir * self.speed;
        }
    }
}
