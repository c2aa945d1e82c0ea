//! Scene state: the ball, the obstacles and the arena they share

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::obstacles::ObstacleSet;
use crate::consts::MAX_FRAME_DT;
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the layout and launch direction were generated from
    pub seed: u64,
    pub ball: Ball,
    /// Obstacles, light origin and the current arena size
    pub obstacles: ObstacleSet,
    /// Steps taken so far
    pub time_ticks: u64,
}

impl Scene {
    /// Create a scene with a fresh ball and a random obstacle layout
    pub fn new(arena: Vec2, settings: &Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let ball = Ball::spawn(arena, &settings.ball, &mut rng);
        let mut obstacles = ObstacleSet::create(
            arena,
            settings.obstacles.max_count,
            ball.exclusion_region(),
            &settings.obstacles,
            &mut rng,
        );
        obstacles.update_view(arena, Vec2::ZERO);

        log::info!(
            "Scene {}x{} with {} obstacles (seed {})",
            arena.x,
            arena.y,
            obstacles.len(),
            seed
        );

        Self {
            seed,
            ball,
            obstacles,
            time_ticks: 0,
        }
    }

    /// Current arena size
    pub fn arena(&self) -> Vec2 {
        self.obstacles.arena()
    }

    /// Advance the physics by one render tick
    ///
    /// Negative or oversized frame times are clamped to `[0, MAX_FRAME_DT]`.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let arena = self.arena();
        self.ball.step(dt, arena, &self.obstacles);
        self.time_ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_DT, MAX_OBSTACLE_CAP};

    const ARENA: Vec2 = Vec2::new(1000.0, 500.0);

    #[test]
    fn test_new_scene_keeps_ball_clear() {
        let scene = Scene::new(ARENA, &Settings::default(), 2024);
        assert_eq!(scene.arena(), ARENA);
        assert!(scene.obstacles.len() <= Settings::default().obstacles.max_count);
        let region = scene.ball.exclusion_region();
        for obstacle in scene.obstacles.iter() {
            assert!(!obstacle.top.intersects(&region));
        }
    }

    #[test]
    fn test_oversized_obstacle_count_is_capped() {
        let settings = Settings::from_json(r#"{"obstacles": {"max_count": 18446744073709551615}}"#).unwrap();
        let scene = Scene::new(Vec2::new(800.0, 400.0), &settings, 1);
        assert!(scene.obstacles.len() <= MAX_OBSTACLE_CAP);
    }

    #[test]
    fn test_determinism() {
        // Two scenes with same seed should produce identical results
        let mut scene1 = Scene::new(ARENA, &Settings::default(), 99999);
        let mut scene2 = Scene::new(ARENA, &Settings::default(), 99999);

        for _ in 0..500 {
            scene1.tick(DEFAULT_DT);
            scene2.tick(DEFAULT_DT);
        }

        assert_eq!(scene1.time_ticks, scene2.time_ticks);
        assert_eq!(scene1.ball.pos, scene2.ball.pos);
        assert_eq!(scene1.ball.vel, scene2.ball.vel);
    }

    #[test]
    fn test_tick_clamps_frame_time() {
        let mut settings = Settings::default();
        settings.obstacles.max_count = 0;
        let mut scene = Scene::new(ARENA, &settings, 5);
        let start = scene.ball.pos;
        scene.tick(-1.0);
        assert_eq!(scene.ball.pos, start);

        // A stalled tab resumes with at most one MAX_FRAME_DT step
        scene.tick(30.0);
        let travelled = (scene.ball.pos - start).length();
        assert!((travelled - scene.ball.speed() * MAX_FRAME_DT).abs() < 0.01);
    }

    #[test]
    fn test_tick_follows_resized_arena() {
        let mut scene = Scene::new(ARENA, &Settings::default(), 11);
        let smaller = ARENA * 0.5;
        scene.obstacles.update_view(smaller, Vec2::ZERO);
        scene.tick(DEFAULT_DT);
        let r = scene.ball.radius;
        assert!(scene.ball.pos.x <= smaller.x - r && scene.ball.pos.y <= smaller.y - r);
    }
}
