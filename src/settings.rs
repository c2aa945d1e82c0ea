//! Scene settings and tunables
//!
//! Read once at startup from a JSON blob (the canvas `data-settings`
//! attribute in the browser). Missing fields take their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Obstacle placement and shading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Upper bound on the number of blocks
    pub max_count: usize,
    /// Smallest block size as a fraction of the arena (x of width, y of height)
    pub min_size: Vec2,
    /// Largest block size as a fraction of the arena
    pub max_size: Vec2,
    /// Keep blocks this far from the arena edge (fraction of arena height)
    pub arena_margin: f32,
    /// Extra clearance around the ball at placement (fraction of arena height)
    pub exclusion_margin: f32,
    /// How far the base is pulled toward the light (0 < ratio < 1)
    pub shadow_ratio: f32,
    /// Interpolation between base (0) and top (1) for the effective face
    pub effect_ratio: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            max_count: MAX_OBSTACLES,
            min_size: Vec2::new(0.05, 0.1),
            max_size: Vec2::new(0.12, 0.25),
            arena_margin: 0.02,
            exclusion_margin: 0.02,
            shadow_ratio: SHADOW_RATIO,
            effect_ratio: EFFECT_RATIO,
        }
    }
}

/// Ball size and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Radius as a fraction of the arena height
    pub radius_ratio: f32,
    /// Distance per nominal frame as a fraction of the arena height
    pub speed_ratio: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius_ratio: BALL_RADIUS_RATIO,
            speed_ratio: BALL_SPEED_RATIO,
        }
    }
}

impl BallConfig {
    /// Radius in pixels for an arena
    pub fn radius(&self, arena: Vec2) -> f32 {
        arena.y * self.radius_ratio
    }

    /// Speed in pixels per second for an arena
    pub fn speed(&self, arena: Vec2) -> f32 {
        arena.y * self.speed_ratio * NOMINAL_FPS
    }
}

/// All scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub obstacles: ObstacleConfig,
    pub ball: BallConfig,
    /// Arena height / width
    pub aspect_ratio: f32,
    /// Backing store pixels per arena pixel
    pub pixel_scale: f32,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            obstacles: ObstacleConfig::default(),
            ball: BallConfig::default(),
            aspect_ratio: ARENA_ASPECT_RATIO,
            pixel_scale: PIXEL_SCALE,
            seed: None,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings if present, falling back to defaults on error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) if !json.trim().is_empty() => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings ({}), using defaults", e);
                    Self::default()
                }
            },
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Clamp values into their valid ranges
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();

        let obstacles = &mut self.obstacles;
        if obstacles.max_count > MAX_OBSTACLE_CAP {
            log::warn!(
                "max_count {} above {}, clamping",
                obstacles.max_count,
                MAX_OBSTACLE_CAP
            );
            obstacles.max_count = MAX_OBSTACLE_CAP;
        }
        if !(obstacles.shadow_ratio > 0.0 && obstacles.shadow_ratio < 1.0) {
            log::warn!(
                "shadow_ratio {} outside (0, 1), using {}",
                obstacles.shadow_ratio,
                SHADOW_RATIO
            );
            obstacles.shadow_ratio = SHADOW_RATIO;
        }
        obstacles.effect_ratio = if obstacles.effect_ratio.is_finite() {
            obstacles.effect_ratio.clamp(0.0, 1.0)
        } else {
            EFFECT_RATIO
        };
        obstacles.min_size = obstacles.min_size.clamp(Vec2::splat(0.01), Vec2::ONE);
        obstacles.max_size = obstacles.max_size.clamp(obstacles.min_size, Vec2::ONE);
        obstacles.arena_margin = obstacles.arena_margin.clamp(0.0, 0.25);
        obstacles.exclusion_margin = obstacles.exclusion_margin.clamp(0.0, 0.25);

        if !(self.ball.radius_ratio > 0.0 && self.ball.radius_ratio < 0.5) {
            self.ball.radius_ratio = defaults.ball.radius_ratio;
        }
        if !(self.ball.speed_ratio > 0.0 && self.ball.speed_ratio.is_finite()) {
            self.ball.speed_ratio = defaults.ball.speed_ratio;
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            self.aspect_ratio = defaults.aspect_ratio;
        }
        if !(self.pixel_scale > 0.0 && self.pixel_scale.is_finite()) {
            self.pixel_scale = defaults.pixel_scale;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"seed": 7, "obstacles": {"max_count": 3}}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.obstacles.max_count, 3);
        assert_eq!(settings.obstacles.shadow_ratio, SHADOW_RATIO);
        assert_eq!(settings.ball, BallConfig::default());
        assert_eq!(settings.pixel_scale, PIXEL_SCALE);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::load_or_default(Some("{not json")), Settings::default());
        assert_eq!(Settings::load_or_default(Some("   ")), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }

    #[test]
    fn test_sanitized_clamps_ranges() {
        let settings = Settings::from_json(
            r#"{"obstacles": {"shadow_ratio": 1.5, "effect_ratio": 3.0,
                "min_size": [0.3, 0.3], "max_size": [0.1, 0.5]},
                "pixel_scale": -1.0, "aspect_ratio": 0.0}"#,
        )
        .unwrap();
        assert_eq!(settings.obstacles.shadow_ratio, SHADOW_RATIO);
        assert_eq!(settings.obstacles.effect_ratio, 1.0);
        assert_eq!(settings.obstacles.max_size, Vec2::new(0.3, 0.5));
        assert_eq!(settings.pixel_scale, PIXEL_SCALE);
        assert_eq!(settings.aspect_ratio, ARENA_ASPECT_RATIO);
    }

    #[test]
    fn test_sanitized_caps_obstacle_count() {
        let settings = Settings::from_json(r#"{"obstacles": {"max_count": 18446744073709551615}}"#).unwrap();
        assert_eq!(settings.obstacles.max_count, MAX_OBSTACLE_CAP);

        let settings = Settings::from_json(r#"{"obstacles": {"max_count": 12}}"#).unwrap();
        assert_eq!(settings.obstacles.max_count, 12);
    }

    #[test]
    fn test_ball_dimensions_scale_with_height() {
        let ball = BallConfig::default();
        let arena = Vec2::new(1000.0, 500.0);
        assert!((ball.radius(arena) - 20.0).abs() < 0.001);
        assert!((ball.speed(arena) - 180.0).abs() < 0.001);
    }
}
