//! Shadow Bounce - a ball bouncing between draggable pseudo-3D blocks
//!
//! Core modules:
//! - `sim`: Simulation (geometry, obstacles, ball physics, scene)
//! - `renderer`: Drawing surface abstraction and layered frame drawing
//! - `viewport`: Pointer mapping and drag state machine
//! - `settings`: Data-driven tunables

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod viewport;

pub use settings::{BallConfig, ObstacleConfig, Settings};
pub use viewport::{BackingStore, DragState, DragTarget, Viewport};

/// Configuration constants
pub mod consts {
    /// Nominal frame rate the per-frame speed ratio is expressed against
    pub const NOMINAL_FPS: f32 = 60.0;
    /// Longest frame we simulate in one step (seconds). Stalled tabs resume without tunneling.
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Frame time used when no previous timestamp exists
    pub const DEFAULT_DT: f32 = 1.0 / NOMINAL_FPS;

    /// Arena height as a fraction of its width
    pub const ARENA_ASPECT_RATIO: f32 = 0.5;
    /// Backing store pixels per arena pixel (high-DPI output)
    pub const PIXEL_SCALE: f32 = 2.0;

    /// Obstacle defaults
    pub const MAX_OBSTACLES: usize = 10;
    /// Hard ceiling on `max_count`, whatever the settings ask for
    pub const MAX_OBSTACLE_CAP: usize = 64;
    pub const SHADOW_RATIO: f32 = 0.9;
    pub const EFFECT_RATIO: f32 = 1.0;
    /// Candidates tried per obstacle slot before giving up on it
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

    /// Ball defaults, as fractions of the arena height
    pub const BALL_RADIUS_RATIO: f32 = 0.04;
    /// Per-frame speed at `NOMINAL_FPS`
    pub const BALL_SPEED_RATIO: f32 = 0.006;
    /// Minimum angle between the launch direction and either axis (radians, 15°)
    pub const BALL_MIN_AXIS_ANGLE: f32 = std::f32::consts::PI / 12.0;
}

/// Convert a unit direction angle (radians) to a vector of the given length
#[inline]
pub fn direction_vector(theta: f32, length: f32) -> glam::Vec2 {
    glam::Vec2::new(length * theta.cos(), length * theta.sin())
}
