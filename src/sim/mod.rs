//! Simulation module
//!
//! All physics and geometry lives here. This module must stay free of
//! rendering and platform dependencies:
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - Caller-provided timestep

pub mod ball;
pub mod collision;
pub mod obstacle;
pub mod obstacles;
pub mod rect;
pub mod scene;

pub use ball::Ball;
pub use collision::{CollisionResult, ball_rect_collision, ball_wall_collision, reflect_velocity};
pub use obstacle::{Obstacle, ShadowFace, ShadowOrder};
pub use obstacles::ObstacleSet;
pub use rect::Rect;
pub use scene::Scene;
