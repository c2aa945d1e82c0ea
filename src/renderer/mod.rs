//! Rendering module
//!
//! Everything is drawn through the `Surface` trait in arena coordinates.
//! The browser build implements it over a Canvas 2D context; tests and the
//! native build use `RecordingSurface`.

pub mod color;
pub mod draw;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::sim::Rect;

pub use color::{Color, colors};
pub use draw::{draw_ball, draw_frame, draw_shadow, draw_shadow_layer, draw_top_face, draw_top_layer, render};
pub use recording::{DrawCommand, RecordingSurface};

/// A 2D drawing target
pub trait Surface {
    /// Erase a region to transparent
    fn clear(&mut self, region: Rect);
    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
