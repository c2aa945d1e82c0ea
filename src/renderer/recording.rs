//! A surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Color, Surface};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Polygon { points: Vec<Vec2>, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
}

impl DrawCommand {
    pub fn color(&self) -> Option<Color> {
        match self {
            DrawCommand::Clear(_) => None,
            DrawCommand::Polygon { color, .. } | DrawCommand::Circle { color, .. } => Some(*color),
        }
    }
}

/// Draw call log
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Colors of all fills in call order
    pub fn fill_colors(&self) -> Vec<Color> {
        self.commands.iter().filter_map(DrawCommand::color).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
