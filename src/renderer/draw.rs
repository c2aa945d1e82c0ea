//! Layered scene drawing
//!
//! Frame order: clear, every obstacle's side faces, the ball, every
//! obstacle's top face. Top faces are painted last so a ball passing "under"
//! a block is hidden by it.

use super::{Color, Surface, colors};
use crate::sim::{Ball, Obstacle, ObstacleSet, Rect, Scene, ShadowFace};

/// Fill color of a side face
pub fn face_color(face: ShadowFace) -> Color {
    match face {
        ShadowFace::Upper => colors::UPPER_FACE,
        ShadowFace::Lower => colors::LOWER_FACE,
        ShadowFace::Left => colors::LEFT_FACE,
        ShadowFace::Right => colors::RIGHT_FACE,
    }
}

/// Paint an obstacle's solid top face
pub fn draw_top_face<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) {
    surface.fill_polygon(&obstacle.top.corners(), colors::TOP_FACE);
}

/// Paint an obstacle's four side faces in light-dependent order
pub fn draw_shadow<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle, light: glam::Vec2) {
    for face in obstacle.shadow_order(light).faces() {
        surface.fill_polygon(&obstacle.face_polygon(face), face_color(face));
    }
}

/// Back layer: side faces of every obstacle, in creation order
pub fn draw_shadow_layer<S: Surface + ?Sized>(surface: &mut S, obstacles: &ObstacleSet) {
    let light = obstacles.light();
    for obstacle in obstacles.iter() {
        draw_shadow(surface, obstacle, light);
    }
}

/// Front layer: top faces of every obstacle, in creation order
pub fn draw_top_layer<S: Surface + ?Sized>(surface: &mut S, obstacles: &ObstacleSet) {
    for obstacle in obstacles.iter() {
        draw_top_face(surface, obstacle);
    }
}

pub fn draw_ball<S: Surface + ?Sized>(surface: &mut S, ball: &Ball) {
    surface.fill_circle(ball.pos, ball.radius, colors::BALL);
}

/// Draw the scene as it stands, without advancing it
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, scene: &Scene) {
    surface.clear(Rect::new(glam::Vec2::ZERO, scene.arena()));
    draw_shadow_layer(surface, &scene.obstacles);
    draw_ball(surface, &scene.ball);
    draw_top_layer(surface, &scene.obstacles);
}

/// One render tick: a single physics step, then the frame
pub fn render<S: Surface + ?Sized>(surface: &mut S, scene: &mut Scene, dt: f32) {
    scene.tick(dt);
    draw_frame(surface, scene);
}
