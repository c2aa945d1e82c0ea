//! Viewport controller: pointer mapping, dragging and resizing
//!
//! Two states. A pointer-down starts a drag session that targets either the
//! obstacle under the pointer or, when there is none, the light origin.
//! Pointer moves apply the delta since the previous event; pointer-up ends
//! the session.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{ObstacleSet, Rect};

/// What a drag session moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Pan the light origin
    Light,
    /// Move the obstacle at this index
    Obstacle(usize),
}

/// Transient state of one drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub last_pos: Vec2,
    pub target: DragTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Canvas backing store size and the drawing scale to apply to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackingStore {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

/// Maps host input into the arena and routes drags
#[derive(Debug, Clone)]
pub struct Viewport {
    arena: Vec2,
    aspect_ratio: f32,
    pixel_scale: f32,
    state: DragState,
}

impl Viewport {
    /// Arena size is zero until the first `resize`
    pub fn new(aspect_ratio: f32, pixel_scale: f32) -> Self {
        Self {
            arena: Vec2::ZERO,
            aspect_ratio,
            pixel_scale,
            state: DragState::Idle,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.aspect_ratio, settings.pixel_scale)
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Fit the arena to the host width
    ///
    /// The arena keeps the configured aspect ratio. Returns the backing store
    /// the host canvas should adopt; existing obstacles are re-fitted with no
    /// light pan.
    pub fn resize(&mut self, host_width: f32, obstacles: Option<&mut ObstacleSet>) -> BackingStore {
        let width = host_width.max(1.0);
        self.arena = Vec2::new(width, width * self.aspect_ratio);

        if let Some(obstacles) = obstacles {
            obstacles.update_view(self.arena, Vec2::ZERO);
        }

        let backing = (self.arena * self.pixel_scale).round();
        log::debug!(
            "Arena {}x{}, backing store {}x{}",
            self.arena.x,
            self.arena.y,
            backing.x,
            backing.y
        );
        BackingStore {
            width: backing.x as u32,
            height: backing.y as u32,
            scale: self.pixel_scale,
        }
    }

    /// Convert a client (CSS) coordinate into arena coordinates
    ///
    /// `bounds` is the canvas's client rectangle and `backing` its backing
    /// store size: `(client - top_left) / css_size * backing / pixel_scale`.
    pub fn client_to_arena(&self, client: Vec2, bounds: Rect, backing: Vec2) -> Vec2 {
        let css_size = bounds.size();
        if css_size.x <= 0.0 || css_size.y <= 0.0 {
            return client - bounds.min;
        }
        (client - bounds.min) / css_size * backing / self.pixel_scale
    }

    /// Start a drag at an arena position
    pub fn pointer_down(&mut self, pos: Vec2, obstacles: &ObstacleSet) {
        let target = match obstacles.hit_test(pos) {
            Some(index) => DragTarget::Obstacle(index),
            None => DragTarget::Light,
        };
        log::debug!("Drag start at ({}, {}): {:?}", pos.x, pos.y, target);
        self.state = DragState::Dragging(DragSession {
            last_pos: pos,
            target,
        });
    }

    /// Apply the movement since the previous pointer event
    ///
    /// Does nothing while idle.
    pub fn pointer_move(&mut self, pos: Vec2, obstacles: &mut ObstacleSet) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        let delta = pos - session.last_pos;
        session.last_pos = pos;
        let target = session.target;

        match target {
            DragTarget::Light => obstacles.update_view(self.arena, delta),
            DragTarget::Obstacle(index) => {
                if !obstacles.move_obstacle(index, delta) {
                    self.state = DragState::Idle;
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ObstacleConfig;

    fn setup() -> (Viewport, ObstacleSet) {
        let mut viewport = Viewport::new(0.5, 2.0);
        viewport.resize(800.0, None);
        let obstacles = ObstacleSet::from_rects(
            viewport.arena(),
            &[
                Rect::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)),
                Rect::new(Vec2::new(150.0, 150.0), Vec2::new(250.0, 250.0)),
            ],
            &ObstacleConfig::default(),
        );
        (viewport, obstacles)
    }

    #[test]
    fn test_resize_keeps_aspect_ratio() {
        let mut viewport = Viewport::new(0.5, 2.0);
        let backing = viewport.resize(640.0, None);
        assert_eq!(viewport.arena(), Vec2::new(640.0, 320.0));
        assert_eq!(
            backing,
            BackingStore {
                width: 1280,
                height: 640,
                scale: 2.0
            }
        );
    }

    #[test]
    fn test_resize_refits_obstacles() {
        let (mut viewport, mut obstacles) = setup();
        viewport.resize(1600.0, Some(&mut obstacles));
        assert_eq!(obstacles.arena(), Vec2::new(1600.0, 800.0));
        let top = obstacles.get(0).unwrap().top;
        assert!((top.min - Vec2::new(200.0, 200.0)).length() < 0.001);
        assert_eq!(obstacles.light(), Vec2::new(800.0, 400.0));
    }

    #[test]
    fn test_client_to_arena_undoes_pixel_scale() {
        let viewport = Viewport::new(0.5, 2.0);
        // Canvas shown at 400x200 CSS px at (10, 20) with an 800x400 backing store
        let bounds = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(410.0, 220.0));
        let pos = viewport.client_to_arena(Vec2::new(210.0, 120.0), bounds, Vec2::new(800.0, 400.0));
        assert_eq!(pos, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_pointer_down_targets_topmost_obstacle() {
        let (mut viewport, obstacles) = setup();
        viewport.pointer_down(Vec2::new(175.0, 175.0), &obstacles);
        assert_eq!(
            viewport.state(),
            DragState::Dragging(DragSession {
                last_pos: Vec2::new(175.0, 175.0),
                target: DragTarget::Obstacle(1),
            })
        );

        viewport.pointer_down(Vec2::new(600.0, 50.0), &obstacles);
        assert!(matches!(
            viewport.state(),
            DragState::Dragging(DragSession {
                target: DragTarget::Light,
                ..
            })
        ));
    }

    #[test]
    fn test_drag_empty_space_pans_light() {
        let (mut viewport, mut obstacles) = setup();
        let tops: Vec<Rect> = obstacles.iter().map(|o| o.top).collect();

        viewport.pointer_down(Vec2::new(600.0, 50.0), &obstacles);
        viewport.pointer_move(Vec2::new(610.0, 45.0), &mut obstacles);
        viewport.pointer_move(Vec2::new(630.0, 60.0), &mut obstacles);
        assert_eq!(obstacles.light(), Vec2::new(430.0, 210.0));

        // Panning never moves the blocks themselves
        let after: Vec<Rect> = obstacles.iter().map(|o| o.top).collect();
        assert_eq!(tops, after);
    }

    #[test]
    fn test_drag_obstacle_moves_only_it() {
        let (mut viewport, mut obstacles) = setup();
        let other = obstacles.get(1).unwrap().top;

        viewport.pointer_down(Vec2::new(120.0, 120.0), &obstacles);
        viewport.pointer_move(Vec2::new(150.0, 130.0), &mut obstacles);

        let moved = obstacles.get(0).unwrap().top;
        assert!((moved.min - Vec2::new(130.0, 110.0)).length() < 0.001);
        assert_eq!(obstacles.get(1).unwrap().top, other);
        assert_eq!(obstacles.light(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_pointer_up_returns_to_idle() {
        let (mut viewport, mut obstacles) = setup();
        viewport.pointer_down(Vec2::new(600.0, 50.0), &obstacles);
        assert!(viewport.is_dragging());
        viewport.pointer_up();
        assert_eq!(viewport.state(), DragState::Idle);

        // Moves while idle are ignored
        viewport.pointer_move(Vec2::new(700.0, 100.0), &mut obstacles);
        assert_eq!(obstacles.light(), Vec2::new(400.0, 200.0));
    }
}
