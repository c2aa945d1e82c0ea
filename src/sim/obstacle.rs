//! A single obstacle: a block seen from above with a projected shadow
//!
//! Each obstacle has three rectangles:
//! - `top`: the solid upper face, in pixels
//! - `base`: the top face pulled toward the light origin by `shadow_ratio`,
//!   i.e. the outline of the block on the ground
//! - `effective`: interpolation between base and top by `effect_ratio`
//!
//! The four side faces join each top edge to the matching base edge. Which
//! face is painted first depends on where the light sits relative to the base.

use glam::Vec2;

use super::rect::Rect;

/// One of the four side faces of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowFace {
    Upper,
    Lower,
    Left,
    Right,
}

impl ShadowFace {
    pub const ALL: [ShadowFace; 4] = [
        ShadowFace::Upper,
        ShadowFace::Lower,
        ShadowFace::Left,
        ShadowFace::Right,
    ];
}

/// Paint order of the side faces, chosen by the direction of the light
///
/// Named after the face painted first. Faces later in the order overpaint
/// earlier ones where they overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowOrder {
    FacingUp,
    FacingRight,
    FacingDown,
    FacingLeft,
}

impl ShadowOrder {
    /// Classify the vector from the base center to the light origin
    ///
    /// The two diagonals `y = x` and `y = -x` split the plane into four
    /// wedges. Comparisons use `>=` against one diagonal and `<` against the
    /// other so every vector, including zero, lands in exactly one wedge.
    pub fn classify(to_light: Vec2) -> Self {
        let Vec2 { x, y } = to_light;
        if y >= x && y >= -x {
            ShadowOrder::FacingUp
        } else if y >= x {
            ShadowOrder::FacingRight
        } else if y < -x {
            ShadowOrder::FacingDown
        } else {
            ShadowOrder::FacingLeft
        }
    }

    /// Faces in paint order
    pub fn faces(self) -> [ShadowFace; 4] {
        use ShadowFace::*;
        match self {
            ShadowOrder::FacingUp => [Upper, Right, Left, Lower],
            ShadowOrder::FacingRight => [Right, Lower, Upper, Left],
            ShadowOrder::FacingDown => [Lower, Left, Right, Upper],
            ShadowOrder::FacingLeft => [Left, Upper, Lower, Right],
        }
    }
}

/// A draggable block
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Position in arena-relative units; the source of truth for `top`
    pub layout: Rect,
    /// Top face in pixels
    pub top: Rect,
    /// Ground outline in pixels
    pub base: Rect,
    /// Interpolated face in pixels
    pub effective: Rect,
    /// Arena size `top` was derived for
    arena: Vec2,
    pub shadow_ratio: f32,
    pub effect_ratio: f32,
}

impl Obstacle {
    /// Create an obstacle from an arena-relative layout
    ///
    /// Shadow geometry starts out projected from the arena center.
    pub fn new(layout: Rect, arena: Vec2, shadow_ratio: f32, effect_ratio: f32) -> Self {
        let top = layout.to_pixels(arena);
        let mut obstacle = Self {
            layout,
            top,
            base: top,
            effective: top,
            arena,
            shadow_ratio,
            effect_ratio,
        };
        obstacle.construct_shadow(arena * 0.5);
        obstacle
    }

    /// Re-derive the top face for a new arena size
    pub fn fit_to_arena(&mut self, arena: Vec2) {
        self.arena = arena;
        self.top = self.layout.to_pixels(arena);
    }

    /// Project the base and effective rectangles from the light origin
    pub fn construct_shadow(&mut self, light: Vec2) {
        self.base = self.top.scale_toward(light, self.shadow_ratio);
        self.effective = self.base.lerp(&self.top, self.effect_ratio);
    }

    /// Move the block by a pixel delta
    ///
    /// Shadow geometry is stale afterwards until `construct_shadow` runs.
    pub fn update_position(&mut self, delta: Vec2) {
        self.layout.translate(delta / self.arena);
        self.top = self.layout.to_pixels(self.arena);
    }

    /// Hit test against the top face
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.top.contains(point)
    }

    /// Paint order of the side faces for the given light origin
    pub fn shadow_order(&self, light: Vec2) -> ShadowOrder {
        ShadowOrder::classify(light - self.base.center())
    }

    /// Quad joining a top edge to its base edge
    pub fn face_polygon(&self, face: ShadowFace) -> [Vec2; 4] {
        let (t, b) = (&self.top, &self.base);
        match face {
            ShadowFace::Upper => [
                t.min,
                b.min,
                Vec2::new(b.max.x, b.min.y),
                Vec2::new(t.max.x, t.min.y),
            ],
            ShadowFace::Lower => [
                t.max,
                b.max,
                Vec2::new(b.min.x, b.max.y),
                Vec2::new(t.min.x, t.max.y),
            ],
            ShadowFace::Left => [
                Vec2::new(t.min.x, t.max.y),
                Vec2::new(b.min.x, b.max.y),
                b.min,
                t.min,
            ],
            ShadowFace::Right => [
                Vec2::new(t.max.x, t.min.y),
                Vec2::new(b.max.x, b.min.y),
                b.max,
                t.max,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn order(x: f32, y: f32) -> [ShadowFace; 4] {
        ShadowOrder::classify(Vec2::new(x, y)).faces()
    }

    fn sample() -> Obstacle {
        let arena = Vec2::new(800.0, 400.0);
        let layout = Rect::new(Vec2::new(0.25, 0.25), Vec2::new(0.375, 0.5));
        Obstacle::new(layout, arena, 0.9, 1.0)
    }

    #[test]
    fn test_classify_axis_directions() {
        use ShadowFace::*;
        assert_eq!(order(0.0, 5.0), [Upper, Right, Left, Lower]);
        assert_eq!(order(-5.0, 0.0), [Right, Lower, Upper, Left]);
        assert_eq!(order(0.0, -5.0), [Lower, Left, Right, Upper]);
        assert_eq!(order(5.0, 0.0), [Left, Upper, Lower, Right]);
    }

    #[test]
    fn test_classify_diagonals() {
        // Each diagonal ray belongs to exactly one wedge
        assert_eq!(ShadowOrder::classify(Vec2::new(3.0, 3.0)), ShadowOrder::FacingUp);
        assert_eq!(ShadowOrder::classify(Vec2::new(-3.0, 3.0)), ShadowOrder::FacingUp);
        assert_eq!(ShadowOrder::classify(Vec2::new(-3.0, -3.0)), ShadowOrder::FacingRight);
        assert_eq!(ShadowOrder::classify(Vec2::new(3.0, -3.0)), ShadowOrder::FacingLeft);
    }

    #[test]
    fn test_classify_origin_is_stable() {
        let first = ShadowOrder::classify(Vec2::ZERO);
        assert_eq!(first, ShadowOrder::FacingUp);
        for _ in 0..10 {
            assert_eq!(ShadowOrder::classify(Vec2::ZERO), first);
        }
    }

    #[test]
    fn test_construct_shadow_pulls_toward_light() {
        let mut obstacle = sample();
        assert_eq!(obstacle.top.min, Vec2::new(200.0, 100.0));
        assert_eq!(obstacle.top.max, Vec2::new(300.0, 200.0));

        obstacle.construct_shadow(Vec2::ZERO);
        assert!((obstacle.base.min - Vec2::new(180.0, 90.0)).length() < 0.001);
        assert!((obstacle.base.max - Vec2::new(270.0, 180.0)).length() < 0.001);
        // Effect ratio 1 keeps the effective face on top
        assert_eq!(obstacle.effective, obstacle.top);
    }

    #[test]
    fn test_effect_ratio_interpolates() {
        let arena = Vec2::new(800.0, 400.0);
        let layout = Rect::new(Vec2::new(0.25, 0.25), Vec2::new(0.375, 0.5));
        let mut obstacle = Obstacle::new(layout, arena, 0.5, 0.5);
        obstacle.construct_shadow(Vec2::ZERO);
        // base = [100,50]-[150,100], top = [200,100]-[300,200]
        assert!((obstacle.effective.min - Vec2::new(150.0, 75.0)).length() < 0.001);
        assert!((obstacle.effective.max - Vec2::new(225.0, 150.0)).length() < 0.001);
    }

    #[test]
    fn test_update_position_moves_top() {
        let mut obstacle = sample();
        obstacle.update_position(Vec2::new(40.0, -20.0));
        assert!((obstacle.top.min - Vec2::new(240.0, 80.0)).length() < 0.001);
        assert!((obstacle.top.max - Vec2::new(340.0, 180.0)).length() < 0.001);
        assert!(obstacle.contains_point(Vec2::new(335.0, 85.0)));
        assert!(!obstacle.contains_point(Vec2::new(210.0, 150.0)));
    }

    #[test]
    fn test_face_polygons_join_top_and_base() {
        let mut obstacle = sample();
        obstacle.construct_shadow(Vec2::ZERO);
        let upper = obstacle.face_polygon(ShadowFace::Upper);
        assert_eq!(upper[0], obstacle.top.min);
        assert_eq!(upper[1], obstacle.base.min);
        let right = obstacle.face_polygon(ShadowFace::Right);
        assert_eq!(right[2], obstacle.base.max);
        assert_eq!(right[3], obstacle.top.max);
    }

    proptest! {
        #[test]
        fn prop_every_order_paints_each_face_once(x in -1e4f32..1e4, y in -1e4f32..1e4) {
            let faces = ShadowOrder::classify(Vec2::new(x, y)).faces();
            for face in ShadowFace::ALL {
                prop_assert_eq!(faces.iter().filter(|f| **f == face).count(), 1);
            }
        }

        #[test]
        fn prop_construct_shadow_is_idempotent(lx in -2000f32..2000.0, ly in -2000f32..2000.0) {
            let mut obstacle = sample();
            let light = Vec2::new(lx, ly);
            obstacle.construct_shadow(light);
            let first = (obstacle.base, obstacle.effective);
            obstacle.construct_shadow(light);
            prop_assert_eq!(first, (obstacle.base, obstacle.effective));
        }
    }
}
