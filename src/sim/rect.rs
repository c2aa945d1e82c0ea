//! Axis-aligned rectangle geometry
//!
//! Rectangles are stored as min/max corners. The same type is used for
//! pixel-space rectangles and arena-relative layouts (`[0,1]²` over the arena).

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from any two opposite corners
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Rectangle of the given size with its top-left corner at `origin`
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::from_corners(origin, origin + size)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        0.5 * (self.min + self.max)
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether `other` lies completely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Strict overlap test (shared edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    /// Pull every corner toward `origin` by `ratio` (1.0 = unchanged, 0.0 = collapsed)
    pub fn scale_toward(&self, origin: Vec2, ratio: f32) -> Rect {
        Rect {
            min: origin + ratio * (self.min - origin),
            max: origin + ratio * (self.max - origin),
        }
    }

    /// Corner-wise interpolation: `t = 0` gives `self`, `t = 1` gives `other`
    pub fn lerp(&self, other: &Rect, t: f32) -> Rect {
        // Weighted sum rather than `a + (b - a) * t` so t = 1 lands exactly on `other`
        Rect {
            min: self.min * (1.0 - t) + other.min * t,
            max: self.max * (1.0 - t) + other.max * t,
        }
    }

    /// Grow (or shrink with a negative margin) on all four sides
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// Pixel rectangle -> arena-relative layout
    pub fn to_arena(&self, arena: Vec2) -> Rect {
        Rect {
            min: self.min / arena,
            max: self.max / arena,
        }
    }

    /// Arena-relative layout -> pixel rectangle
    pub fn to_pixels(&self, arena: Vec2) -> Rect {
        Rect {
            min: self.min * arena,
            max: self.max * arena,
        }
    }

    /// Corners, counter-clockwise on screen starting at the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect.min, Vec2::new(4.0, 2.0));
        assert_eq!(rect.max, Vec2::new(10.0, 8.0));
        assert_eq!(rect.size(), Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let c = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_scale_toward_origin() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let scaled = rect.scale_toward(Vec2::ZERO, 0.5);
        assert_eq!(scaled.min, Vec2::new(5.0, 5.0));
        assert_eq!(scaled.max, Vec2::new(10.0, 10.0));

        // Ratio 1 leaves the rectangle alone
        assert_eq!(rect.scale_toward(Vec2::new(3.0, -7.0), 1.0), rect);
    }

    #[test]
    fn test_arena_mapping() {
        let arena = Vec2::new(800.0, 400.0);
        let rect = Rect::new(Vec2::new(80.0, 40.0), Vec2::new(160.0, 200.0));
        let layout = rect.to_arena(arena);
        assert_eq!(layout.min, Vec2::new(0.1, 0.1));
        assert_eq!(layout.max, Vec2::new(0.2, 0.5));
        assert_eq!(layout.to_pixels(arena), rect);
    }
}
