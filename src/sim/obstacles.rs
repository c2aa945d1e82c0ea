//! The set of obstacles and the light origin they are shaded from

use glam::Vec2;
use rand::Rng;

use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::consts::{MAX_OBSTACLE_CAP, MAX_PLACEMENT_ATTEMPTS};
use crate::settings::ObstacleConfig;

/// Obstacles in creation order plus the shared light origin
///
/// Creation order is also the paint order of the top faces, so later
/// obstacles are drawn over earlier ones.
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    arena: Vec2,
    /// Offset of the light origin from the arena center
    light_offset: Vec2,
}

impl ObstacleSet {
    /// Place up to `max_count` random obstacles
    ///
    /// Candidates must stay inside the arena margin and must not overlap the
    /// exclusion region (usually the ball) or any obstacle placed before
    /// them. Each slot gets `MAX_PLACEMENT_ATTEMPTS` tries; a slot that runs
    /// out is dropped, so crowded arenas end up with fewer obstacles.
    /// `max_count` is capped at `MAX_OBSTACLE_CAP`.
    pub fn create<R: Rng>(
        arena: Vec2,
        max_count: usize,
        exclusion: Rect,
        config: &ObstacleConfig,
        rng: &mut R,
    ) -> Self {
        // Margins are expressed against the arena height
        let margin = Vec2::new(
            config.arena_margin * arena.y / arena.x,
            config.arena_margin,
        );
        let bounds = Rect::new(margin, Vec2::ONE - margin);
        let exclusion = exclusion
            .inflate(config.exclusion_margin * arena.y)
            .to_arena(arena);

        let max_count = max_count.min(MAX_OBSTACLE_CAP);
        let mut layouts: Vec<Rect> = Vec::with_capacity(max_count);
        let mut skipped = 0;

        for slot in 0..max_count {
            let placed = (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
                let size = Vec2::new(
                    rng.random_range(config.min_size.x..=config.max_size.x),
                    rng.random_range(config.min_size.y..=config.max_size.y),
                );
                let room = bounds.max - size;
                if room.x < bounds.min.x || room.y < bounds.min.y {
                    return None;
                }
                let origin = Vec2::new(
                    rng.random_range(bounds.min.x..=room.x),
                    rng.random_range(bounds.min.y..=room.y),
                );
                let candidate = Rect::from_origin_size(origin, size);

                let fits = bounds.contains_rect(&candidate)
                    && !candidate.intersects(&exclusion)
                    && !layouts.iter().any(|other| candidate.intersects(other));
                fits.then_some(candidate)
            });

            match placed {
                Some(layout) => layouts.push(layout),
                None => {
                    log::debug!("No room for obstacle {} after {} attempts", slot, MAX_PLACEMENT_ATTEMPTS);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::info!("Placed {} of {} obstacles", layouts.len(), max_count);
        }

        Self::from_layouts(arena, layouts, config.shadow_ratio, config.effect_ratio)
    }

    /// Build a set from arena-relative layouts (in creation order)
    pub fn from_layouts(
        arena: Vec2,
        layouts: impl IntoIterator<Item = Rect>,
        shadow_ratio: f32,
        effect_ratio: f32,
    ) -> Self {
        let obstacles = layouts
            .into_iter()
            .map(|layout| Obstacle::new(layout, arena, shadow_ratio, effect_ratio))
            .collect();
        Self {
            obstacles,
            arena,
            light_offset: Vec2::ZERO,
        }
    }

    /// Build a set from pixel rectangles (in creation order)
    pub fn from_rects(arena: Vec2, rects: &[Rect], config: &ObstacleConfig) -> Self {
        Self::from_layouts(
            arena,
            rects.iter().map(|rect| rect.to_arena(arena)),
            config.shadow_ratio,
            config.effect_ratio,
        )
    }

    /// Index of the topmost obstacle under `point`
    ///
    /// Searches in reverse creation order so the block drawn last wins.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.obstacles
            .iter()
            .rposition(|obstacle| obstacle.contains_point(point))
    }

    /// Re-derive all geometry for an arena size and pan the light by `light_delta`
    ///
    /// The light offset accumulates without bounds. A zero delta only
    /// re-projects, which is what resizes and obstacle drags use.
    pub fn update_view(&mut self, arena: Vec2, light_delta: Vec2) {
        self.arena = arena;
        self.light_offset += light_delta;
        let light = self.light();
        for obstacle in &mut self.obstacles {
            obstacle.fit_to_arena(arena);
            obstacle.construct_shadow(light);
        }
    }

    /// Drag one obstacle by a pixel delta and re-project shadows
    ///
    /// Returns false (and changes nothing) for an unknown index.
    pub fn move_obstacle(&mut self, index: usize, delta: Vec2) -> bool {
        let Some(obstacle) = self.obstacles.get_mut(index) else {
            log::warn!("Drag target {} no longer exists", index);
            return false;
        };
        obstacle.update_position(delta);
        self.update_view(self.arena, Vec2::ZERO);
        true
    }

    /// Current light origin in pixels
    pub fn light(&self) -> Vec2 {
        self.arena * 0.5 + self.light_offset
    }

    pub fn light_offset(&self) -> Vec2 {
        self.light_offset
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// Obstacles in creation (paint) order
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}
