//! Arena bounds and spawn regions
//!
//! Entities are squares anchored at their top-left corner. A square of size
//! `s` is in bounds when its anchor lies in `[border, dimension - border - s]`
//! on both axes.

use glam::{BVec2, IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::config::ChaseConfig;

/// The walled playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, border: f32) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    pub fn from_config(config: &ChaseConfig) -> Self {
        Self::new(config.arena_width, config.arena_height, config.border_width)
    }

    /// Chaser home position (integer-halved dimensions)
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    #[inline]
    pub fn min_anchor(&self) -> Vec2 {
        Vec2::splat(self.border)
    }

    #[inline]
    pub fn max_anchor(&self, size: f32) -> Vec2 {
        Vec2::new(
            self.width - self.border - size,
            self.height - self.border - size,
        )
    }

    /// Hard clamp an anchor into bounds
    pub fn clamp(&self, anchor: Vec2, size: f32) -> Vec2 {
        let min = self.min_anchor();
        let max = self.max_anchor(size).max(min);
        anchor.clamp(min, max)
    }

    pub fn contains(&self, anchor: Vec2, size: f32) -> bool {
        let min = self.min_anchor();
        let max = self.max_anchor(size);
        anchor.cmpge(min).all() && anchor.cmple(max).all()
    }

    /// True when the anchor sits on (or past) a clamp edge on any axis
    pub fn touches_wall(&self, anchor: Vec2, size: f32) -> bool {
        let min = self.min_anchor();
        let max = self.max_anchor(size);
        anchor.cmple(min).any() || anchor.cmpge(max).any()
    }

    /// Per-axis test for the soft-bounce zone `inset` units inside the clamp edges
    pub fn in_bounce_zone(&self, anchor: Vec2, size: f32, inset: f32) -> BVec2 {
        let min = self.min_anchor() + Vec2::splat(inset);
        let max = self.max_anchor(size) - Vec2::splat(inset);
        anchor.cmple(min) | anchor.cmpge(max)
    }

    /// Integer spawn rectangle for an entity, inset by per-axis margins.
    /// Fractional edges round inward so every sample stays in bounds.
    pub fn spawn_region(&self, size: f32, margin: Vec2) -> SpawnRegion {
        let min = (self.min_anchor() + margin).ceil();
        let max = (self.max_anchor(size) - margin).floor().max(min);
        SpawnRegion {
            min: min.as_ivec2(),
            max: max.as_ivec2(),
        }
    }
}

/// Inclusive integer rectangle of spawn anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRegion {
    pub min: IVec2,
    pub max: IVec2,
}

impl SpawnRegion {
    /// Draw x then y
    pub fn sample(&self, rng: &mut impl RandomSource) -> Vec2 {
        let x = rng.int_inclusive(self.min.x, self.max.x);
        let y = rng.int_inclusive(self.min.y, self.max.y);
        Vec2::new(x as f32, y as f32)
    }

    pub fn contains(&self, anchor: Vec2) -> bool {
        anchor.x >= self.min.x as f32
            && anchor.x <= self.max.x as f32
            && anchor.y >= self.min.y as f32
            && anchor.y <= self.max.y as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRandom, seeded};

    fn arena() -> Arena {
        Arena::new(1200.0, 800.0, 10.0)
    }

    #[test]
    fn test_center() {
        assert_eq!(arena().center(), Vec2::new(600.0, 400.0));
        assert_eq!(Arena::new(1201.0, 801.0, 10.0).center(), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_clamp() {
        let a = arena();
        assert_eq!(a.clamp(Vec2::new(-50.0, 900.0), 20.0), Vec2::new(10.0, 770.0));
        assert_eq!(a.clamp(Vec2::new(2000.0, 5.0), 30.0), Vec2::new(1160.0, 10.0));
        assert_eq!(a.clamp(Vec2::new(300.0, 300.0), 20.0), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_touches_wall() {
        let a = arena();
        assert!(a.touches_wall(Vec2::new(10.0, 400.0), 20.0));
        assert!(a.touches_wall(Vec2::new(600.0, 770.0), 20.0));
        assert!(a.touches_wall(Vec2::new(1170.0, 400.0), 20.0));
        assert!(!a.touches_wall(Vec2::new(11.0, 11.0), 20.0));
        assert!(!a.touches_wall(Vec2::new(600.0, 400.0), 20.0));
    }

    #[test]
    fn test_bounce_zone_per_axis() {
        let a = arena();
        let zone = a.in_bounce_zone(Vec2::new(20.0, 400.0), 30.0, 10.0);
        assert!(zone.x);
        assert!(!zone.y);

        let zone = a.in_bounce_zone(Vec2::new(600.0, 750.0), 30.0, 10.0);
        assert!(!zone.x);
        assert!(zone.y);

        assert!(!a.in_bounce_zone(Vec2::new(21.0, 21.0), 30.0, 10.0).any());
    }

    #[test]
    fn test_spawn_regions() {
        let a = arena();
        let reset = a.spawn_region(30.0, Vec2::new(300.0, 200.0));
        assert_eq!(reset.min, IVec2::new(310, 210));
        assert_eq!(reset.max, IVec2::new(860, 560));

        let respawn = a.spawn_region(30.0, Vec2::splat(100.0));
        assert_eq!(respawn.min, IVec2::new(110, 110));
        assert_eq!(respawn.max, IVec2::new(1060, 660));
    }

    #[test]
    fn test_spawn_region_rounds_inward() {
        let a = Arena::new(1200.0, 800.0, 10.5);
        let region = a.spawn_region(30.0, Vec2::ZERO);
        assert_eq!(region.min, IVec2::new(11, 11));
        assert_eq!(region.max, IVec2::new(1159, 759));

        let mut low = ScriptedRandom::new().with_ints([i32::MIN, i32::MIN]);
        assert!(a.contains(region.sample(&mut low), 30.0));
        let mut high = ScriptedRandom::new().with_ints([i32::MAX, i32::MAX]);
        assert!(a.contains(region.sample(&mut high), 30.0));
    }

    #[test]
    fn test_spawn_sample_in_region() {
        let region = arena().spawn_region(30.0, Vec2::splat(100.0));
        let mut rng = seeded(3);
        for _ in 0..500 {
            let pos = region.sample(&mut rng);
            assert!(region.contains(pos));
            assert!(arena().contains(pos, 30.0));
        }

        let mut scripted = ScriptedRandom::new().with_ints([500, 300]);
        assert_eq!(region.sample(&mut scripted), Vec2::new(500.0, 300.0));
    }
}
