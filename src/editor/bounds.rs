//! Rectangular region bounds
//!
//! Every block lives inside exactly one region at a time; these bounds are
//! what drag positions get clamped against and what decides whether a drop
//! commits. Both containment checks shrink the rectangle by the block's
//! half extents so a block counts as inside only when it fits entirely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a screen region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl RegionBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Clamp a position along one axis so a block with the given half extent
    /// stays inside `[min, max]`. A region too small for the block collapses
    /// the clamp range; in that case the block sits at the midpoint rather
    /// than oscillating over an inverted range.
    fn fit_axis(min: f32, max: f32, position: f32, half: f32) -> f32 {
        let lo = min + half;
        let hi = max - half;
        if lo > hi {
            return (min + max) / 2.0;
        }
        position.clamp(lo, hi)
    }

    /// One-axis containment, inclusive on both ends
    fn axis_in_bounds(min: f32, max: f32, position: f32, half: f32) -> bool {
        position >= min + half && position <= max - half
    }

    /// Nearest position to `point` at which a block with the given half
    /// extents fits fully inside these bounds
    pub fn fit(&self, point: Vec2, half_extents: Vec2) -> Vec2 {
        Vec2::new(
            Self::fit_axis(self.min_x, self.max_x, point.x, half_extents.x),
            Self::fit_axis(self.min_y, self.max_y, point.y, half_extents.y),
        )
    }

    /// Does a block with the given half extents fit fully inside these
    /// bounds when centered on `point`?
    pub fn contains(&self, point: Vec2, half_extents: Vec2) -> bool {
        Self::axis_in_bounds(self.min_x, self.max_x, point.x, half_extents.x)
            && Self::axis_in_bounds(self.min_y, self.max_y, point.y, half_extents.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> RegionBounds {
        RegionBounds::new(-10.0, 10.0, -5.0, 5.0)
    }

    #[test]
    fn test_center() {
        let b = RegionBounds::new(0.0, 10.0, 2.0, 6.0);
        assert_eq!(b.center(), Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_containment_inclusive_at_edges() {
        let half = Vec2::new(1.0, 1.0);
        // Exactly min_x + half is inside on both ends
        assert!(bounds().contains(Vec2::new(-9.0, 0.0), half));
        assert!(bounds().contains(Vec2::new(9.0, 0.0), half));
        assert!(bounds().contains(Vec2::new(0.0, -4.0), half));
        assert!(bounds().contains(Vec2::new(0.0, 4.0), half));
        // A hair past the edge is out
        assert!(!bounds().contains(Vec2::new(-9.001, 0.0), half));
        assert!(!bounds().contains(Vec2::new(0.0, 4.001), half));
    }

    #[test]
    fn test_fit_clamps_to_shrunk_rect() {
        let half = Vec2::new(2.0, 1.0);
        let fitted = bounds().fit(Vec2::new(100.0, -100.0), half);
        assert_eq!(fitted, Vec2::new(8.0, -4.0));
        // Points already inside are untouched
        let inside = Vec2::new(3.0, 2.0);
        assert_eq!(bounds().fit(inside, half), inside);
    }

    #[test]
    fn test_fit_degenerate_region_midpoint() {
        // Block wider than the region: forced to the X midpoint
        let b = RegionBounds::new(0.0, 2.0, 0.0, 10.0);
        let half = Vec2::new(3.0, 1.0);
        let fitted = b.fit(Vec2::new(50.0, 5.0), half);
        assert_eq!(fitted.x, 1.0);
        assert_eq!(fitted.y, 5.0);
    }

    #[test]
    fn test_fitted_point_is_contained() {
        let half = Vec2::new(1.5, 1.5);
        let fitted = bounds().fit(Vec2::new(-42.0, 3.0), half);
        assert!(bounds().contains(fitted, half));
    }

    proptest! {
        #[test]
        fn prop_fit_is_idempotent(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            hx in 0.1f32..8.0,
            hy in 0.1f32..8.0,
        ) {
            let half = Vec2::new(hx, hy);
            let once = bounds().fit(Vec2::new(x, y), half);
            let twice = bounds().fit(once, half);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_fit_contains_when_block_fits(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            hx in 0.1f32..9.9,
            hy in 0.1f32..4.9,
        ) {
            let half = Vec2::new(hx, hy);
            let fitted = bounds().fit(Vec2::new(x, y), half);
            prop_assert!(bounds().contains(fitted, half));
        }
    }
}
