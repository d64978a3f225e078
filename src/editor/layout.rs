//! Screen-space region layout
//!
//! Regions (the palette strip, the game area) share the horizontal span of
//! the screen. Fixed-width regions keep their declared width; the leftover
//! span is split evenly among flexible regions. A fixed margin separates
//! the screen edges and each pair of neighbours. The pass runs every tick
//! because the viewport aspect ratio can change at any time; when nothing
//! moved it is a no-op.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::RegionBounds;

/// Stable region identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// What a region is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionRole {
    /// Template shelf; blocks here are never destroyed by reset
    Palette,
    /// Simulation area; committed instances live here
    GameArea,
}

/// A rectangular sub-area of the screen with a layout policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub role: RegionRole,
    pub bounds: RegionBounds,
    /// `Some(w)` pins this region to width `w`; `None` shares leftover span
    pub fixed_width: Option<f32>,
}

impl Region {
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }
}

/// A region whose bounds changed during a layout pass
#[derive(Debug, Clone, Copy)]
pub struct RegionShift {
    pub id: RegionId,
    /// How far the region's center moved; contained blocks follow by this
    pub offset: Vec2,
}

/// Repartition `regions` across `[screen_min_x, screen_max_x]` left to
/// right, ordered by current `min_x` (stable on ties). Y bounds are never
/// touched here; vertical layout is designer-set.
///
/// Returns one shift per region whose bounds actually changed.
pub fn layout_pass(
    screen_min_x: f32,
    screen_max_x: f32,
    margin: f32,
    regions: &mut [Region],
) -> Vec<RegionShift> {
    if regions.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..regions.len()).collect();
    order.sort_by(|&a, &b| {
        regions[a]
            .bounds
            .min_x
            .partial_cmp(&regions[b].bounds.min_x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let span = screen_max_x - screen_min_x;
    let sum_fixed: f32 = regions.iter().filter_map(|r| r.fixed_width).sum();
    let flex_count = regions.iter().filter(|r| r.fixed_width.is_none()).count();

    // Guarded: with no flexible regions there is nothing to divide the
    // leftover span among, and the division below would be by zero.
    let flex_width = if flex_count > 0 {
        let leftover = span - sum_fixed - (regions.len() as f32 + 1.0) * margin;
        // Viewport narrower than the fixed widths: collapse rather than invert
        (leftover / flex_count as f32).max(0.0)
    } else {
        0.0
    };

    let mut shifts = Vec::new();
    let mut cursor = screen_min_x + margin;

    for &i in &order {
        let region = &mut regions[i];
        let width = region.fixed_width.unwrap_or(flex_width);
        let new_bounds = RegionBounds::new(
            cursor,
            cursor + width,
            region.bounds.min_y,
            region.bounds.max_y,
        );
        cursor += width + margin;

        if new_bounds == region.bounds {
            continue;
        }

        let offset = new_bounds.center() - region.bounds.center();
        region.bounds = new_bounds;
        shifts.push(RegionShift {
            id: region.id,
            offset,
        });
    }

    shifts
}
