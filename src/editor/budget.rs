//! Remaining-points budget
//!
//! Placement costs points, deletion refunds them; templates whose cost
//! exceeds the remaining balance are disabled. Each level starts from a
//! deterministic allowance.

use serde::{Deserialize, Serialize};

use crate::consts::LATE_LEVEL_POINTS;

/// Points available at the start of `level` given the level-1 allowance.
/// Decays quadratically for the first ten levels, then stays flat.
pub fn level_points(level: u32, start_points: i32) -> i32 {
    let level = level.max(1);
    if level > 10 {
        return LATE_LEVEL_POINTS;
    }
    let steps = (level - 1) as i32;
    start_points - 10 * steps * steps
}

/// Remaining-points counter
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Budget {
    remaining: i32,
}

impl Budget {
    pub fn for_level(level: u32, start_points: i32) -> Self {
        Self {
            remaining: level_points(level, start_points),
        }
    }

    #[inline]
    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Adjust the balance; negative deltas come from placement, positive
    /// from deletion. Returns the new balance. May go negative transiently;
    /// the caller re-derives every template's enabled flag afterwards.
    pub fn apply(&mut self, delta: i32) -> i32 {
        self.remaining += delta;
        self.remaining
    }

    #[inline]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.remaining >= cost
    }
}
