//! Runtime tuning
//!
//! Everything is runtime-only; there is no config file. Defaults come from
//! `consts` and a host can deserialize an override when embedding the core.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable placement-engine parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points granted on level 1 (decays with the level formula)
    pub start_points: i32,
    /// Gap between regions and to the screen edges
    pub horizontal_margin: f32,
    /// Double-click debounce window, seconds
    pub click_delay: f32,
    /// Launcher showcase cycle on the palette, seconds
    pub launcher_rest_secs: f32,
    pub launcher_spin_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_points: consts::START_POINTS,
            horizontal_margin: consts::HORIZONTAL_MARGIN,
            click_delay: consts::CLICK_DELAY,
            launcher_rest_secs: consts::LAUNCHER_REST_SECS,
            launcher_spin_secs: consts::LAUNCHER_SPIN_SECS,
        }
    }
}
