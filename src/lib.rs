//! Blockdrop - placement core for a 2D block-drop puzzle
//!
//! Core modules:
//! - `editor`: Deterministic placement/layout simulation (regions, blocks, budget)
//! - `settings`: Data-driven tuning for margins, delays and level budgets
//!
//! Rendering, physics integration and input polling live outside this crate;
//! they feed resolved pointer positions and ball signals in through
//! [`editor::FrameInput`] and drain [`editor::EditorEvent`]s back out.

pub mod editor;
pub mod settings;

pub use editor::{Block, EditorEvent, EditorState, FrameInput, RegionBounds};
pub use settings::Settings;

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz, matching the outer game loop)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Distance between a region and the screen edge or a neighbouring region
    pub const HORIZONTAL_MARGIN: f32 = 1.0;

    /// Double-click debounce window in seconds
    pub const CLICK_DELAY: f32 = 0.2;

    /// Default points granted on level 1
    pub const START_POINTS: i32 = 100;

    /// Budget floor for levels past the formula range
    pub const LATE_LEVEL_POINTS: i32 = 30;

    /// Launcher showcase cycle on the palette: rest, then spin, then snap back
    pub const LAUNCHER_REST_SECS: f32 = 3.0;
    pub const LAUNCHER_SPIN_SECS: f32 = 1.0;

    /// Launcher spin rate while animating (radians/sec, sign from side)
    pub const LAUNCHER_SPIN_RATE: f32 = 2.0 * std::f32::consts::PI;
}

/// Convert a duration in seconds to whole simulation ticks (rounded up so a
/// positive delay never collapses to zero)
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs / consts::SIM_DT).ceil() as u64
}
