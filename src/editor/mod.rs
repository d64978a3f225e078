//! Deterministic placement module
//!
//! All placement logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by block ID)
//! - No rendering or platform dependencies
//!
//! Collaborators feed resolved pointer positions, screen extents and ball
//! signals in through [`FrameInput`] and drain [`EditorEvent`]s back out.

pub mod block;
pub mod bounds;
pub mod budget;
pub mod layout;
pub mod state;
pub mod tick;

pub use block::{Behavior, Block, BlockId, LaunchSide, LauncherPhase, LauncherState};
pub use bounds::RegionBounds;
pub use budget::{Budget, level_points};
pub use layout::{Region, RegionId, RegionRole, RegionShift, layout_pass};
pub use state::{EditorEvent, EditorState, Timer, TimerKind};
pub use tick::{FrameInput, tick};
