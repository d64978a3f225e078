//! Placeable blocks
//!
//! A block is either a palette template (a stamp, never destroyed by level
//! reset) or a placed instance (a clone of a template living in the game
//! area). The old deep inheritance between block kinds is flattened into a
//! `Behavior` value ticked alongside the block.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::RegionId;

/// Stable block identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// Which way a launcher block flings the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchSide {
    Left,
    Right,
}

impl LaunchSide {
    /// Spin direction sign: counterclockwise launches left
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            LaunchSide::Left => 1.0,
            LaunchSide::Right => -1.0,
        }
    }
}

/// Launcher spin animation phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LauncherPhase {
    Resting,
    /// Spinning since the recorded rest position; snaps back when the
    /// spin-end timer fires
    Spinning { rest_pos: Vec2 },
}

/// Per-tick state of a launcher block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LauncherState {
    pub side: LaunchSide,
    pub phase: LauncherPhase,
    /// Current rotation for presentation (radians, 0 = upright)
    pub angle: f32,
}

impl LauncherState {
    pub fn new(side: LaunchSide) -> Self {
        Self {
            side,
            phase: LauncherPhase::Resting,
            angle: 0.0,
        }
    }
}

/// What a block does besides sitting there
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Ramps, walls, plain obstacles
    Fixed,
    /// Rotating launcher: periodic showcase spin on the palette, one spin
    /// per ball contact on the game area
    Launcher(LauncherState),
}

/// A positionable, costed entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Points deducted on placement, refunded on deletion
    pub cost: i32,
    /// Palette template (true) vs placed instance (false)
    pub template: bool,
    /// False when the remaining budget cannot afford this template
    pub enabled: bool,
    /// A drag gesture is in progress; presentation shows the translucent material
    pub dragging: bool,
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Template position captured at drag start, to snap back to on release.
    /// `Some` only mid-gesture.
    pub start_drag_pos: Option<Vec2>,
    /// Presses seen within the debounce window
    pub click_count: u32,
    /// Tick of the latest press; stale click timers compare against this
    pub last_click_stamp: u64,
    /// Region this block currently belongs to
    pub region: RegionId,
    pub behavior: Behavior,
}

impl Block {
    /// Create a palette template
    pub fn template(
        id: BlockId,
        region: RegionId,
        cost: i32,
        pos: Vec2,
        half_extents: Vec2,
        behavior: Behavior,
    ) -> Self {
        Self {
            id,
            cost,
            template: true,
            enabled: true,
            dragging: false,
            pos,
            half_extents,
            start_drag_pos: None,
            click_count: 0,
            last_click_stamp: 0,
            region,
            behavior,
        }
    }

    /// Clone this template's cost/shape/behavior into a fresh instance at
    /// `pos`, owned by `region`. Drag and click state do not carry over,
    /// and a launcher clone starts upright.
    pub fn clone_instance(&self, id: BlockId, region: RegionId, pos: Vec2) -> Self {
        let behavior = match self.behavior {
            Behavior::Fixed => Behavior::Fixed,
            Behavior::Launcher(state) => Behavior::Launcher(LauncherState::new(state.side)),
        };
        Self {
            id,
            cost: self.cost,
            template: false,
            enabled: true,
            dragging: false,
            pos,
            half_extents: self.half_extents,
            start_drag_pos: None,
            click_count: 0,
            last_click_stamp: 0,
            region,
            behavior,
        }
    }

    /// Shorthand for `matches!(self.behavior, Behavior::Launcher(_))`
    pub fn is_launcher(&self) -> bool {
        matches!(self.behavior, Behavior::Launcher(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_instance_resets_transient_state() {
        let mut template = Block::template(
            BlockId(1),
            RegionId(0),
            5,
            Vec2::new(-30.0, 2.0),
            Vec2::new(1.0, 1.0),
            Behavior::Launcher(LauncherState::new(LaunchSide::Right)),
        );
        template.dragging = true;
        template.click_count = 2;
        template.start_drag_pos = Some(template.pos);

        let clone = template.clone_instance(BlockId(9), RegionId(1), Vec2::ZERO);
        assert!(!clone.template);
        assert!(!clone.dragging);
        assert!(clone.enabled);
        assert_eq!(clone.click_count, 0);
        assert_eq!(clone.start_drag_pos, None);
        assert_eq!(clone.cost, 5);
        assert_eq!(clone.region, RegionId(1));
        match clone.behavior {
            Behavior::Launcher(state) => {
                assert_eq!(state.side, LaunchSide::Right);
                assert_eq!(state.phase, LauncherPhase::Resting);
                assert_eq!(state.angle, 0.0);
            }
            Behavior::Fixed => panic!("behavior should carry over"),
        }
    }

    #[test]
    fn test_launch_side_signs_oppose() {
        assert_eq!(LaunchSide::Left.sign(), -LaunchSide::Right.sign());
    }
}
