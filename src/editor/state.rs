//! Editor state
//!
//! All state the placement engine mutates lives here: the region set, the
//! block vector (kept in ascending-id order for deterministic iteration),
//! the points budget, the pending timer queue and the outbound event queue.
//! External collaborators never reach in directly; they drive the state
//! through `tick` and drain events after each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::{Behavior, Block, BlockId};
use super::budget::Budget;
use super::bounds::RegionBounds;
use super::layout::{Region, RegionId, RegionRole};
use crate::secs_to_ticks;
use crate::settings::Settings;

/// Outbound signals for presentation/physics collaborators.
///
/// Replaces the original's static event fields: the queue is owned by the
/// state, collaborators drain it once per frame, and nothing in the core
/// depends on it being consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// A template was committed into the game area
    Placed { cost: i32 },
    /// An instance was removed (double-click or resize pushed it out)
    Deleted { cost: i32 },
    /// New budget balance after any placement/deletion/level change
    PointsChanged(i32),
    /// Level ended or failed; resettable collaborators (balls, goals)
    /// should return to their start state
    ResetRequested,
    /// A region moved or changed size during a layout pass
    RegionResized { id: RegionId, offset: Vec2 },
    /// A level began with the given allowance
    LevelStarted { level: u32, points: i32 },
}

/// Deferred work keyed by block identity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TimerKind {
    /// Double-click debounce expiry; resets the click count unless a newer
    /// press restamped the block
    ClickReset { stamp: u64 },
    /// Palette launcher showcase: wind up and start spinning
    LauncherSpinStart,
    /// Stop spinning and snap back upright
    LauncherSpinEnd,
}

/// A pending timer. Deleting a block drops its timers, so no timer ever
/// fires against a dead id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timer {
    pub block: BlockId,
    pub fires_at: u64,
    pub kind: TimerKind,
}

/// Complete placement-engine state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorState {
    pub settings: Settings,
    /// All screen regions; bounds are rewritten by the layout pass
    pub regions: Vec<Region>,
    /// Templates and instances, ascending id
    pub blocks: Vec<Block>,
    pub budget: Budget,
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Block currently under a press/drag gesture
    pub drag_target: Option<BlockId>,
    pub(crate) timers: Vec<Timer>,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<EditorEvent>,
    next_id: u32,
}

impl EditorState {
    pub fn new(settings: Settings, regions: Vec<Region>) -> Self {
        let mut state = Self {
            settings,
            regions,
            blocks: Vec::new(),
            budget: Budget::for_level(1, settings.start_points),
            level: 1,
            time_ticks: 0,
            drag_target: None,
            timers: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.start_level(1);
        state
    }

    /// Allocate a new block ID
    pub fn next_block_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// The simulation area, if this context has one. Editor-preview
    /// contexts may not; every bounds operation then degrades to
    /// "always in bounds" and commits land at the origin.
    pub fn game_region(&self) -> Option<&Region> {
        self.regions.iter().find(|r| r.role == RegionRole::GameArea)
    }

    pub fn game_bounds(&self) -> Option<RegionBounds> {
        self.game_region().map(|r| r.bounds)
    }

    /// Create a palette template. Launcher templates start their showcase
    /// cycle immediately.
    pub fn spawn_template(
        &mut self,
        region: RegionId,
        cost: i32,
        pos: Vec2,
        half_extents: Vec2,
        behavior: Behavior,
    ) -> BlockId {
        let id = self.next_block_id();
        let mut block = Block::template(id, region, cost, pos, half_extents, behavior);
        block.enabled = self.budget.can_afford(cost);
        let launcher = block.is_launcher();
        self.blocks.push(block);
        if launcher {
            let rest = secs_to_ticks(self.settings.launcher_rest_secs);
            self.schedule(id, rest, TimerKind::LauncherSpinStart);
        }
        id
    }

    /// Clone `template_id` into the game area at `pos` and charge its cost.
    /// The clone is a plain instance: double-clicking it deletes rather
    /// than re-clones. Returns the new id, or `None` for an unknown or
    /// non-template source.
    pub fn commit_clone(&mut self, template_id: BlockId, pos: Vec2) -> Option<BlockId> {
        let template = self.block(template_id)?;
        if !template.template {
            return None;
        }
        let region = self
            .game_region()
            .map(|r| r.id)
            .unwrap_or(template.region);
        let id = self.next_block_id();
        let clone = self.block(template_id)?.clone_instance(id, region, pos);
        let cost = clone.cost;
        self.blocks.push(clone);
        log::debug!("placed block {:?} at {:?} (cost {})", id, pos, cost);
        self.events.push(EditorEvent::Placed { cost });
        self.apply_points(-cost);
        Some(id)
    }

    /// Remove a block and refund its cost. Idempotent: deleting an id that
    /// is already gone is a no-op. Pending timers for the block die with it.
    pub fn delete_block(&mut self, id: BlockId) {
        let Some(index) = self.blocks.iter().position(|b| b.id == id) else {
            return;
        };
        let cost = self.blocks[index].cost;
        self.blocks.remove(index);
        self.timers.retain(|t| t.block != id);
        if self.drag_target == Some(id) {
            self.drag_target = None;
        }
        log::debug!("deleted block {:?} (refund {})", id, cost);
        self.events.push(EditorEvent::Deleted { cost });
        self.apply_points(cost);
    }

    /// Adjust the budget and synchronously re-derive every template's
    /// enabled flag from the new balance.
    pub fn apply_points(&mut self, delta: i32) {
        let remaining = self.budget.apply(delta);
        self.events.push(EditorEvent::PointsChanged(remaining));
        self.refresh_enabled();
    }

    fn refresh_enabled(&mut self) {
        let budget = self.budget;
        for block in self.blocks.iter_mut().filter(|b| b.template) {
            block.enabled = budget.can_afford(block.cost);
        }
    }

    /// Broadcast the reset signal: every placed instance self-destroys,
    /// templates ignore it. Destroyed instances do not refund points; the
    /// caller re-initializes the budget right after.
    pub fn reset_level(&mut self) {
        self.events.push(EditorEvent::ResetRequested);
        // Snapshot the doomed ids first: the subscriber set must not be
        // mutated while the broadcast iterates it.
        let doomed: Vec<BlockId> = self
            .blocks
            .iter()
            .filter(|b| !b.template)
            .map(|b| b.id)
            .collect();
        for id in &doomed {
            self.timers.retain(|t| t.block != *id);
            if self.drag_target == Some(*id) {
                self.drag_target = None;
            }
        }
        self.blocks.retain(|b| b.template);
        log::info!("level reset: {} instances cleared", doomed.len());
    }

    /// Begin a level: re-initialize the budget from the level formula and
    /// re-gate every template.
    pub fn start_level(&mut self, level: u32) {
        self.level = level;
        self.budget = Budget::for_level(level, self.settings.start_points);
        let points = self.budget.remaining();
        log::info!("level {} started with {} points", level, points);
        self.events.push(EditorEvent::LevelStarted { level, points });
        self.events.push(EditorEvent::PointsChanged(points));
        self.refresh_enabled();
    }

    pub fn schedule(&mut self, block: BlockId, delay_ticks: u64, kind: TimerKind) {
        self.timers.push(Timer {
            block,
            fires_at: self.time_ticks + delay_ticks,
            kind,
        });
    }

    /// Remove and return every timer due at the current tick
    pub(crate) fn take_due_timers(&mut self) -> Vec<Timer> {
        let now = self.time_ticks;
        let (due, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.fires_at <= now);
        self.timers = pending;
        due
    }

    /// Hand the accumulated events to a collaborator
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn click_delay_ticks(&self) -> u64 {
        secs_to_ticks(self.settings.click_delay)
    }
}
