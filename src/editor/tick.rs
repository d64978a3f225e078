//! Per-frame update
//!
//! One call per frame drives everything: the layout pass (the viewport can
//! change at any time, so this polls rather than reacts), the
//! press/drag/release placement protocol, the double-click debounce and
//! launcher timers, and the level reset signals from the ball.

use glam::Vec2;

use super::block::{Behavior, BlockId, LauncherPhase};
use super::layout::layout_pass;
use super::state::{EditorEvent, EditorState, TimerKind};
use crate::consts::{LAUNCHER_SPIN_RATE, SIM_DT};
use crate::secs_to_ticks;

/// Resolved inputs for a single tick. The input collaborator has already
/// done the ray casting: presses and drags arrive as block ids and world
/// points, never as raw pointer coordinates.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Horizontal world extent of the screen this frame
    pub screen_x: Option<(f32, f32)>,
    /// A press landed on this block
    pub pressed: Option<BlockId>,
    /// Pointer position while the press is held
    pub drag_point: Option<Vec2>,
    /// The press ended this frame
    pub released: bool,
    /// The ball touched this block (launcher spin trigger)
    pub ball_contact: Option<BlockId>,
    /// The ball reached the goal; advance to the next level
    pub ball_finished: bool,
    /// The ball fell out; retry the current level
    pub ball_fallen: bool,
}

/// Advance the editor by one fixed timestep
pub fn tick(state: &mut EditorState, input: &FrameInput) {
    state.time_ticks += 1;

    if let Some((min_x, max_x)) = input.screen_x {
        apply_layout(state, min_x, max_x);
    }

    if input.ball_finished {
        let next = state.level + 1;
        state.reset_level();
        state.start_level(next);
    } else if input.ball_fallen {
        let level = state.level;
        state.reset_level();
        state.start_level(level);
    }

    if let Some(id) = input.pressed {
        handle_press(state, id);
    }
    if let Some(point) = input.drag_point {
        handle_drag(state, point);
    }
    if input.released {
        handle_release(state);
    }
    if let Some(id) = input.ball_contact {
        trigger_contact_spin(state, id);
    }

    fire_due_timers(state);
    integrate_launchers(state);
}

/// Recompute region bounds for the current screen extent; moved regions
/// carry their blocks along, and instances that no longer fit are deleted.
fn apply_layout(state: &mut EditorState, screen_min_x: f32, screen_max_x: f32) {
    let margin = state.settings.horizontal_margin;
    let shifts = layout_pass(screen_min_x, screen_max_x, margin, &mut state.regions);

    for shift in shifts {
        let Some(bounds) = state.region(shift.id).map(|r| r.bounds) else {
            continue;
        };
        // Translate first, then collect casualties; deleting while
        // iterating the block vec would skip entries.
        let mut doomed = Vec::new();
        for block in state.blocks.iter_mut().filter(|b| b.region == shift.id) {
            block.pos += shift.offset;
            if !block.template && !bounds.contains(block.pos, block.half_extents) {
                doomed.push(block.id);
            }
        }
        for id in doomed {
            state.delete_block(id);
        }
        state.events.push(EditorEvent::RegionResized {
            id: shift.id,
            offset: shift.offset,
        });
    }
}

fn handle_press(state: &mut EditorState, id: BlockId) {
    let now = state.time_ticks;
    let delay = state.click_delay_ticks();
    let Some(block) = state.block_mut(id) else {
        return;
    };
    // Budget-disabled templates reject interaction, not just the visual
    if !block.enabled {
        return;
    }
    block.click_count += 1;
    block.last_click_stamp = now;
    state.drag_target = Some(id);
    state.schedule(id, delay, TimerKind::ClickReset { stamp: now });
}

fn handle_drag(state: &mut EditorState, point: Vec2) {
    let Some(id) = state.drag_target else {
        return;
    };
    let Some(block) = state.block(id) else {
        return;
    };
    let owning_bounds = state.region(block.region).map(|r| r.bounds);
    let Some(block) = state.block_mut(id) else {
        return;
    };

    block.dragging = true;
    if block.template {
        // Captured once per gesture; later samples keep the first value
        if block.start_drag_pos.is_none() {
            block.start_drag_pos = Some(block.pos);
        }
        // Templates follow the pointer freely; bounds only matter on release
        block.pos = point;
    } else {
        // Instances are clamped to their region every sample
        block.pos = match owning_bounds {
            Some(bounds) => bounds.fit(point, block.half_extents),
            None => point,
        };
    }
}

fn handle_release(state: &mut EditorState) {
    let Some(id) = state.drag_target.take() else {
        return;
    };
    let Some(block) = state.block(id) else {
        return;
    };
    let is_template = block.template;
    let enabled = block.enabled;
    let double_click = block.click_count >= 2;
    let drop_pos = block.pos;
    let half_extents = block.half_extents;

    // Visual back to opaque regardless of outcome
    if let Some(block) = state.block_mut(id) {
        block.dragging = false;
    }

    if double_click && enabled {
        if is_template {
            // Committed at the area's nominal center, ignoring drag position
            let center = state.game_bounds().map(|b| b.center()).unwrap_or(Vec2::ZERO);
            state.commit_clone(id, center);
        } else {
            // Instances die outright, bypassing any bounds check
            state.delete_block(id);
            return;
        }
    }

    if is_template {
        // Independent of the double-click branch: a drop inside the game
        // area commits a clone where it landed. No game area means the
        // check degrades to "always in bounds".
        let in_bounds = state
            .game_bounds()
            .map(|b| b.contains(drop_pos, half_extents))
            .unwrap_or(true);
        if enabled && in_bounds {
            state.commit_clone(id, drop_pos);
        }
        // The palette copy snaps back to where the gesture started
        if let Some(block) = state.block_mut(id) {
            if let Some(start) = block.start_drag_pos.take() {
                block.pos = start;
            }
        }
    }
}

/// Ball contact spins a placed launcher once; palette launchers run their
/// own showcase cycle instead.
fn trigger_contact_spin(state: &mut EditorState, id: BlockId) {
    let spin = secs_to_ticks(state.settings.launcher_spin_secs);
    let Some(block) = state.block_mut(id) else {
        return;
    };
    if block.template {
        return;
    }
    let rest_pos = block.pos;
    let Behavior::Launcher(launcher) = &mut block.behavior else {
        return;
    };
    if !matches!(launcher.phase, LauncherPhase::Resting) {
        return;
    }
    launcher.phase = LauncherPhase::Spinning { rest_pos };
    state.schedule(id, spin, TimerKind::LauncherSpinEnd);
}

fn fire_due_timers(state: &mut EditorState) {
    for timer in state.take_due_timers() {
        match timer.kind {
            TimerKind::ClickReset { stamp } => {
                // A newer press restamped the block; leave its count alone
                if let Some(block) = state.block_mut(timer.block) {
                    if block.last_click_stamp == stamp {
                        block.click_count = 0;
                    }
                }
            }
            TimerKind::LauncherSpinStart => start_showcase_spin(state, timer.block),
            TimerKind::LauncherSpinEnd => end_spin(state, timer.block),
        }
    }
}

fn start_showcase_spin(state: &mut EditorState, id: BlockId) {
    let rest = secs_to_ticks(state.settings.launcher_rest_secs);
    let spin = secs_to_ticks(state.settings.launcher_spin_secs);
    let Some(block) = state.block_mut(id) else {
        return;
    };
    // Mid-drag: sit this cycle out and try again later
    if block.dragging {
        state.schedule(id, rest, TimerKind::LauncherSpinStart);
        return;
    }
    let rest_pos = block.pos;
    let Behavior::Launcher(launcher) = &mut block.behavior else {
        return;
    };
    if matches!(launcher.phase, LauncherPhase::Resting) {
        launcher.phase = LauncherPhase::Spinning { rest_pos };
        state.schedule(id, spin, TimerKind::LauncherSpinEnd);
    }
}

fn end_spin(state: &mut EditorState, id: BlockId) {
    let rest = secs_to_ticks(state.settings.launcher_rest_secs);
    let Some(block) = state.block_mut(id) else {
        return;
    };
    let is_template = block.template;
    if let Behavior::Launcher(launcher) = &mut block.behavior {
        if let LauncherPhase::Spinning { rest_pos } = launcher.phase {
            launcher.phase = LauncherPhase::Resting;
            launcher.angle = 0.0;
            block.pos = rest_pos;
        }
    }
    // Palette launchers keep cycling; instances wait for the next contact
    if is_template {
        state.schedule(id, rest, TimerKind::LauncherSpinStart);
    }
}

fn integrate_launchers(state: &mut EditorState) {
    for block in &mut state.blocks {
        if let Behavior::Launcher(launcher) = &mut block.behavior {
            if matches!(launcher.phase, LauncherPhase::Spinning { .. }) {
                launcher.angle += launcher.side.sign() * LAUNCHER_SPIN_RATE * SIM_DT;
            }
        }
    }
}
