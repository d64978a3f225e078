//! Blockdrop headless driver
//!
//! Runs a short scripted editing session against the placement core and
//! logs what happens. The real game embeds the library behind a renderer
//! and input collaborator; this binary exists for poking at the engine
//! from a terminal.

use glam::Vec2;

use blockdrop::editor::{
    Behavior, EditorState, FrameInput, LaunchSide, LauncherState, Region, RegionBounds, RegionId,
    RegionRole, tick,
};
use blockdrop::settings::Settings;

fn log_events(state: &mut EditorState) {
    for event in state.drain_events() {
        log::info!("event: {:?}", event);
    }
}

fn run(state: &mut EditorState, input: FrameInput) {
    tick(state, &input);
    log_events(state);
}

fn main() {
    env_logger::init();

    let regions = vec![
        Region {
            id: RegionId(0),
            role: RegionRole::Palette,
            bounds: RegionBounds::new(-49.0, -29.0, -5.0, 5.0),
            fixed_width: Some(20.0),
        },
        Region {
            id: RegionId(1),
            role: RegionRole::GameArea,
            bounds: RegionBounds::new(-28.0, 49.0, -5.0, 5.0),
            fixed_width: None,
        },
    ];
    let mut state = EditorState::new(Settings::default(), regions);
    log_events(&mut state);

    let ramp = state.spawn_template(
        RegionId(0),
        5,
        Vec2::new(-40.0, 2.0),
        Vec2::new(1.5, 0.5),
        Behavior::Fixed,
    );
    let launcher = state.spawn_template(
        RegionId(0),
        10,
        Vec2::new(-40.0, -2.0),
        Vec2::new(1.5, 1.0),
        Behavior::Launcher(LauncherState::new(LaunchSide::Left)),
    );
    log::info!("palette ready: ramp {:?}, launcher {:?}", ramp, launcher);

    // Drag the ramp into the middle of the game area and drop it
    run(
        &mut state,
        FrameInput {
            pressed: Some(ramp),
            ..Default::default()
        },
    );
    run(
        &mut state,
        FrameInput {
            drag_point: Some(Vec2::new(10.0, 1.0)),
            ..Default::default()
        },
    );
    run(
        &mut state,
        FrameInput {
            released: true,
            ..Default::default()
        },
    );

    // Double-click the launcher template: commits a copy at the area center
    run(
        &mut state,
        FrameInput {
            pressed: Some(launcher),
            ..Default::default()
        },
    );
    run(
        &mut state,
        FrameInput {
            pressed: Some(launcher),
            released: true,
            ..Default::default()
        },
    );

    // Narrow the viewport; regions re-partition and carry their blocks
    run(
        &mut state,
        FrameInput {
            screen_x: Some((-35.0, 35.0)),
            ..Default::default()
        },
    );

    // Let launcher showcase cycles and click timers play out
    for _ in 0..600 {
        run(&mut state, FrameInput::default());
    }

    // Ball reaches the goal: next level, board cleared
    run(
        &mut state,
        FrameInput {
            ball_finished: true,
            ..Default::default()
        },
    );

    log::info!(
        "session done: level {}, {} points, {} blocks on palette",
        state.level,
        state.budget.remaining(),
        state.blocks.len()
    );
}
