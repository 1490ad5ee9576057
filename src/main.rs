mod camera;
mod render;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use camera::{CameraState, apply_camera, camera_follow, camera_keys, camera_pan, camera_zoom, setup_camera};
use perceptron_forager::config::*;
use perceptron_forager::simulation::{
    ControlMode, PendingAction, SimRng, SimulationConfig, SimulationState, advance_tick,
};
use perceptron_forager::{Action, Agent, SimulationPlugin, WorldGrid, reset};
use render::{setup_grid_visuals, sync_agent_glyph, sync_cells};
use ui::ui_system;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Perceptron Forager".to_string(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(SimulationPlugin)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<CameraState>()
        .add_systems(Startup, (setup_camera, setup_grid_visuals))
        .add_systems(Update, keyboard_control.before(advance_tick))
        .add_systems(
            Update,
            (
                (camera_keys, camera_zoom, camera_pan, camera_follow, apply_camera)
                    .chain()
                    .after(advance_tick),
                sync_cells.after(advance_tick),
                sync_agent_glyph.after(advance_tick),
                ui_system,
            ),
        )
        .run();
}

/// Manual actions, mode switches and forced respawns from the keyboard
fn keyboard_control(
    keys: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingAction>,
    mut mode: ResMut<ControlMode>,
    mut state: ResMut<SimulationState>,
    mut world: ResMut<WorldGrid>,
    mut agent: ResMut<Agent>,
    mut rng: ResMut<SimRng>,
    config: Res<SimulationConfig>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        *mode = mode.toggled();
        pending.0 = None;
    }

    if keys.just_pressed(KeyCode::Space) {
        *state = match *state {
            SimulationState::Running => SimulationState::Paused,
            SimulationState::Paused => SimulationState::Running,
        };
    }

    if keys.just_pressed(KeyCode::Enter) {
        info!("Episode abandoned after {} ticks, respawning", agent.age);
        reset(&mut world, &mut agent, &mut rng.0, &config);
        pending.0 = None;
        return;
    }

    if *mode != ControlMode::Manual {
        return;
    }

    let bindings = [
        (KeyCode::KeyF, Action::Forward),
        (KeyCode::KeyB, Action::Backward),
        (KeyCode::KeyL, Action::Left),
        (KeyCode::KeyR, Action::Right),
        (KeyCode::KeyN, Action::Nothing),
    ];
    if let Some((_, action)) = bindings.iter().find(|(key, _)| keys.just_pressed(*key)) {
        pending.0 = Some(*action);
    }
}
