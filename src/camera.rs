use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use perceptron_forager::Agent;
use perceptron_forager::view::{clamp_to_grid, drag_offset, tile_center, zoom_after_scroll};

/// Pixels of touchpad scroll treated as one wheel line
const PIXELS_PER_LINE: f32 = 40.0;

#[derive(Component)]
pub struct MainCamera;

/// Where the camera should look. Input systems edit this, `apply_camera`
/// writes it to the camera entity.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraState {
    pub zoom: f32,
    pub position: Vec2,
    pub is_panning: bool,
    pub follow_agent: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            position: Vec2::ZERO,
            is_panning: false,
            follow_agent: false,
        }
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::default(),
        OrthographicProjection::default_2d(),
    ));
}

pub fn camera_zoom(mut scroll_events: EventReader<MouseWheel>, mut camera_state: ResMut<CameraState>) {
    let lines: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
        })
        .sum();

    if lines != 0.0 {
        camera_state.zoom = zoom_after_scroll(camera_state.zoom, lines);
    }
}

/// Middle-drag pans the view and stops following the agent
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut camera_state: ResMut<CameraState>,
) {
    if mouse_button.just_pressed(MouseButton::Middle) {
        camera_state.is_panning = true;
        camera_state.follow_agent = false;
    }
    if mouse_button.just_released(MouseButton::Middle) {
        camera_state.is_panning = false;
    }

    let delta: Vec2 = motion_events.read().map(|event| event.delta).sum();
    if !camera_state.is_panning || delta == Vec2::ZERO {
        return;
    }

    let offset = drag_offset(delta, camera_state.zoom);
    camera_state.position = clamp_to_grid(camera_state.position + offset);
}

/// Home snaps back to the whole-grid view, C toggles following the agent
pub fn camera_keys(keys: Res<ButtonInput<KeyCode>>, mut camera_state: ResMut<CameraState>) {
    if keys.just_pressed(KeyCode::Home) {
        *camera_state = CameraState::default();
    }
    if keys.just_pressed(KeyCode::KeyC) {
        camera_state.follow_agent = !camera_state.follow_agent;
    }
}

pub fn camera_follow(agent: Res<Agent>, mut camera_state: ResMut<CameraState>) {
    if !camera_state.follow_agent {
        return;
    }
    let target = tile_center(agent.x, agent.y);
    if camera_state.position != target {
        camera_state.position = target;
    }
}

pub fn apply_camera(
    camera_state: Res<CameraState>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<MainCamera>>,
) {
    if !camera_state.is_changed() {
        return;
    }
    if let Ok((mut transform, mut projection)) = query.get_single_mut() {
        transform.translation.x = camera_state.position.x;
        transform.translation.y = camera_state.position.y;
        projection.scale = camera_state.zoom;
    }
}
