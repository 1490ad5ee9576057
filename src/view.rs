//! Mapping between grid tiles and the viewer's world space.
//!
//! The grid is drawn centred on the origin with row 0 at the top, so the
//! camera's default position shows all of it.

use crate::config::*;
use bevy::math::Vec2;

/// Half the grid's extent in world units, per axis
pub fn grid_half_extent() -> Vec2 {
    Vec2::new(
        WORLD_WIDTH as f32 * CELL_SIZE / 2.0,
        WORLD_HEIGHT as f32 * CELL_SIZE / 2.0,
    )
}

/// Centre of a grid tile in world space
pub fn tile_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) * CELL_SIZE,
        -(y as f32 + 0.5) * CELL_SIZE,
    ) + Vec2::new(-1.0, 1.0) * grid_half_extent()
}

/// Keep a camera centre over the grid
pub fn clamp_to_grid(position: Vec2) -> Vec2 {
    let half = grid_half_extent();
    position.clamp(-half, half)
}

/// Zoom level after `lines` of mouse-wheel scroll. Scrolling up zooms in.
pub fn zoom_after_scroll(zoom: f32, lines: f32) -> f32 {
    (zoom - lines * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Pan offset for a mouse drag. Screen y grows downward, world y upward, and
/// the drag moves the grid under the cursor rather than the camera.
pub fn drag_offset(screen_delta: Vec2, zoom: f32) -> Vec2 {
    Vec2::new(-screen_delta.x, screen_delta.y) * zoom
}
