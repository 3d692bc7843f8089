//! Click-to-inspect tool: raycasts the cursor against buildings.
//!
//! Only buildings are hit-tested; ground, roads, and props never intercept
//! a click. Results go out as `BuildingPicked` events for the UI.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::OrbitCamera;
use crate::render::buildings::Building;
use crate::tools::raycast::ray_box_intersection;

pub struct InspectPlugin;

impl Plugin for InspectPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BuildingPicked>()
            .add_systems(Update, pick_building);
    }
}

/// Result of a click: the hit building's energy, or `None` on a miss.
#[derive(Event)]
pub struct BuildingPicked {
    pub energy: Option<f32>,
    /// Cursor position in window logical pixels.
    pub cursor: Vec2,
}

fn pick_building(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    buildings: Query<(&Building, &GlobalTransform)>,
    mut picked: EventWriter<BuildingPicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    // Nearest hit along the ray wins
    let mut nearest: Option<(f32, f32)> = None;
    for (building, transform) in &buildings {
        // Test in the building's local frame so the yaw jitter is honored
        let to_local = transform.affine().inverse();
        let local_origin = to_local.transform_point3(ray.origin);
        let local_dir = to_local.transform_vector3(*ray.direction);

        if let Some(t) = ray_box_intersection(local_origin, local_dir, building.half_extents) {
            if nearest.map_or(true, |(best, _)| t < best) {
                nearest = Some((t, building.energy));
            }
        }
    }

    picked.send(BuildingPicked {
        energy: nearest.map(|(_, energy)| energy),
        cursor,
    });
}
