//! Orbiting perspective camera with damped drag/zoom controls.
//!
//! The camera circles the city on its own; dragging adds angular velocity
//! on top of the auto-orbit and the wheel adjusts height, both decaying
//! toward rest each frame.

use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitConfig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_input, advance_orbit).chain());
    }
}

/// Marker plus orbit state for the main camera.
#[derive(Component, Default)]
pub struct OrbitCamera {
    /// Accumulated orbit angle in radians.
    pub angle: f32,
    /// User-applied angular velocity (radians/frame), damped.
    pub angle_velocity: f32,
    /// User-applied vertical velocity (units/frame), damped.
    pub height_velocity: f32,
}

#[derive(Resource)]
pub struct OrbitConfig {
    /// Orbit circle radius around the origin.
    pub radius: f32,
    /// Point the camera keeps aimed at.
    pub target: Vec3,
    /// Auto-orbit advance per frame (radians).
    pub auto_rotate_step: f32,
    /// Fraction of user velocity shed per frame.
    pub damping: f32,
    /// Radians of angular velocity per pixel of horizontal drag.
    pub drag_sensitivity: f32,
    /// Height velocity per pixel of vertical drag.
    pub lift_sensitivity: f32,
    /// Height velocity per wheel step.
    pub zoom_sensitivity: f32,
    pub initial_height: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            target: Vec3::new(0.0, 10.0, 0.0),
            auto_rotate_step: 0.001,
            damping: 0.05,
            drag_sensitivity: 0.0002,
            lift_sensitivity: 0.02,
            zoom_sensitivity: 2.0,
            initial_height: 60.0,
            min_height: 10.0,
            max_height: 150.0,
        }
    }
}

/// Camera position on the orbit circle for a given angle and height.
pub fn orbit_position(angle: f32, height: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.sin() * radius, height, angle.cos() * radius)
}

fn setup_camera(mut commands: Commands, config: Res<OrbitConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 400.0,
            ..default()
        }),
        Transform::from_xyz(config.radius, config.initial_height, config.radius)
            .looking_at(config.target, Vec3::Y),
        OrbitCamera::default(),
    ));
}

fn orbit_input(
    config: Res<OrbitConfig>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut query: Query<&mut OrbitCamera>,
) {
    let mut drag = Vec2::ZERO;
    if mouse_buttons.pressed(MouseButton::Left) {
        for event in mouse_motion.read() {
            drag += event.delta;
        }
    } else {
        mouse_motion.clear();
    }

    let scroll: f32 = scroll_events.read().map(|e| e.y).sum();

    if drag == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    for mut orbit in &mut query {
        orbit.angle_velocity += drag.x * config.drag_sensitivity;
        orbit.height_velocity += drag.y * config.lift_sensitivity;
        orbit.height_velocity -= scroll * config.zoom_sensitivity;
    }
}

fn advance_orbit(
    config: Res<OrbitConfig>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    for (mut transform, mut orbit) in &mut query {
        orbit.angle += config.auto_rotate_step + orbit.angle_velocity;

        let height = (transform.translation.y + orbit.height_velocity)
            .clamp(config.min_height, config.max_height);

        orbit.angle_velocity *= 1.0 - config.damping;
        orbit.height_velocity *= 1.0 - config.damping;

        transform.translation = orbit_position(orbit.angle, height, config.radius);
        transform.look_at(config.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_stays_on_circle() {
        for i in 0..32 {
            let angle = i as f32 * 0.3;
            let pos = orbit_position(angle, 60.0, 100.0);
            let horizontal = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!((horizontal - 100.0).abs() < 1e-3);
            assert_eq!(pos.y, 60.0);
        }
    }

    #[test]
    fn orbit_angle_zero_faces_positive_z() {
        let pos = orbit_position(0.0, 60.0, 100.0);
        assert!(pos.x.abs() < 1e-6);
        assert!((pos.z - 100.0).abs() < 1e-6);
    }
}
