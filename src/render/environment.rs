//! Static environment: ground, roads, lane stripes, and sidewalks.
//!
//! Placement is fully deterministic; the two roads cross at the origin and
//! the strip between them is reserved for traffic.

use bevy::prelude::*;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_environment);
    }
}

/// Ground plane footprint.
pub const GROUND_SIZE: Vec2 = Vec2::new(220.0, 140.0);
/// Lane stripe spacing along each road.
pub const STRIPE_SPACING: f32 = 13.0;
/// Sidewalk offset from the road centerline.
pub const SIDEWALK_OFFSET: f32 = 6.0;

fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Grass
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x2e, 0x8b, 0x57),
        perceptual_roughness: 0.95,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE.x, GROUND_SIZE.y))),
        MeshMaterial3d(ground_material),
    ));

    // Asphalt roads crossing at the origin
    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0x22, 0x22),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(180.0, 0.2, 10.0))),
        MeshMaterial3d(road_material.clone()),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(10.0, 0.2, 120.0))),
        MeshMaterial3d(road_material),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));

    // Lane stripes along both roads
    let stripe_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.7,
        ..default()
    });
    let stripe_h = meshes.add(Cuboid::new(2.0, 0.05, 0.3));
    let stripe_v = meshes.add(Cuboid::new(0.3, 0.05, 2.0));
    for i in -6..=6 {
        let offset = i as f32 * STRIPE_SPACING;
        commands.spawn((
            Mesh3d(stripe_h.clone()),
            MeshMaterial3d(stripe_material.clone()),
            Transform::from_xyz(offset, 0.15, 0.0),
        ));
        commands.spawn((
            Mesh3d(stripe_v.clone()),
            MeshMaterial3d(stripe_material.clone()),
            Transform::from_xyz(0.0, 0.15, offset),
        ));
    }

    // Sidewalk slabs flanking each road
    let sidewalk_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xbc, 0xbc, 0xbc),
        perceptual_roughness: 0.85,
        ..default()
    });
    let sidewalk_h = meshes.add(Cuboid::new(180.0, 0.3, 2.0));
    let sidewalk_v = meshes.add(Cuboid::new(2.0, 0.3, 120.0));
    for side in [-1.0, 1.0] {
        commands.spawn((
            Mesh3d(sidewalk_h.clone()),
            MeshMaterial3d(sidewalk_material.clone()),
            Transform::from_xyz(0.0, 0.15, side * SIDEWALK_OFFSET),
        ));
        commands.spawn((
            Mesh3d(sidewalk_v.clone()),
            MeshMaterial3d(sidewalk_material.clone()),
            Transform::from_xyz(side * SIDEWALK_OFFSET, 0.15, 0.0),
        ));
    }

    info!("Environment ready: ground, 2 roads, 26 stripes, 4 sidewalks");
}
