//! Drifting clouds above the city.
//!
//! Each cloud is a group of overlapping sphere puffs that slides along x at
//! a constant rate. Clouds never wrap; the backdrop is effectively infinite.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct CloudsPlugin;

impl Plugin for CloudsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CloudConfig>()
            .add_systems(Startup, spawn_clouds)
            .add_systems(Update, drift_clouds);
    }
}

/// Marker component for cloud groups.
#[derive(Component)]
pub struct Cloud;

#[derive(Resource)]
pub struct CloudConfig {
    pub count: usize,
    pub puffs_per_cloud: usize,
    /// Minimum puff radius; jitter adds up to 1.0 on top.
    pub puff_radius: f32,
    /// Drift along x per frame.
    pub drift_step: f32,
    /// Spawn bounds.
    pub extent_x: f32,
    pub extent_z: f32,
    pub base_height: f32,
    pub height_jitter: f32,
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 6,
            puffs_per_cloud: 3,
            puff_radius: 3.0,
            drift_step: 0.02,
            extent_x: 60.0,
            extent_z: 30.0,
            base_height: 30.0,
            height_jitter: 5.0,
            seed: 9000,
        }
    }
}

fn spawn_clouds(
    mut commands: Commands,
    config: Res<CloudConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let puff_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 1.0,
        ..default()
    });

    for _ in 0..config.count {
        let x = rng.gen_range(-config.extent_x..config.extent_x);
        let y = config.base_height + rng.gen::<f32>() * config.height_jitter;
        let z = rng.gen_range(-config.extent_z..config.extent_z);

        commands
            .spawn((Transform::from_xyz(x, y, z), Visibility::default(), Cloud))
            .with_children(|parent| {
                for j in 0..config.puffs_per_cloud {
                    let radius = config.puff_radius + rng.gen::<f32>();
                    let jitter = rng.gen::<f32>();
                    parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(radius))),
                        MeshMaterial3d(puff_material.clone()),
                        Transform::from_xyz(j as f32 * 2.0, jitter, 0.0),
                    ));
                }
            });
    }

    info!("Spawned {} clouds", config.count);
}

fn drift_clouds(config: Res<CloudConfig>, mut query: Query<&mut Transform, With<Cloud>>) {
    for mut transform in &mut query {
        transform.translation.x += config.drift_step;
    }
}
