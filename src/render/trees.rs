//! Tree scatter across the city block.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct TreesPlugin;

impl Plugin for TreesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TreeConfig>()
            .add_systems(Startup, spawn_trees);
    }
}

/// Marker component for trees.
#[derive(Component)]
pub struct Tree;

#[derive(Resource)]
pub struct TreeConfig {
    pub count: usize,
    pub trunk_radius: f32,
    pub trunk_height: f32,
    pub foliage_radius: f32,
    pub foliage_height: f32,
    /// Half-extent of the placement area on x.
    pub extent_x: f32,
    /// Half-extent of the placement area on z.
    pub extent_z: f32,
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            count: 25,
            trunk_radius: 0.3,
            trunk_height: 2.0,
            foliage_radius: 1.5,
            foliage_height: 3.0,
            extent_x: 90.0,
            extent_z: 60.0,
            seed: 54321,
        }
    }
}

fn spawn_trees(
    mut commands: Commands,
    config: Res<TreeConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let trunk_mesh = meshes.add(Cylinder::new(config.trunk_radius, config.trunk_height));
    let foliage_mesh = meshes.add(Cone {
        radius: config.foliage_radius,
        height: config.foliage_height,
    });

    // Bark brown
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x8b, 0x45, 0x13),
        perceptual_roughness: 0.9,
        ..default()
    });
    // Deep green
    let foliage_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x00, 0x64, 0x00),
        perceptual_roughness: 0.8,
        ..default()
    });

    for _ in 0..config.count {
        let x = rng.gen_range(-config.extent_x..config.extent_x);
        let z = rng.gen_range(-config.extent_z..config.extent_z);

        commands
            .spawn((Transform::from_xyz(x, 0.0, z), Visibility::default(), Tree))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::from_xyz(0.0, config.trunk_height / 2.0, 0.0),
                ));
                parent.spawn((
                    Mesh3d(foliage_mesh.clone()),
                    MeshMaterial3d(foliage_material.clone()),
                    Transform::from_xyz(0.0, config.trunk_height + 1.0, 0.0),
                ));
            });
    }

    info!("Spawned {} trees", config.count);
}
