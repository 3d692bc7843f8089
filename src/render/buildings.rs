//! Building grid generator.
//!
//! Buildings are laid out on a fixed grid around the road intersection.
//! Each one samples an energy level in [0, 1] that drives its height, base
//! color, and emissive glow; the energy is re-sampled periodically by
//! `simulation::energy`.

use bevy::{pbr::NotShadowCaster, prelude::*};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct BuildingsPlugin;

impl Plugin for BuildingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuildingConfig>()
            .add_systems(Startup, spawn_buildings);
    }
}

/// A city building and its current energy reading.
#[derive(Component)]
pub struct Building {
    /// Energy level in [0, 1].
    pub energy: f32,
    /// Box half-extents in local space, for ray picking.
    pub half_extents: Vec3,
}

#[derive(Resource)]
pub struct BuildingConfig {
    pub seed: u64,
    /// Building footprint (x and z extent).
    pub footprint: f32,
    /// Maximum yaw jitter in radians (+/-).
    pub yaw_jitter: f32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            footprint: 6.0,
            yaw_jitter: 0.05,
        }
    }
}

// Cold-to-hot energy ramp endpoints
const ENERGY_LOW: (f32, f32, f32) = (1.0, 1.0, 136.0 / 255.0);
const ENERGY_HIGH: (f32, f32, f32) = (1.0, 0.0, 0.0);

/// Grid cell centers: x in [-90, 90] and z in [-60, 60], stepped by 25,
/// skipping cells inside the road intersection.
pub fn grid_positions() -> Vec<Vec2> {
    let mut positions = Vec::new();
    let mut x: i32 = -90;
    while x <= 90 {
        let mut z: i32 = -60;
        while z <= 60 {
            // Central cells are reserved for the road crossing
            if !(x.abs() < 6 && z.abs() < 6) {
                positions.push(Vec2::new(x as f32, z as f32));
            }
            z += 25;
        }
        x += 25;
    }
    positions
}

/// Building height for an energy level.
pub fn building_height(energy: f32) -> f32 {
    10.0 + energy * 25.0
}

/// Base color for an energy level: pale yellow at 0, red at 1.
pub fn energy_color(energy: f32) -> Color {
    let t = energy.clamp(0.0, 1.0);
    Color::srgb(
        ENERGY_LOW.0 + (ENERGY_HIGH.0 - ENERGY_LOW.0) * t,
        ENERGY_LOW.1 + (ENERGY_HIGH.1 - ENERGY_LOW.1) * t,
        ENERGY_LOW.2 + (ENERGY_HIGH.2 - ENERGY_LOW.2) * t,
    )
}

/// Emissive color for an energy level: the base color at energy * 0.5.
pub fn energy_emissive(energy: f32) -> LinearRgba {
    energy_color(energy).to_linear() * (energy.clamp(0.0, 1.0) * 0.5)
}

fn spawn_buildings(
    mut commands: Commands,
    config: Res<BuildingConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    // Tinted glass overlay shared by every building
    let windows_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.133, 0.133, 0.133, 0.3),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let positions = grid_positions();
    for cell in &positions {
        let energy: f32 = rng.gen();
        let height = building_height(energy);
        let half_extents = Vec3::new(config.footprint / 2.0, height / 2.0, config.footprint / 2.0);
        let yaw = (rng.gen::<f32>() - 0.5) * config.yaw_jitter * 2.0;

        let shell = meshes.add(Cuboid::new(config.footprint, height, config.footprint));
        // Each building owns its material so the energy refresh can recolor
        // it independently
        let material = materials.add(StandardMaterial {
            base_color: energy_color(energy),
            emissive: energy_emissive(energy),
            metallic: 0.4,
            perceptual_roughness: 0.4,
            ..default()
        });

        commands
            .spawn((
                Mesh3d(shell.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(cell.x, height / 2.0, cell.y)
                    .with_rotation(Quat::from_rotation_y(yaw)),
                Building {
                    energy,
                    half_extents,
                },
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(shell),
                    MeshMaterial3d(windows_material.clone()),
                    Transform::IDENTITY,
                    NotShadowCaster,
                ));
            });
    }

    info!("Spawned {} buildings", positions.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_deterministic_and_skips_intersection() {
        let positions = grid_positions();
        assert_eq!(positions.len(), 40);
        assert_eq!(positions, grid_positions());
        for cell in &positions {
            assert!(!(cell.x.abs() < 6.0 && cell.y.abs() < 6.0));
            assert!(cell.x >= -90.0 && cell.x <= 90.0);
            assert!(cell.y >= -60.0 && cell.y <= 60.0);
        }
    }

    #[test]
    fn height_tracks_energy() {
        assert_eq!(building_height(0.0), 10.0);
        assert_eq!(building_height(1.0), 35.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let energy: f32 = rng.gen();
            let height = building_height(energy);
            assert!((10.0..=35.0).contains(&height));
        }
    }

    #[test]
    fn energy_color_endpoints() {
        let low = energy_color(0.0).to_srgba();
        assert!((low.red - 1.0).abs() < 1e-6);
        assert!((low.green - 1.0).abs() < 1e-6);
        assert!((low.blue - 136.0 / 255.0).abs() < 1e-6);

        let high = energy_color(1.0).to_srgba();
        assert!((high.red - 1.0).abs() < 1e-6);
        assert!(high.green.abs() < 1e-6);
        assert!(high.blue.abs() < 1e-6);
    }

    #[test]
    fn emissive_intensity_is_bounded() {
        for i in 0..=100 {
            let energy = i as f32 / 100.0;
            let emissive = energy_emissive(energy);
            // Luminance never exceeds the 0.5 emissive scale at full energy
            assert!(emissive.red <= 0.5 + 1e-6);
            assert!(emissive.red >= 0.0);
            assert!(emissive.green >= 0.0 && emissive.blue >= 0.0);
        }
        assert_eq!(energy_emissive(0.0).red, 0.0);
    }
}
