//! Street lamp rows flanking the horizontal road.
//!
//! Each lamp is a pole, a glowing fixture sphere, and a real PointLight.

use bevy::prelude::*;

pub struct StreetLampsPlugin;

impl Plugin for StreetLampsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LampConfig>()
            .add_systems(Startup, spawn_street_lamps);
    }
}

#[derive(Component)]
pub struct StreetLamp;

#[derive(Resource)]
pub struct LampConfig {
    /// Spacing between lamps along the road.
    pub spacing: f32,
    /// Lamp index range on each side (inclusive).
    pub per_side: i32,
    /// Distance from the road centerline.
    pub side_offset: f32,
    pub pole_height: f32,
    pub pole_radius: f32,
    pub fixture_radius: f32,
    /// Point light output in lumens.
    pub light_lumens: f32,
    pub light_range: f32,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            spacing: 12.0,
            per_side: 5,
            side_offset: 6.0,
            pole_height: 4.0,
            pole_radius: 0.15,
            fixture_radius: 0.3,
            light_lumens: 60_000.0,
            light_range: 14.0,
        }
    }
}

fn spawn_street_lamps(
    mut commands: Commands,
    config: Res<LampConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Pole material (dark metal)
    let pole_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x33, 0x33, 0x33),
        perceptual_roughness: 0.6,
        metallic: 0.4,
        ..default()
    });

    // Fixture material (glowing warm white)
    let fixture_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xff, 0xff, 0xaa),
        emissive: Color::srgb_u8(0xff, 0xff, 0x88).to_linear() * 0.6,
        ..default()
    });

    let pole_mesh = meshes.add(Cylinder::new(config.pole_radius, config.pole_height));
    let fixture_mesh = meshes.add(Sphere::new(config.fixture_radius));

    let light_color = Color::srgb_u8(0xff, 0xff, 0xaa);
    let mut lamp_count = 0;

    for i in -config.per_side..=config.per_side {
        for side in [-1.0, 1.0] {
            let x = i as f32 * config.spacing;
            let z = side * config.side_offset;

            commands.spawn((
                Mesh3d(pole_mesh.clone()),
                MeshMaterial3d(pole_material.clone()),
                Transform::from_xyz(x, config.pole_height / 2.0, z),
                StreetLamp,
            ));
            commands.spawn((
                Mesh3d(fixture_mesh.clone()),
                MeshMaterial3d(fixture_material.clone()),
                Transform::from_xyz(x, config.pole_height, z),
                StreetLamp,
            ));
            commands.spawn((
                PointLight {
                    color: light_color,
                    intensity: config.light_lumens,
                    range: config.light_range,
                    ..default()
                },
                Transform::from_xyz(x, config.pole_height, z),
                StreetLamp,
            ));

            lamp_count += 1;
        }
    }

    info!("Spawned {} street lamps", lamp_count);
}
