//! Cars shuttling along the horizontal road.
//!
//! Each car keeps a signed per-frame speed and wraps to the opposite end of
//! the road once it passes the boundary, so positions stay in [-100, 100].

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrafficConfig>()
            .add_systems(Startup, spawn_cars)
            .add_systems(Update, move_cars);
    }
}

/// A car and its signed per-frame speed.
#[derive(Component)]
pub struct Car {
    pub speed: f32,
}

#[derive(Resource)]
pub struct TrafficConfig {
    pub count: usize,
    /// First car's x position.
    pub start_x: f32,
    /// Gap between consecutive cars' start positions.
    pub spacing: f32,
    /// Lane offset from the road centerline; sign alternates per car.
    pub lane_offset: f32,
    /// Speed magnitude range per frame.
    pub min_speed: f32,
    pub max_speed: f32,
    /// Wraparound boundary on |x|.
    pub bound: f32,
    pub seed: u64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            count: 6,
            start_x: -90.0,
            spacing: 35.0,
            lane_offset: 1.5,
            min_speed: 0.04,
            max_speed: 0.08,
            bound: 100.0,
            seed: 1234,
        }
    }
}

/// Wrap a position past either boundary to the opposite end.
pub fn wrap_position(x: f32, bound: f32) -> f32 {
    if x > bound {
        -bound
    } else if x < -bound {
        bound
    } else {
        x
    }
}

fn spawn_cars(
    mut commands: Commands,
    config: Res<TrafficConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let body_mesh = meshes.add(Cuboid::new(2.5, 1.0, 1.2));

    for i in 0..config.count {
        let eastbound = i % 2 == 0;
        let x = config.start_x + i as f32 * config.spacing;
        let z = if eastbound {
            config.lane_offset
        } else {
            -config.lane_offset
        };
        let magnitude = rng.gen_range(config.min_speed..config.max_speed);
        let speed = if eastbound { magnitude } else { -magnitude };

        let body_material = materials.add(StandardMaterial {
            base_color: Color::srgb(rng.gen(), rng.gen(), rng.gen()),
            perceptual_roughness: 0.5,
            metallic: 0.3,
            ..default()
        });

        commands.spawn((
            Mesh3d(body_mesh.clone()),
            MeshMaterial3d(body_material),
            Transform::from_xyz(x, 0.5, z),
            Car { speed },
        ));
    }

    info!("Spawned {} cars", config.count);
}

fn move_cars(config: Res<TrafficConfig>, mut query: Query<(&Car, &mut Transform)>) {
    for (car, mut transform) in &mut query {
        let x = transform.translation.x + car.speed;
        transform.translation.x = wrap_position(x, config.bound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_exactly_at_upper_bound() {
        assert_eq!(wrap_position(100.0 + 0.06, 100.0), -100.0);
        assert_eq!(wrap_position(100.01, 100.0), -100.0);
    }

    #[test]
    fn wraps_exactly_at_lower_bound() {
        assert_eq!(wrap_position(-100.0 - 0.06, 100.0), 100.0);
        assert_eq!(wrap_position(-100.01, 100.0), 100.0);
    }

    #[test]
    fn in_range_positions_pass_through() {
        assert_eq!(wrap_position(0.0, 100.0), 0.0);
        assert_eq!(wrap_position(100.0, 100.0), 100.0);
        assert_eq!(wrap_position(-100.0, 100.0), -100.0);
    }

    #[test]
    fn repeated_ticks_stay_in_bounds() {
        let mut x = 99.5;
        for _ in 0..10_000 {
            x = wrap_position(x + 0.07, 100.0);
            assert!((-100.0..=100.0).contains(&x));
        }
    }
}
