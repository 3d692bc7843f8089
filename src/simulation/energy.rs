//! Periodic building energy refresh.
//!
//! Every 12 seconds of wall-clock time, each building re-samples its energy
//! and its material is recolored with the same ramp used at spawn. The
//! timer runs off `Res<Time>` and is independent of the frame-based
//! animation constants.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::render::buildings::{energy_color, energy_emissive, Building};

pub struct EnergyPlugin;

impl Plugin for EnergyPlugin {
    fn build(&self, app: &mut App) {
        let config = EnergyConfig::default();
        app.insert_resource(EnergyRng(StdRng::seed_from_u64(config.seed)))
            .insert_resource(EnergyRefreshTimer(Timer::from_seconds(
                config.interval_secs,
                TimerMode::Repeating,
            )))
            .insert_resource(config)
            .add_systems(Update, refresh_energy);
    }
}

#[derive(Resource)]
pub struct EnergyConfig {
    /// Seconds between refreshes.
    pub interval_secs: f32,
    pub seed: u64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            interval_secs: 12.0,
            seed: 777,
        }
    }
}

/// Wall-clock timer gating the refresh.
#[derive(Resource)]
pub struct EnergyRefreshTimer(pub Timer);

/// Persistent RNG so refresh sequences are reproducible per seed.
#[derive(Resource)]
pub struct EnergyRng(pub StdRng);

fn refresh_energy(
    time: Res<Time>,
    mut timer: ResMut<EnergyRefreshTimer>,
    mut rng: ResMut<EnergyRng>,
    mut buildings: Query<(&mut Building, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let mut refreshed = 0;
    for (mut building, material_handle) in &mut buildings {
        let energy: f32 = rng.0.gen();
        building.energy = energy;
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = energy_color(energy);
            material.emissive = energy_emissive(energy);
        }
        refreshed += 1;
    }

    info!("Refreshed energy for {} buildings", refreshed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_formula_matches_spawn_formula() {
        // A refreshed building's color must be exactly the ramp evaluated at
        // its new energy, for any sampled energy.
        let mut rng = StdRng::seed_from_u64(EnergyConfig::default().seed);
        for _ in 0..256 {
            let energy: f32 = rng.gen();
            assert!((0.0..1.0).contains(&energy));
            let color = energy_color(energy).to_srgba();
            assert!((color.red - 1.0).abs() < 1e-6);
            assert!((color.green - (1.0 - energy)).abs() < 1e-5);
            assert!((color.blue - (136.0 / 255.0) * (1.0 - energy)).abs() < 1e-5);
        }
    }

    #[test]
    fn timer_fires_on_a_12_second_period() {
        let mut timer = Timer::from_seconds(12.0, TimerMode::Repeating);
        timer.tick(std::time::Duration::from_secs_f32(11.9));
        assert!(!timer.just_finished());
        timer.tick(std::time::Duration::from_secs_f32(0.2));
        assert!(timer.just_finished());
    }
}
