//! Dynamic city behavior: traffic and the periodic energy refresh.

use bevy::prelude::*;

pub mod energy;
pub mod traffic;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(traffic::TrafficPlugin)
            .add_plugins(energy::EnergyPlugin);
    }
}
