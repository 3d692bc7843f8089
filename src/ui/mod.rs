//! Screen-space overlay UI.

use bevy::prelude::*;

pub mod energy_label;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(energy_label::EnergyLabelPlugin);
    }
}
