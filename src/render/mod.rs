//! Scene construction and lighting systems.

use bevy::prelude::*;

pub mod buildings;
pub mod clouds;
pub mod day_night;
pub mod environment;
pub mod street_lamps;
pub mod trees;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(day_night::DayNightPlugin)
            .add_plugins(environment::EnvironmentPlugin)
            .add_plugins(buildings::BuildingsPlugin)
            .add_plugins(trees::TreesPlugin)
            .add_plugins(street_lamps::StreetLampsPlugin)
            .add_plugins(clouds::CloudsPlugin);
    }
}
