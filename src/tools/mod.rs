//! Pointer tools for interrogating the scene.

use bevy::prelude::*;

pub mod inspect;
pub mod raycast;

pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(inspect::InspectPlugin);
    }
}
