//! Cityglow - procedural 3D city with live building energy levels
//!
//! A Bevy scene with a day/night cycle, orbiting camera, traffic, and
//! click-to-inspect building energy readings.

use bevy::prelude::*;

mod camera;
mod render;
mod simulation;
mod tools;
mod ui;

fn main() {
    // Force Vulkan backend on Windows (DX12 causes crashes on some systems)
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cityglow".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Orbiting camera
        .add_plugins(camera::CameraPlugin)
        // Scene construction and lighting
        .add_plugins(render::RenderPlugin)
        // Traffic and periodic energy refresh
        .add_plugins(simulation::SimulationPlugin)
        // Click-to-inspect picking
        .add_plugins(tools::ToolsPlugin)
        // Floating energy label
        .add_plugins(ui::UiPlugin)
        .run();
}
