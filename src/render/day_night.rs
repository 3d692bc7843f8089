//! Day/night cycle driving sun, ambient light, and sky color.

use bevy::{pbr::DirectionalLightShadowMap, prelude::*};

pub struct DayNightPlugin;

impl Plugin for DayNightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayCycle>()
            .init_resource::<DayNightConfig>()
            .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)))
            // Shadow map resolution (2048 is good balance of quality/performance)
            .insert_resource(DirectionalLightShadowMap { size: 2048 })
            .add_systems(Startup, setup_lighting)
            .add_systems(
                Update,
                (advance_day_cycle, update_sun, update_ambient, update_sky).chain(),
            );
    }
}

/// Continuously advancing day phase; daylight is derived via a sine.
#[derive(Resource, Default)]
pub struct DayCycle {
    pub phase: f32,
}

impl DayCycle {
    /// Daylight factor in [0, 1] for the current phase.
    pub fn daylight(&self) -> f32 {
        daylight_factor(self.phase)
    }
}

#[derive(Resource)]
pub struct DayNightConfig {
    /// Phase advance per frame (radians).
    pub phase_step: f32,
    /// Sun placement; the light aims from here at the origin.
    pub sun_position: Vec3,
    /// Warm white sunlight.
    pub sun_color: Color,
    /// Full-sun illuminance in lux at intensity factor 1.0.
    pub sun_illuminance_scale: f32,
    /// Ambient brightness at intensity factor 1.0.
    pub ambient_brightness_scale: f32,
}

impl Default for DayNightConfig {
    fn default() -> Self {
        Self {
            phase_step: 0.002,
            sun_position: Vec3::new(60.0, 100.0, 30.0),
            sun_color: Color::srgb_u8(0xff, 0xf6, 0xe5),
            sun_illuminance_scale: 6_000.0,
            ambient_brightness_scale: 200.0,
        }
    }
}

#[derive(Component)]
pub struct Sun;

/// Daylight factor in [0, 1], periodic over the phase.
pub fn daylight_factor(phase: f32) -> f32 {
    (phase.sin() + 1.0) / 2.0
}

/// Sun intensity factor for a daylight value; ranges over [0.5, 1.7].
pub fn sun_factor(daylight: f32) -> f32 {
    0.5 + daylight * 1.2
}

/// Ambient intensity factor for a daylight value; ranges over [0.4, 0.9].
pub fn ambient_factor(daylight: f32) -> f32 {
    0.4 + daylight * 0.5
}

/// Sky color: fixed blue hue, lightness dropping toward night.
pub fn sky_color(daylight: f32) -> Color {
    Color::hsl(216.0, 0.6, 0.7 - 0.2 * (1.0 - daylight))
}

fn setup_lighting(mut commands: Commands, config: Res<DayNightConfig>) {
    // Ambient light (intensity updated by update_ambient)
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: ambient_factor(0.5) * config.ambient_brightness_scale,
    });

    commands.spawn((
        DirectionalLight {
            color: config.sun_color,
            illuminance: sun_factor(0.5) * config.sun_illuminance_scale,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(config.sun_position).looking_at(Vec3::ZERO, Vec3::Y),
        Sun,
    ));
}

fn advance_day_cycle(config: Res<DayNightConfig>, mut cycle: ResMut<DayCycle>) {
    cycle.phase += config.phase_step;
}

fn update_sun(
    cycle: Res<DayCycle>,
    config: Res<DayNightConfig>,
    mut query: Query<&mut DirectionalLight, With<Sun>>,
) {
    let daylight = cycle.daylight();
    for mut light in &mut query {
        light.illuminance = sun_factor(daylight) * config.sun_illuminance_scale;
    }
}

fn update_ambient(
    cycle: Res<DayCycle>,
    config: Res<DayNightConfig>,
    mut ambient: ResMut<AmbientLight>,
) {
    ambient.brightness = ambient_factor(cycle.daylight()) * config.ambient_brightness_scale;
}

fn update_sky(cycle: Res<DayCycle>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = sky_color(cycle.daylight());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daylight_factor_is_bounded() {
        let mut phase = 0.0;
        for _ in 0..10_000 {
            let daylight = daylight_factor(phase);
            assert!((0.0..=1.0).contains(&daylight));
            phase += 0.002;
        }
    }

    #[test]
    fn daylight_factor_is_periodic() {
        let tau = std::f32::consts::TAU;
        for i in 0..16 {
            let phase = i as f32 * 0.7;
            assert!((daylight_factor(phase) - daylight_factor(phase + tau)).abs() < 1e-4);
        }
    }

    #[test]
    fn light_factors_stay_in_range() {
        for i in 0..=100 {
            let daylight = i as f32 / 100.0;
            let sun = sun_factor(daylight);
            let ambient = ambient_factor(daylight);
            assert!((0.5..=1.7).contains(&sun));
            assert!((0.4..=0.9).contains(&ambient));
        }
        assert_eq!(sun_factor(0.0), 0.5);
        assert_eq!(sun_factor(1.0), 1.7);
        assert_eq!(ambient_factor(0.0), 0.4);
        assert_eq!(ambient_factor(1.0), 0.9);
    }

    #[test]
    fn sky_darkens_at_night() {
        let day = sky_color(1.0).to_srgba();
        let night = sky_color(0.0).to_srgba();
        let day_lum = day.red + day.green + day.blue;
        let night_lum = night.red + night.green + night.blue;
        assert!(day_lum > night_lum);
    }
}
