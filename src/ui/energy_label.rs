//! Floating energy readout shown next to the clicked building.
//!
//! One label node exists for the process lifetime; picking events reposition
//! and retint it, and a miss hides it.

use bevy::prelude::*;

use crate::tools::inspect::BuildingPicked;

pub struct EnergyLabelPlugin;

impl Plugin for EnergyLabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_energy_label)
            .add_systems(Update, update_energy_label);
    }
}

/// Marker for the single reusable label node.
#[derive(Component)]
pub struct EnergyLabel;

const LABEL_GREEN: Color = Color::srgb(0.0, 0.55, 0.0);
const LABEL_RED: Color = Color::srgb(0.85, 0.0, 0.0);
/// Offset from the cursor in logical pixels.
const LABEL_OFFSET: Vec2 = Vec2::new(10.0, -20.0);

/// Label text for an energy level, as a rounded percentage.
pub fn label_text(energy: f32) -> String {
    format!("Energy: {}%", (energy * 100.0).round() as i32)
}

/// High readings show red, everything else green.
pub fn label_color(energy: f32) -> Color {
    if energy > 0.6 {
        LABEL_RED
    } else {
        LABEL_GREEN
    }
}

fn setup_energy_label(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(LABEL_GREEN),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
        BorderRadius::all(Val::Px(6.0)),
        Visibility::Hidden,
        EnergyLabel,
    ));
}

fn update_energy_label(
    mut events: EventReader<BuildingPicked>,
    mut label: Query<
        (&mut Node, &mut Text, &mut TextColor, &mut Visibility),
        With<EnergyLabel>,
    >,
) {
    let Ok((mut node, mut text, mut color, mut visibility)) = label.get_single_mut() else {
        return;
    };

    for event in events.read() {
        match event.energy {
            Some(energy) => {
                text.0 = label_text(energy);
                color.0 = label_color(energy);
                node.left = Val::Px(event.cursor.x + LABEL_OFFSET.x);
                node.top = Val::Px(event.cursor.y + LABEL_OFFSET.y);
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rounds_to_nearest_percent() {
        assert_eq!(label_text(0.0), "Energy: 0%");
        assert_eq!(label_text(0.004), "Energy: 0%");
        assert_eq!(label_text(0.456), "Energy: 46%");
        assert_eq!(label_text(0.995), "Energy: 100%");
        assert_eq!(label_text(1.0), "Energy: 100%");
    }

    #[test]
    fn red_only_above_threshold() {
        assert_eq!(label_color(0.6), LABEL_GREEN);
        assert_eq!(label_color(0.600001), LABEL_RED);
        assert_eq!(label_color(0.0), LABEL_GREEN);
        assert_eq!(label_color(1.0), LABEL_RED);
    }
}
