use bevy::prelude::*;
use bevy::ui::BackgroundColor;

#[derive(Component)]
pub struct InstructionsOverlay;

const INSTRUCTIONS: [&str; 2] = [
    "Use the mouse to control the robot's rotation.",
    "Press 'W' key to move the robot forward.",
];

/// Small fixed panel in the top-left corner. Shown from startup whether or
/// not the model ever loads.
pub fn spawn_instructions(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::linear_rgba(0.0, 0.0, 0.0, 0.5)),
            InstructionsOverlay,
        ))
        .with_children(|parent| {
            for line in INSTRUCTIONS {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
        });
}
