use bevy::prelude::*;

/// Shared HUD palette.
pub struct UiTheme;

impl UiTheme {
    pub const TEXT_PRIMARY: Color = Color::srgb(0.92, 0.89, 0.78);
    pub const TEXT_DIM: Color = Color::srgb(0.55, 0.53, 0.47);
    pub const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
}

/// Spawns one HUD counter line pinned to the top-right corner.
pub fn spawn_counter_text(commands: &mut Commands, label: &str, top: f32, marker: impl Component) {
    commands.spawn((
        Text::new(label),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(top),
            right: Val::Px(10.0),
            ..default()
        },
        TextColor(UiTheme::TEXT_PRIMARY),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        marker,
    ));
}
