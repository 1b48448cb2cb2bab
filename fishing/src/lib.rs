
use {
    bevy::prelude::*,
    character_components::{Character, FishingAbility, NearWater},
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct FishingPlugin;

impl Plugin for FishingPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FishingZone>()
            .register_type::<Character>()
            .register_type::<NearWater>()
            .register_type::<FishingAbility>();

        app.add_systems(
            Update,
            track_zone_occupancy
                .in_set(GameSchedule::FrameStart)
                .run_if(in_state(GameState::Running)),
        );

        app.add_observer(show_cast_prompt);
        app.add_observer(hide_cast_prompt);
    }
}

/// Axis-aligned area where fishing is possible.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct FishingZone {
    pub half_extents: Vec2,
}

impl Default for FishingZone {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(80.0, 60.0),
        }
    }
}

/// Marker child spawned above a character that can currently cast.
#[derive(Component)]
struct CastPrompt;

const PROMPT_COLOR: Color = Color::srgb(0.4, 0.75, 1.0);
const PROMPT_SIZE: f32 = 12.0;
const PROMPT_OFFSET_Y: f32 = 24.0;

/// Flips `NearWater` on characters as they move in and out of fishing zones.
///
/// Insert/remove only happen on actual transitions, so re-entering a zone (or
/// standing where two zones overlap) never stacks or double-fires the observers.
fn track_zone_occupancy(
    mut commands: Commands,
    zones: Query<(&Transform, &FishingZone)>,
    characters: Query<
        (Entity, &Transform, Has<NearWater>),
        (With<Character>, With<FishingAbility>),
    >,
) {
    for (entity, transform, near_water) in characters.iter() {
        let position = transform.translation.truncate();
        let inside = zones.iter().any(|(zone_transform, zone)| {
            let delta = (position - zone_transform.translation.truncate()).abs();
            delta.x <= zone.half_extents.x && delta.y <= zone.half_extents.y
        });

        if inside && !near_water {
            commands.entity(entity).insert(NearWater);
        } else if !inside && near_water {
            commands.entity(entity).remove::<NearWater>();
        }
    }
}

/// Spawns the cast prompt above a character that just reached water.
fn show_cast_prompt(
    trigger: On<Add, NearWater>,
    mut commands: Commands,
    abilities: Query<&FishingAbility>,
) {
    let character = trigger.entity;

    let permitted = abilities
        .get(character)
        .map(|ability| ability.permitted)
        .unwrap_or(false);
    if !permitted {
        return;
    }

    commands.entity(character).with_children(|parent| {
        parent.spawn((
            CastPrompt,
            Sprite {
                color: PROMPT_COLOR,
                custom_size: Some(Vec2::splat(PROMPT_SIZE)),
                ..default()
            },
            Transform::from_xyz(0.0, PROMPT_OFFSET_Y, 5.0),
            Name::new("CastPrompt"),
        ));
    });
}

/// Removes the prompt when the character leaves the water.
fn hide_cast_prompt(
    trigger: On<Remove, NearWater>,
    mut commands: Commands,
    prompts: Query<(Entity, &ChildOf), With<CastPrompt>>,
) {
    let character = trigger.entity;
    for (prompt, child_of) in prompts.iter() {
        if child_of.parent() == character {
            commands.entity(prompt).despawn();
        }
    }
}
