#[cfg(test)]
mod tests;

use {
    bevy::prelude::*,
    character_components::{AiBrain, CollapseOnDeath},
    combat_components::{LastImpact, MovementSpeed},
    lifecycle_events::{Death, Revived},
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct DeathEffectsPlugin;

impl Plugin for DeathEffectsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CollapseOnDeath>()
            .register_type::<CorpseShove>();

        app.add_systems(
            Update,
            slide_corpses
                .in_set(GameSchedule::FrameEnd)
                .run_if(in_state(GameState::Running)),
        );

        app.add_observer(collapse_on_death);
        app.add_observer(restore_on_revive);
    }
}

/// One-shot impulse applied to a corpse, decayed by `slide_corpses`.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct CorpseShove {
    pub velocity: Vec2,
}

const SHOVE_DAMPING: f32 = 6.0;
const SHOVE_REST_SPEED: f32 = 2.0;

/// Strips control from a dying character, hides its auxiliary entities and shoves
/// the corpse along the last recorded impact direction.
fn collapse_on_death(
    trigger: On<Death>,
    mut commands: Commands,
    victims: Query<(&CollapseOnDeath, Option<&LastImpact>)>,
    mut visibilities: Query<&mut Visibility>,
) {
    let event = trigger.event();
    let Ok((collapse, impact)) = victims.get(event.entity) else {
        return;
    };

    for &aux in &collapse.hide_on_death {
        if let Ok(mut visibility) = visibilities.get_mut(aux) {
            *visibility = Visibility::Hidden;
        }
    }

    let mut entity_commands = commands.entity(event.entity);
    entity_commands.remove::<(AiBrain, MovementSpeed)>();

    let direction = impact
        .map(|impact| impact.0.normalize_or_zero())
        .unwrap_or(Vec2::ZERO);
    if direction != Vec2::ZERO {
        entity_commands.insert(CorpseShove {
            velocity: direction * collapse.force_multiplier,
        });
    }

    debug!(entity = ?event.entity, "character collapsed");
}

/// Restores what `collapse_on_death` hid and stops any leftover slide.
fn restore_on_revive(
    trigger: On<Revived>,
    mut commands: Commands,
    victims: Query<&CollapseOnDeath>,
    mut visibilities: Query<&mut Visibility>,
) {
    let event = trigger.event();
    let Ok(collapse) = victims.get(event.entity) else {
        return;
    };

    for &aux in &collapse.hide_on_death {
        if let Ok(mut visibility) = visibilities.get_mut(aux) {
            *visibility = Visibility::Inherited;
        }
    }

    commands.entity(event.entity).remove::<CorpseShove>();
}

/// Damps corpse slides down to rest and removes the shove once they get there.
fn slide_corpses(
    time: Res<Time>,
    mut commands: Commands,
    mut corpses: Query<(Entity, &mut Transform, &mut CorpseShove)>,
) {
    for (entity, mut transform, mut shove) in corpses.iter_mut() {
        transform.translation += (shove.velocity * time.delta_secs()).extend(0.0);

        let damping = 1.0 - (SHOVE_DAMPING * time.delta_secs()).min(1.0);
        shove.velocity *= damping;

        if shove.velocity.length() < SHOVE_REST_SPEED {
            commands.entity(entity).remove::<CorpseShove>();
        }
    }
}
