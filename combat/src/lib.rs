#[cfg(test)]
mod tests;

use {
    bevy::prelude::*,
    character_components::MuzzleOffset,
    combat_components::{
        Damage, Dead, Health, LastImpact, Layer, Projectile, ProjectileDamage, ProjectileSpeed,
        ProjectileTarget,
    },
    lifecycle_events::{Death, Revived},
    messages::{AttackIntent, ProjectileHit},
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Health>()
            .register_type::<Dead>()
            .register_type::<Layer>()
            .register_type::<LastImpact>()
            .register_type::<Damage>()
            .register_type::<combat_components::MovementSpeed>()
            .register_type::<combat_components::AttackRange>()
            .register_type::<combat_components::AttackSpeed>()
            .register_type::<Projectile>()
            .register_type::<ProjectileTarget>()
            .register_type::<ProjectileSpeed>()
            .register_type::<ProjectileDamage>();

        app.add_systems(
            Update,
            (
                (spawn_projectiles, steer_projectiles, resolve_projectile_hits)
                    .in_set(GameSchedule::PerformAction)
                    .chain(),
                (apply_projectile_damage, detect_depleted_combatants)
                    .in_set(GameSchedule::Effect)
                    .chain(),
            )
                .run_if(in_state(GameState::Running)),
        );

        app.add_observer(restore_on_revive);
    }
}

const PROJECTILE_SPEED: f32 = 400.0;
const PROJECTILE_HIT_RADIUS: f32 = 10.0;
const PROJECTILE_SIZE: f32 = 6.0;
const PROJECTILE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);

fn spawn_projectiles(
    mut commands: Commands,
    mut intents: MessageReader<AttackIntent>,
    attackers: Query<(&Transform, &Damage, Option<&MuzzleOffset>), Without<Dead>>,
) {
    for intent in intents.read() {
        // The attacker may have died between intent and resolution.
        let Ok((transform, damage, muzzle)) = attackers.get(intent.attacker) else {
            continue;
        };

        let mut origin = transform.translation;
        if let Some(offset) = muzzle {
            origin += offset.0.extend(0.0);
        }

        commands.spawn((
            Sprite {
                color: PROJECTILE_COLOR,
                custom_size: Some(Vec2::splat(PROJECTILE_SIZE)),
                ..default()
            },
            Transform::from_translation(origin),
            Projectile,
            ProjectileTarget(intent.target),
            ProjectileSpeed(PROJECTILE_SPEED),
            ProjectileDamage(damage.0),
            Name::new("Projectile"),
        ));
    }
}

fn steer_projectiles(
    time: Res<Time>,
    mut projectiles: Query<(&mut Transform, &ProjectileTarget, &ProjectileSpeed), With<Projectile>>,
    targets: Query<&Transform, Without<Projectile>>,
) {
    for (mut transform, target, speed) in projectiles.iter_mut() {
        if let Ok(target_transform) = targets.get(target.0) {
            let direction = (target_transform.translation - transform.translation)
                .normalize_or_zero();
            transform.translation += direction * speed.0 * time.delta_secs();
        }
    }
}

fn resolve_projectile_hits(
    mut commands: Commands,
    mut hit_writer: MessageWriter<ProjectileHit>,
    projectiles: Query<(Entity, &Transform, &ProjectileTarget, &ProjectileDamage), With<Projectile>>,
    targets: Query<&Transform, Without<Projectile>>,
) {
    for (projectile, transform, target, damage) in projectiles.iter() {
        let Ok(target_transform) = targets.get(target.0) else {
            // Target no longer exists.
            commands.entity(projectile).despawn();
            continue;
        };

        let offset = target_transform.translation - transform.translation;
        if offset.length() < PROJECTILE_HIT_RADIUS {
            hit_writer.write(ProjectileHit {
                projectile,
                target: target.0,
                damage: damage.0,
                impact_direction: offset.truncate().normalize_or_zero(),
            });
            commands.entity(projectile).despawn();
        }
    }
}

fn apply_projectile_damage(
    mut hits: MessageReader<ProjectileHit>,
    mut targets: Query<(&mut Health, Option<&mut LastImpact>), Without<Dead>>,
) {
    for hit in hits.read() {
        let Ok((mut health, last_impact)) = targets.get_mut(hit.target) else {
            continue;
        };

        health.current = (health.current - hit.damage).max(0.0);
        if let Some(mut impact) = last_impact {
            impact.0 = hit.impact_direction;
        }
    }
}

/// Marks freshly depleted combatants and announces the death.
///
/// `Dead` is inserted in the same command batch as the trigger, so each combatant
/// produces exactly one [`Death`] no matter how many frames it stays at zero health.
fn detect_depleted_combatants(
    mut commands: Commands,
    combatants: Query<(Entity, &Health, &Layer), Without<Dead>>,
) {
    for (entity, health, layer) in combatants.iter() {
        if health.is_depleted() {
            debug!(?entity, ?layer, "combatant down");
            commands.entity(entity).insert(Dead);
            commands.trigger(Death {
                entity,
                layer: *layer,
            });
        }
    }
}

fn restore_on_revive(
    trigger: On<Revived>,
    mut commands: Commands,
    mut combatants: Query<&mut Health, With<Dead>>,
) {
    let event = trigger.event();
    let Ok(mut health) = combatants.get_mut(event.entity) else {
        return;
    };

    health.current = health.max;
    commands.entity(event.entity).remove::<Dead>();
}
