
use {
    bevy::prelude::*,
    character_components::{
        AiBrain, AimOrigin, AimRotationSpeed, Facing, MoveDirection, MuzzleOffset, WeaponAim,
    },
    combat_components::{AttackRange, AttackSpeed, Dead, Health, Layer, MovementSpeed},
    messages::AttackIntent,
    states::GameState,
    system_schedule::GameSchedule,
};

pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AiBrain>()
            .register_type::<WeaponAim>()
            .register_type::<AimRotationSpeed>()
            .register_type::<AimOrigin>()
            .register_type::<MuzzleOffset>()
            .register_type::<Facing>()
            .register_type::<MoveDirection>();

        app.add_systems(
            Update,
            (
                (acquire_targets, attack_aligned_targets)
                    .in_set(GameSchedule::ResolveIntent)
                    .chain(),
                (
                    advance_on_target,
                    aim_weapon_at_target,
                    aim_weapon_at_movement,
                    face_target,
                )
                    .in_set(GameSchedule::PerformAction)
                    .chain(),
            )
                .run_if(in_state(GameState::Running)),
        );
    }
}

/// Maximum misalignment between aim and target before a shot is held back.
const AIM_TOLERANCE_DEGREES: f32 = 10.0;
/// Characters close in until the target sits inside this fraction of their range.
const ENGAGE_RANGE_FRACTION: f32 = 0.8;

/// Picks the closest hostile in range, keeping the current target while it stays valid.
fn acquire_targets(
    mut brains: Query<(&Transform, &Layer, &AttackRange, &mut AiBrain), Without<Dead>>,
    candidates: Query<(Entity, &Transform, &Layer), (With<Health>, Without<Dead>)>,
) {
    for (transform, layer, range, mut brain) in brains.iter_mut() {
        if let Some(current) = brain.target {
            if let Ok((_, target_transform, target_layer)) = candidates.get(current) {
                let distance = transform
                    .translation
                    .distance(target_transform.translation);
                if layer.hostile_to(*target_layer) && distance <= range.0 {
                    brain.target_position = Some(target_transform.translation.truncate());
                    continue;
                }
            }
            brain.target = None;
            brain.target_position = None;
        }

        let mut closest: Option<(Entity, f32, Vec2)> = None;
        for (candidate, candidate_transform, candidate_layer) in candidates.iter() {
            if !layer.hostile_to(*candidate_layer) {
                continue;
            }

            let distance = transform
                .translation
                .distance(candidate_transform.translation);
            if distance > range.0 {
                continue;
            }

            let position = candidate_transform.translation.truncate();
            if let Some((_, closest_distance, _)) = closest {
                if distance < closest_distance {
                    closest = Some((candidate, distance, position));
                }
            } else {
                closest = Some((candidate, distance, position));
            }
        }

        if let Some((target, _, position)) = closest {
            debug!(?target, "target acquired");
            brain.target = Some(target);
            brain.target_position = Some(position);
        }
    }
}

/// Fires an attack intent whenever the cooldown elapses with the weapon on target.
/// A shot whose moment passes while the weapon is still swinging is skipped, not queued.
fn attack_aligned_targets(
    time: Res<Time>,
    mut intents: MessageWriter<AttackIntent>,
    mut attackers: Query<
        (Entity, &Transform, &WeaponAim, &AiBrain, &mut AttackSpeed),
        Without<Dead>,
    >,
    targets: Query<&Transform>,
) {
    for (entity, transform, aim, brain, mut attack_speed) in attackers.iter_mut() {
        if !attack_speed.timer.tick(time.delta()).just_finished() {
            continue;
        }
        let Some(target) = brain.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let desired = (target_transform.translation - transform.translation).truncate();
        if desired == Vec2::ZERO {
            continue;
        }

        if aim.direction.angle_to(desired).abs() <= AIM_TOLERANCE_DEGREES.to_radians() {
            intents.write(AttackIntent {
                attacker: entity,
                target,
            });
        }
    }
}

/// Closes the distance to the current target and records the movement direction.
///
/// Works from the position captured at acquisition time, so it can move transforms
/// without also having to look the target's transform up.
fn advance_on_target(
    time: Res<Time>,
    mut movers: Query<
        (
            &mut Transform,
            &mut MoveDirection,
            &AiBrain,
            &MovementSpeed,
            &AttackRange,
        ),
        Without<Dead>,
    >,
) {
    for (mut transform, mut move_direction, brain, speed, range) in movers.iter_mut() {
        let mut direction = Vec2::ZERO;

        if let Some(target_position) = brain.target_position {
            let offset = target_position - transform.translation.truncate();
            if offset.length() > range.0 * ENGAGE_RANGE_FRACTION {
                direction = offset.normalize_or_zero();
            }
        }

        move_direction.0 = direction;
        if direction != Vec2::ZERO {
            transform.translation += (direction * speed.0 * time.delta_secs()).extend(0.0);
        }
    }
}

/// Swings the weapon toward the current target, rate-limited by the aim rotation cap.
fn aim_weapon_at_target(
    time: Res<Time>,
    mut aimers: Query<
        (
            &Transform,
            &AiBrain,
            &AimOrigin,
            Option<&MuzzleOffset>,
            &AimRotationSpeed,
            &mut WeaponAim,
        ),
        Without<Dead>,
    >,
    targets: Query<&Transform>,
) {
    for (transform, brain, aim_origin, muzzle, rotation_speed, mut aim) in aimers.iter_mut() {
        let Some(target) = brain.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let mut origin = transform.translation;
        if *aim_origin == AimOrigin::Muzzle {
            if let Some(offset) = muzzle {
                origin += offset.0.extend(0.0);
            }
        }

        let desired = (target_transform.translation - origin).truncate();
        let max_step = rotation_speed.0.to_radians() * time.delta_secs();
        aim.direction = rotate_towards(aim.direction, desired, max_step);
    }
}

/// With no target, the weapon follows the movement direction instead.
fn aim_weapon_at_movement(
    time: Res<Time>,
    mut aimers: Query<
        (&AiBrain, &MoveDirection, &AimRotationSpeed, &mut WeaponAim),
        Without<Dead>,
    >,
) {
    for (brain, move_direction, rotation_speed, mut aim) in aimers.iter_mut() {
        if brain.target.is_some() || move_direction.0 == Vec2::ZERO {
            continue;
        }

        let max_step = rotation_speed.0.to_radians() * time.delta_secs();
        aim.direction = rotate_towards(aim.direction, move_direction.0, max_step);
    }
}

/// Left/right orientation toward the current target.
fn face_target(
    mut characters: Query<(&Transform, &AiBrain, &mut Facing), Without<Dead>>,
    targets: Query<&Transform>,
) {
    for (transform, brain, mut facing) in characters.iter_mut() {
        let Some(target) = brain.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        *facing = if target_transform.translation.x < transform.translation.x {
            Facing::Left
        } else {
            Facing::Right
        };
    }
}

/// Rotates `current` toward `desired` by at most `max_radians`, returning a unit vector.
/// A zero `desired` leaves the aim where it was.
pub(crate) fn rotate_towards(current: Vec2, desired: Vec2, max_radians: f32) -> Vec2 {
    if desired == Vec2::ZERO {
        return current;
    }
    if current == Vec2::ZERO {
        return desired.normalize_or_zero();
    }

    let angle = current.angle_to(desired);
    if angle.abs() <= max_radians {
        desired.normalize_or_zero()
    } else {
        Vec2::from_angle(angle.signum() * max_radians)
            .rotate(current)
            .normalize_or_zero()
    }
}
