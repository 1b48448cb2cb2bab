use {
    bevy::prelude::*,
    character_components::{
        AiBrain, AimOrigin, AimRotationSpeed, Character, CollapseOnDeath, Facing, FishingAbility,
        MoveDirection, MuzzleOffset, WeaponAim,
    },
    combat_components::{AttackRange, AttackSpeed, Damage, Health, LastImpact, Layer, MovementSpeed},
    feedback::{EmitterTrigger, FeedbackEmitter, GameEvent, GameEventKind},
    fishing::FishingZone,
    game_assets::{ArenaDefinition, GameAssets, SpawnGroup},
    rand::Rng,
};

/// Populates the arena from the loaded definition: creature groups with jittered
/// placement, fishing zones, and the arena-cleared feedback emitter.
pub fn spawn_arena(
    mut commands: Commands,
    game_assets: Res<GameAssets>,
    arenas: Res<Assets<ArenaDefinition>>,
) {
    let Some(arena) = arenas.get(&game_assets.arena) else {
        warn!("arena definition not loaded, spawning nothing");
        return;
    };

    let mut rng = rand::rng();

    for group in &arena.groups {
        let center = Vec2::new(group.area_center.0, group.area_center.1);
        let half = Vec2::new(group.area_half_extents.0, group.area_half_extents.1);

        for index in 0..group.count {
            let position = center
                + Vec2::new(
                    rng.random_range(-half.x..=half.x),
                    rng.random_range(-half.y..=half.y),
                );
            spawn_creature(&mut commands, group, index, position);
        }
    }

    for zone in &arena.fishing_zones {
        commands.spawn((
            FishingZone {
                half_extents: Vec2::new(zone.half_extents.0, zone.half_extents.1),
            },
            Transform::from_xyz(zone.center.0, zone.center.1, 0.0),
            Visibility::default(),
            Name::new("FishingZone"),
        ));
    }

    commands.spawn((
        FeedbackEmitter {
            kind: GameEventKind::LevelCompleted,
            trigger: EmitterTrigger::ArenaCleared,
        },
        Name::new("ArenaClearedFeedback"),
    ));

    info!(groups = arena.groups.len(), "arena spawned");
}

fn spawn_creature(commands: &mut Commands, group: &SpawnGroup, index: u32, position: Vec2) {
    let color = match group.layer {
        Layer::Players => Color::srgb(0.3, 0.8, 0.7),
        Layer::Enemies => Color::srgb(0.8, 0.25, 0.2),
        Layer::Neutral => Color::srgb(0.6, 0.6, 0.6),
    };

    let mut creature = commands.spawn((
        (
            Character,
            group.layer,
            Health::new(group.health),
            MovementSpeed(group.movement_speed),
            LastImpact::default(),
            MoveDirection::default(),
        ),
        (
            Damage(group.damage),
            AttackRange(group.attack_range),
            AttackSpeed::from_secs(1.0 / group.attacks_per_second.max(0.01)),
            AiBrain::default(),
            WeaponAim::default(),
            AimRotationSpeed::default(),
            AimOrigin::BodyCenter,
            MuzzleOffset(Vec2::new(10.0, 0.0)),
            Facing::default(),
            CollapseOnDeath::default(),
        ),
        (
            Sprite {
                color,
                custom_size: Some(Vec2::splat(18.0)),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            Name::new(format!("{} {index}", group.name)),
        ),
    ));

    if group.layer == Layer::Players {
        creature.insert(FishingAbility::default());
    }
}

/// Reacts to game events emitted through the feedback layer.
///
/// Pausing toggles the virtual clock rather than a state, so resuming never replays
/// the `Running` enter systems (which would respawn the arena).
pub fn handle_game_event(trigger: On<GameEvent>, mut time: ResMut<Time<Virtual>>) {
    let event = trigger.event();
    match event.kind {
        GameEventKind::Pause => {
            time.pause();
            info!("simulation paused");
        }
        GameEventKind::Resume => {
            time.unpause();
            info!("simulation resumed");
        }
        GameEventKind::LevelCompleted => info!("arena cleared"),
        GameEventKind::RespawnStarted => debug!("respawn started"),
    }
}
