use {
    crate::{DeathOutcome, KillTracker, TargetMode},
    bevy::prelude::*,
    combat_components::{Layer, LayerMask},
};

fn spawn_ids(world: &mut World, count: usize) -> Vec<Entity> {
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

#[test]
fn zero_threshold_starts_exhausted() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 1);

    let mut tracker = KillTracker::default();
    tracker.initialize(0);

    assert!(tracker.exhausted());
    // Nothing was needed, so nothing ever counts.
    assert_eq!(
        tracker.register_death(ids[0], Layer::Enemies),
        DeathOutcome::Ignored
    );
}

#[test]
fn inactive_tracker_ignores_deaths() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 1);

    let mut tracker = KillTracker::default();
    assert!(!tracker.is_active());

    tracker.initialize(2);
    assert!(tracker.is_active());
    tracker.deactivate();

    assert_eq!(
        tracker.register_death(ids[0], Layer::Enemies),
        DeathOutcome::Ignored
    );
    assert_eq!(tracker.remaining_deaths, 2);
}

#[test]
fn non_matching_layer_leaves_count_unchanged() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 1);

    let mut tracker = KillTracker::default();
    tracker.target_mask = LayerMask::ENEMIES;
    tracker.initialize(3);

    assert_eq!(
        tracker.register_death(ids[0], Layer::Players),
        DeathOutcome::Ignored
    );
    assert_eq!(tracker.remaining_deaths, 3);
}

#[test]
fn layer_mode_counts_down_to_last_death() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 3);

    let mut tracker = KillTracker::default();
    tracker.initialize(3);

    assert_eq!(
        tracker.register_death(ids[0], Layer::Enemies),
        DeathOutcome::Counted
    );
    assert_eq!(
        tracker.register_death(ids[1], Layer::Enemies),
        DeathOutcome::Counted
    );
    assert_eq!(
        tracker.register_death(ids[2], Layer::Enemies),
        DeathOutcome::LastDeath
    );
    assert!(tracker.exhausted());

    // Terminal: a fourth death neither counts nor re-fires the last-death outcome.
    assert_eq!(
        tracker.register_death(ids[0], Layer::Enemies),
        DeathOutcome::Ignored
    );
    assert_eq!(tracker.remaining_deaths, 0);
}

#[test]
fn list_mode_only_counts_listed_entities() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

    let mut tracker = KillTracker {
        mode: TargetMode::List,
        targets: vec![a, b, c],
        ..Default::default()
    };
    tracker.initialize(tracker.targets.len() as u32);
    assert_eq!(tracker.death_threshold, 3);

    assert_eq!(tracker.register_death(a, Layer::Enemies), DeathOutcome::Counted);
    assert_eq!(tracker.remaining_deaths, 2);

    // D is not on the list; its layer doesn't matter in List mode.
    assert_eq!(tracker.register_death(d, Layer::Enemies), DeathOutcome::Ignored);
    assert_eq!(tracker.remaining_deaths, 2);

    assert_eq!(tracker.register_death(b, Layer::Enemies), DeathOutcome::Counted);
    assert_eq!(tracker.register_death(c, Layer::Enemies), DeathOutcome::LastDeath);

    assert_eq!(tracker.register_death(a, Layer::Enemies), DeathOutcome::Ignored);
}

#[test]
fn reinitialization_resets_counters() {
    let mut world = World::new();
    let ids = spawn_ids(&mut world, 1);

    let mut tracker = KillTracker::default();
    tracker.initialize(2);
    tracker.register_death(ids[0], Layer::Enemies);
    assert_eq!(tracker.remaining_deaths, 1);

    tracker.initialize(5);
    assert_eq!(tracker.death_threshold, 5);
    assert_eq!(tracker.remaining_deaths, 5);
    assert!(!tracker.exhausted());
}
