mod tracker;

#[cfg(test)]
mod tests;

pub use tracker::{DeathOutcome, KillTracker, TargetMode};

use {
    bevy::prelude::*,
    combat_components::{Dead, Health, Layer},
    kill_events::{AllTargetsDown, TargetKilled},
    lifecycle_events::Death,
};

pub struct KillsPlugin;

impl Plugin for KillsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KillTracker>()
            .register_type::<KillTracker>();

        app.add_observer(on_combatant_death);
    }
}

/// Resolves the death threshold and arms the tracker.
///
/// Runs once the arena is populated: List mode takes the explicit list size, Layer
/// mode either counts matching live combatants or keeps the configured threshold.
pub fn initialize_tracker(
    mut tracker: ResMut<KillTracker>,
    combatants: Query<(Entity, &Layer), (With<Health>, Without<Dead>)>,
) {
    let threshold = match tracker.mode {
        TargetMode::List => tracker.targets.len() as u32,
        TargetMode::Layer if tracker.auto_threshold => combatants
            .iter()
            .filter(|(_, layer)| tracker.target_mask.contains(**layer))
            .count() as u32,
        TargetMode::Layer => tracker.death_threshold,
    };

    tracker.initialize(threshold);
    info!(threshold, mode = ?tracker.mode, "kill tracker armed");

    if tracker.exhausted() {
        debug!("threshold is zero, nothing to track");
    }
}

/// Disarms the tracker so deaths delivered after session teardown are ignored.
pub fn deactivate_tracker(mut tracker: ResMut<KillTracker>) {
    tracker.deactivate();
}

/// Feeds combatant deaths into the tracker.
///
/// On a tracked death [`TargetKilled`] goes out first, then [`AllTargetsDown`] if it
/// was the last one. That order is part of the contract: listeners may rely on seeing
/// the final per-kill notification before the completion one.
fn on_combatant_death(
    trigger: On<Death>,
    mut tracker: ResMut<KillTracker>,
    mut commands: Commands,
) {
    let event = trigger.event();

    match tracker.register_death(event.entity, event.layer) {
        DeathOutcome::Ignored => {}
        DeathOutcome::Counted => {
            debug!(entity = ?event.entity, remaining = tracker.remaining_deaths, "tracked kill");
            commands.trigger(TargetKilled {
                entity: event.entity,
                remaining: tracker.remaining_deaths,
            });
        }
        DeathOutcome::LastDeath => {
            info!(entity = ?event.entity, "last tracked target down");
            commands.trigger(TargetKilled {
                entity: event.entity,
                remaining: 0,
            });
            commands.trigger(AllTargetsDown);
        }
    }
}
