use bevy::prelude::*;

pub struct KillEventsPlugin;

impl Plugin for KillEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TargetKilled>()
            .register_type::<AllTargetsDown>();
    }
}

/// Triggered for every death that counts toward the kill objective.
#[derive(Event, Reflect, Debug)]
#[reflect(Default)]
pub struct TargetKilled {
    pub entity: Entity,
    /// Deaths still needed after this one.
    pub remaining: u32,
}

impl Default for TargetKilled {
    fn default() -> Self {
        Self {
            entity: Entity::PLACEHOLDER,
            remaining: 0,
        }
    }
}

/// Triggered exactly once, when the last tracked target goes down.
///
/// Always arrives after the final [`TargetKilled`]; listeners may rely on that order.
#[derive(Event, Reflect, Debug, Default)]
#[reflect(Default)]
pub struct AllTargetsDown;
