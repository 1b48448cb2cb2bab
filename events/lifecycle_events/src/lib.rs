use {bevy::prelude::*, combat_components::Layer};

pub struct LifecycleEventsPlugin;

impl Plugin for LifecycleEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Death>().register_type::<Revived>();
    }
}

/// Triggered exactly once when a combatant's health is depleted.
///
/// Carries the dying entity's classification so listeners can filter without
/// touching the (possibly already despawned) entity.
#[derive(Event, Reflect, Debug)]
#[reflect(Default)]
pub struct Death {
    pub entity: Entity,
    pub layer: Layer,
}

impl Default for Death {
    fn default() -> Self {
        Self {
            entity: Entity::PLACEHOLDER,
            layer: Layer::default(),
        }
    }
}

/// Triggered to bring a dead combatant back.
#[derive(Event, Reflect, Debug)]
#[reflect(Default)]
pub struct Revived {
    pub entity: Entity,
}

impl Default for Revived {
    fn default() -> Self {
        Self {
            entity: Entity::PLACEHOLDER,
        }
    }
}
