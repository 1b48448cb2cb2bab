#[cfg(test)]
mod tests;

use {bevy::prelude::*, kill_events::AllTargetsDown};

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FeedbackEmitter>()
            .register_type::<GameEvent>();

        app.add_observer(fire_arena_cleared_feedbacks);
        app.add_observer(emit_game_event);
    }
}

/// Game-wide happenings listeners can react to (pause flow, level flow, analytics).
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameEventKind {
    #[default]
    Pause,
    Resume,
    LevelCompleted,
    RespawnStarted,
}

/// Global notification carrying a [`GameEventKind`].
#[derive(Event, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Default)]
pub struct GameEvent {
    pub kind: GameEventKind,
}

/// What causes an emitter to fire.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmitterTrigger {
    /// Fired only by an explicit [`FeedbackFired`] trigger.
    #[default]
    Manual,
    /// Fired when the kill objective completes.
    ArenaCleared,
}

/// Authoring-side component: when this entity's feedback fires, the configured
/// game event goes out for anyone listening.
#[derive(Component, Reflect, Debug, Default, Clone)]
#[reflect(Component, Default)]
pub struct FeedbackEmitter {
    pub kind: GameEventKind,
    pub trigger: EmitterTrigger,
}

/// Targeted trigger for a single emitter entity.
#[derive(EntityEvent, Debug)]
pub struct FeedbackFired {
    pub entity: Entity,
}

fn fire_arena_cleared_feedbacks(
    _trigger: On<AllTargetsDown>,
    emitters: Query<(Entity, &FeedbackEmitter)>,
    mut commands: Commands,
) {
    for (entity, emitter) in emitters.iter() {
        if emitter.trigger == EmitterTrigger::ArenaCleared {
            commands.trigger(FeedbackFired { entity });
        }
    }
}

fn emit_game_event(
    trigger: On<FeedbackFired>,
    emitters: Query<&FeedbackEmitter>,
    mut commands: Commands,
) {
    let Ok(emitter) = emitters.get(trigger.event().entity) else {
        return;
    };

    debug!(kind = ?emitter.kind, "feedback emitting game event");
    commands.trigger(GameEvent { kind: emitter.kind });
}
