use {super::*, bevy::prelude::*};

#[derive(Resource, Default)]
struct EventLog(Vec<GameEventKind>);

fn feedback_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_observer(fire_arena_cleared_feedbacks);
    app.add_observer(emit_game_event);

    app.init_resource::<EventLog>();
    app.add_observer(|trigger: On<GameEvent>, mut log: ResMut<EventLog>| {
        log.0.push(trigger.event().kind);
    });

    app
}

#[test]
fn manual_emitter_fires_its_configured_event() {
    let mut app = feedback_app();

    let emitter = app
        .world_mut()
        .spawn(FeedbackEmitter {
            kind: GameEventKind::Pause,
            trigger: EmitterTrigger::Manual,
        })
        .id();

    app.world_mut().trigger(FeedbackFired { entity: emitter });
    app.update();

    assert_eq!(app.world().resource::<EventLog>().0, vec![GameEventKind::Pause]);
}

#[test]
fn arena_cleared_fires_only_matching_emitters() {
    let mut app = feedback_app();

    app.world_mut().spawn(FeedbackEmitter {
        kind: GameEventKind::LevelCompleted,
        trigger: EmitterTrigger::ArenaCleared,
    });
    app.world_mut().spawn(FeedbackEmitter {
        kind: GameEventKind::Pause,
        trigger: EmitterTrigger::Manual,
    });
    app.update();

    app.world_mut().trigger(AllTargetsDown);
    app.update();

    assert_eq!(
        app.world().resource::<EventLog>().0,
        vec![GameEventKind::LevelCompleted]
    );
}

#[test]
fn firing_an_entity_without_emitter_config_is_a_no_op() {
    let mut app = feedback_app();

    let bare = app.world_mut().spawn_empty().id();
    app.world_mut().trigger(FeedbackFired { entity: bare });
    app.update();

    assert!(app.world().resource::<EventLog>().0.is_empty());
}
