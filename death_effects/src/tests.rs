use {
    super::*,
    bevy::prelude::*,
    combat_components::Layer,
};

fn effects_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_observer(collapse_on_death);
    app.add_observer(restore_on_revive);
    app
}

#[test]
fn collapse_strips_control_and_shoves_along_last_impact() {
    let mut app = effects_app();

    let weapon_sprite = app.world_mut().spawn(Visibility::Inherited).id();
    let victim = app
        .world_mut()
        .spawn((
            AiBrain::default(),
            MovementSpeed(40.0),
            LastImpact(Vec2::new(0.0, -3.0)),
            CollapseOnDeath {
                hide_on_death: vec![weapon_sprite],
                force_multiplier: 100.0,
            },
            Transform::default(),
        ))
        .id();

    app.world_mut().trigger(Death {
        entity: victim,
        layer: Layer::Enemies,
    });
    app.update();

    assert!(app.world().get::<AiBrain>(victim).is_none());
    assert!(app.world().get::<MovementSpeed>(victim).is_none());
    assert_eq!(
        *app.world().get::<Visibility>(weapon_sprite).unwrap(),
        Visibility::Hidden
    );

    // Impact pointed down, so the shove does too, scaled by the multiplier.
    let shove = app.world().get::<CorpseShove>(victim).unwrap();
    assert_eq!(shove.velocity, Vec2::new(0.0, -100.0));
}

#[test]
fn characters_without_collapse_config_are_left_alone() {
    let mut app = effects_app();

    let victim = app
        .world_mut()
        .spawn((AiBrain::default(), MovementSpeed(40.0), Transform::default()))
        .id();

    app.world_mut().trigger(Death {
        entity: victim,
        layer: Layer::Enemies,
    });
    app.update();

    assert!(app.world().get::<AiBrain>(victim).is_some());
    assert!(app.world().get::<CorpseShove>(victim).is_none());
}

#[test]
fn revive_restores_hidden_entities_and_stops_the_slide() {
    let mut app = effects_app();

    let weapon_sprite = app.world_mut().spawn(Visibility::Inherited).id();
    let victim = app
        .world_mut()
        .spawn((
            AiBrain::default(),
            LastImpact(Vec2::X),
            CollapseOnDeath {
                hide_on_death: vec![weapon_sprite],
                force_multiplier: 50.0,
            },
            Transform::default(),
        ))
        .id();

    app.world_mut().trigger(Death {
        entity: victim,
        layer: Layer::Enemies,
    });
    app.update();
    assert!(app.world().get::<CorpseShove>(victim).is_some());

    app.world_mut().trigger(Revived { entity: victim });
    app.update();

    assert_eq!(
        *app.world().get::<Visibility>(weapon_sprite).unwrap(),
        Visibility::Inherited
    );
    assert!(app.world().get::<CorpseShove>(victim).is_none());
}
