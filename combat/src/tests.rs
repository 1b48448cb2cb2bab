use {
    super::*,
    bevy::prelude::*,
};

#[derive(Resource, Default)]
struct DeathLog(Vec<Entity>);

fn combat_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_message::<ProjectileHit>();
    app.add_systems(
        Update,
        (apply_projectile_damage, detect_depleted_combatants).chain(),
    );
    app.add_observer(restore_on_revive);

    app.init_resource::<DeathLog>();
    app.add_observer(|trigger: On<Death>, mut log: ResMut<DeathLog>| {
        log.0.push(trigger.event().entity);
    });

    app
}

fn hit(app: &mut App, target: Entity, damage: f32, direction: Vec2) {
    app.world_mut()
        .resource_mut::<Messages<ProjectileHit>>()
        .write(ProjectileHit {
            projectile: Entity::PLACEHOLDER,
            target,
            damage,
            impact_direction: direction,
        });
}

#[test]
fn projectile_hit_reduces_health_and_records_impact() {
    let mut app = combat_app();
    let target = app
        .world_mut()
        .spawn((Health::new(10.0), Layer::Enemies, LastImpact::default()))
        .id();

    hit(&mut app, target, 4.0, Vec2::Y);
    app.update();

    let health = app.world().get::<Health>(target).unwrap();
    assert_eq!(health.current, 6.0);
    let impact = app.world().get::<LastImpact>(target).unwrap();
    assert_eq!(impact.0, Vec2::Y);
}

#[test]
fn depleted_combatant_dies_exactly_once() {
    let mut app = combat_app();
    let target = app
        .world_mut()
        .spawn((Health::new(10.0), Layer::Enemies))
        .id();

    hit(&mut app, target, 10.0, Vec2::X);
    app.update();

    assert!(app.world().get::<Dead>(target).is_some());
    assert_eq!(app.world().resource::<DeathLog>().0, vec![target]);

    // Health stays at zero across frames; the death is not announced again.
    app.update();
    app.update();
    assert_eq!(app.world().resource::<DeathLog>().0.len(), 1);
}

#[test]
fn overkill_damage_clamps_health_at_zero() {
    let mut app = combat_app();
    let target = app
        .world_mut()
        .spawn((Health::new(10.0), Layer::Enemies))
        .id();

    hit(&mut app, target, 250.0, Vec2::X);
    app.update();

    assert_eq!(app.world().get::<Health>(target).unwrap().current, 0.0);
}

#[test]
fn revive_restores_health_and_clears_dead() {
    let mut app = combat_app();
    let target = app
        .world_mut()
        .spawn((Health::new(10.0), Layer::Enemies))
        .id();

    hit(&mut app, target, 10.0, Vec2::X);
    app.update();
    assert!(app.world().get::<Dead>(target).is_some());

    app.world_mut().trigger(Revived { entity: target });
    app.update();

    assert!(app.world().get::<Dead>(target).is_none());
    assert_eq!(app.world().get::<Health>(target).unwrap().current, 10.0);

    // Back among the living: it can die again, announced a second time.
    hit(&mut app, target, 10.0, Vec2::X);
    app.update();
    assert_eq!(app.world().resource::<DeathLog>().0.len(), 2);
}
