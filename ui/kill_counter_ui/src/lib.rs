use {
    bevy::prelude::*,
    kills::KillTracker,
    states::GameState,
    widgets::spawn_counter_text,
};

pub struct KillCounterUiPlugin;

impl Plugin for KillCounterUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Running), setup_kill_counters)
            .add_systems(
                Update,
                update_kill_counters
                    .run_if(in_state(GameState::Running).and(resource_changed::<KillTracker>)),
            );
    }
}

#[derive(Component)]
struct TotalCounterText;

#[derive(Component)]
struct RemainingCounterText;

fn setup_kill_counters(mut commands: Commands) {
    spawn_counter_text(&mut commands, "Targets: 0", 10.0, TotalCounterText);
    spawn_counter_text(&mut commands, "Remaining: 0", 36.0, RemainingCounterText);
}

fn update_kill_counters(
    tracker: Res<KillTracker>,
    mut totals: Query<&mut Text, (With<TotalCounterText>, Without<RemainingCounterText>)>,
    mut remainings: Query<&mut Text, (With<RemainingCounterText>, Without<TotalCounterText>)>,
) {
    for mut text in totals.iter_mut() {
        text.0 = format!("Targets: {}", tracker.death_threshold);
    }
    for mut text in remainings.iter_mut() {
        text.0 = format!("Remaining: {}", tracker.remaining_deaths);
    }
}
