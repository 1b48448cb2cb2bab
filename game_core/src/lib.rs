use {
    ai::AiPlugin,
    bevy::prelude::*,
    combat::CombatPlugin,
    death_effects::DeathEffectsPlugin,
    feedback::FeedbackPlugin,
    fishing::FishingPlugin,
    game_assets::AssetsPlugin,
    kill_counter_ui::KillCounterUiPlugin,
    kill_events::KillEventsPlugin,
    kills::KillsPlugin,
    lifecycle_events::LifecycleEventsPlugin,
    messages::MessagesPlugin,
    states::GameState,
    system_schedule::GameSchedule,
};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    GameSchedule::FrameStart,
                    GameSchedule::ResolveIntent,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                    GameSchedule::FrameEnd,
                )
                    .chain(),
            )
            .add_plugins((
                AssetsPlugin,
                MessagesPlugin,
                LifecycleEventsPlugin,
                KillEventsPlugin,
                CombatPlugin,
                AiPlugin,
                KillsPlugin,
                FishingPlugin,
                DeathEffectsPlugin,
                FeedbackPlugin,
                KillCounterUiPlugin,
            ))
            .add_systems(Startup, setup_camera)
            .add_systems(
                OnEnter(GameState::Running),
                (systems::spawn_arena, kills::initialize_tracker).chain(),
            )
            .add_systems(OnExit(GameState::Running), kills::deactivate_tracker);

        app.add_observer(systems::handle_game_event);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
