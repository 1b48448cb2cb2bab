use {
    bevy::{log::LogPlugin, prelude::*},
    game_core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,\
                    game_core=debug,\
                    game_assets=info,\
                    kills=debug,\
                    combat=debug,\
                    ai=debug,\
                    fishing=debug,\
                    death_effects=debug,\
                    feedback=debug"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .run();
}
