use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    combat_components::Layer,
    serde::{Deserialize, Serialize},
    states::GameState,
};

pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SpawnGroup>();
        app.register_type::<ZoneDefinition>();

        app.add_plugins(RonAssetPlugin::<ArenaDefinition>::new(&["arena.ron"]));

        app.init_resource::<GameAssets>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_assets.run_if(in_state(GameState::Loading)));
    }
}

#[derive(Resource, Default)]
pub struct GameAssets {
    pub arena: Handle<ArenaDefinition>,
}

/// One group of identical creatures to spawn into the arena.
#[derive(Reflect, Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpawnGroup {
    pub name: String,
    pub layer: Layer,
    pub count: u32,
    pub health: f32,
    pub movement_speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    pub attacks_per_second: f32,
    /// Center of the spawn area.
    pub area_center: (f32, f32),
    /// Spawn positions are jittered inside this half-extent box.
    pub area_half_extents: (f32, f32),
}

#[derive(Reflect, Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneDefinition {
    pub center: (f32, f32),
    pub half_extents: (f32, f32),
}

#[derive(Asset, TypePath, Default, Debug, Deserialize, Serialize)]
pub struct ArenaDefinition {
    pub groups: Vec<SpawnGroup>,
    pub fishing_zones: Vec<ZoneDefinition>,
}

fn start_loading(mut assets: ResMut<GameAssets>, asset_server: Res<AssetServer>) {
    info!("started loading assets");
    assets.arena = asset_server.load("arenas/shore.arena.ron");
}

fn check_assets(
    mut next_state: ResMut<NextState<GameState>>,
    game_assets: Res<GameAssets>,
    asset_server: Res<AssetServer>,
) {
    if asset_server.is_loaded_with_dependencies(&game_assets.arena) {
        info!("assets loaded");
        next_state.set(GameState::Running);
    }
}
