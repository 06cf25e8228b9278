use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_assets::create_tabletop_assets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::{camera_controller, spawn_viewport_camera};
use crate::engine::core::app_state::{
    AppState, transition_to_assets_loaded, transition_to_running,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::spawn_loaded_models;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_config::configure_floor_texture;
use crate::engine::scene::lighting::spawn_scene_lighting;
use crate::engine::scene::placement::arrange_scene_when_ready;
use crate::engine::systems::fps_tracking::{create_fps_overlay, fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .insert_resource(create_tabletop_assets(None));

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                spawn_loaded_models,
                arrange_scene_when_ready,
                transition_to_assets_loaded,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::AssetsLoaded)),
        );

    // The wood image can decode after the scene is already running; the
    // floor pops in whenever it lands, so this is not gated on state.
    app.add_systems(Update, configure_floor_texture);

    app.add_systems(
        Update,
        (camera_controller, fps_text_update_system).run_if(in_state(AppState::Running)),
    );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_viewport_camera(&mut commands);
    spawn_scene_lighting(&mut commands);
    create_fps_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
