use crate::engine::assets::scene_manifest::SceneManifest;
use bevy::prelude::*;

/// Handles for everything the scene needs at runtime.
///
/// Model and texture handles stay at `Handle::default()` until the manifest
/// resolves and tells us which files to load.
#[derive(Resource, Default)]
pub struct TabletopAssets {
    pub manifest: Option<Handle<SceneManifest>>,
    pub table_scene: Handle<Scene>,
    pub coffee_cup_scene: Handle<Scene>,
    pub floor_texture: Handle<Image>,
}

pub fn create_tabletop_assets(manifest: Option<Handle<SceneManifest>>) -> TabletopAssets {
    TabletopAssets {
        manifest,
        table_scene: Handle::default(),
        coffee_cup_scene: Handle::default(),
        floor_texture: Handle::default(),
    }
}
