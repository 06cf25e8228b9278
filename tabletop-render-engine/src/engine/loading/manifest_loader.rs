use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::TabletopAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::floor::spawn_wood_floor;
use constants::path::manifest_path;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(manifest_path()));
}

/// Resolve the manifest, then kick off every load it names.
///
/// The floor is spawned here as well: its geometry does not depend on the
/// texture having arrived, only on knowing which file to ask for.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<TabletopAssets>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            info!("✓ Scene manifest loaded");
            assets.manifest = Some(handle.clone());

            assets.table_scene =
                asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.models.table.clone()));
            assets.coffee_cup_scene = asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(manifest.models.coffee_cup.clone()));
            assets.floor_texture = asset_server.load(manifest.floor_texture.clone());

            spawn_wood_floor(
                &mut commands,
                &mut meshes,
                &mut materials,
                assets.floor_texture.clone(),
            );

            loading_progress.manifest_loaded = true;
        }
    }
}
