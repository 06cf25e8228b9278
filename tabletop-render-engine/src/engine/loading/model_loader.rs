use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::TabletopAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::{CoffeeCupModel, TableModel};

/// A load that has finished or failed is settled; `None` keeps polling.
fn settled_load(state: Option<LoadState>) -> Option<bool> {
    match state {
        Some(LoadState::Loaded) => Some(true),
        Some(LoadState::Failed(_)) => Some(false),
        _ => None,
    }
}

/// Spawn both model roots once their glTF loads settle.
///
/// A failed load still settles the milestone: the scene degrades to
/// whatever models arrived instead of holding the app in `Loading` forever.
pub fn spawn_loaded_models(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<TabletopAssets>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.models_spawned || !loading_progress.manifest_loaded {
        return;
    }

    let Some(table_loaded) = settled_load(asset_server.get_load_state(&assets.table_scene)) else {
        return;
    };
    let Some(cup_loaded) = settled_load(asset_server.get_load_state(&assets.coffee_cup_scene))
    else {
        return;
    };

    if table_loaded {
        commands.spawn((
            SceneRoot(assets.table_scene.clone()),
            Transform::default(),
            TableModel,
        ));
    } else {
        warn!("Table model failed to load; the scene continues without it");
    }

    if cup_loaded {
        commands.spawn((
            SceneRoot(assets.coffee_cup_scene.clone()),
            Transform::default(),
            CoffeeCupModel,
        ));
    } else {
        warn!("Coffee cup model failed to load; the scene continues without it");
    }

    if table_loaded && cup_loaded {
        info!("✓ Product models spawned");
    }
    loading_progress.models_spawned = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_loads_are_not_settled() {
        assert_eq!(settled_load(None), None);
        assert_eq!(settled_load(Some(LoadState::NotLoaded)), None);
        assert_eq!(settled_load(Some(LoadState::Loading)), None);
    }

    #[test]
    fn finished_loads_settle() {
        assert_eq!(settled_load(Some(LoadState::Loaded)), Some(true));
    }
}
