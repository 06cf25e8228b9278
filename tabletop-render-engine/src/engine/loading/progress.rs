use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub models_spawned: bool,
    pub scene_arranged: bool,
    pub floor_texture_configured: bool,
}
