use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Relative paths of the two product models under the asset root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFiles {
    pub table: String,
    pub coffee_cup: String,
}

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneManifest {
    pub models: ModelFiles,
    pub floor_texture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_deserializes_from_json() {
        let json = r#"{
            "models": {
                "table": "models/table.glb",
                "coffee_cup": "models/coffee-cup.glb"
            },
            "floor_texture": "textures/wood-floor.jpg"
        }"#;

        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.models.table, "models/table.glb");
        assert_eq!(manifest.models.coffee_cup, "models/coffee-cup.glb");
        assert_eq!(manifest.floor_texture, "textures/wood-floor.jpg");
    }
}
