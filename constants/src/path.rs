/// Scene manifest location under the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "scene";

pub fn manifest_path() -> String {
    format!("{}/manifest.json", RELATIVE_MANIFEST_PATH)
}
