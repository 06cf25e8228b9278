//! Scene asset definitions and runtime handles.

/// Scene manifest loaded from JSON, naming model and texture files.
pub mod scene_manifest;

/// Runtime handle storage for everything the manifest references.
pub mod scene_assets;
