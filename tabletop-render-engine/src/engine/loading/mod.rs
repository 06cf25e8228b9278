//! Staged asset loading for the tabletop scene.
//!
//! Loading is polling-based: each system early-returns until its
//! prerequisites in [`progress::LoadingProgress`] are met, then does its work
//! exactly once.

/// Scene manifest resolution; kicks off model and texture loads.
pub mod manifest_loader;

/// Spawns the glTF model roots once their scenes finish loading.
pub mod model_loader;

/// Deferred floor texture configuration (repeat wrap + tiling).
pub mod texture_config;

/// Milestone flags gating the loading chain and state transitions.
pub mod progress;
