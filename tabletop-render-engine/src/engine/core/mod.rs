//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine and loading progress transitions.
pub mod app_state;

/// Window configuration for the viewer.
pub mod window_config;
