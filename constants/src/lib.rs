/// Fixed positions and dimensions for the tabletop scene.
pub mod scene_layout;

/// Ambient and spot light parameters.
pub mod lighting;

/// Orbit camera limits, damping, and input sensitivities.
pub mod camera_controls;

/// Relative asset paths.
pub mod path;

/// FPS overlay label and styling.
pub mod overlay;
