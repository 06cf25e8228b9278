//! Orbit camera for product viewing.
//!
//! Provides an OrbitControls-style resource with damping, polar angle and
//! dolly limits, plus the controller system that applies mouse input to the
//! viewport camera.

/// Orbit state resource and controller system.
pub mod orbit_camera;
