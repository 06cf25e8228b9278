/// FPS overlay text updates.
pub mod fps_tracking;
