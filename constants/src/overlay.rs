use bevy::color::Color;

/// FPS readout label and styling, anchored to the top-left corner.
pub const FPS_LABEL: &str = "FPS: ";
pub const FPS_TEXT_SIZE: f32 = 14.0;
pub const FPS_TEXT_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);
pub const FPS_MARGIN_PX: f32 = 10.0;
