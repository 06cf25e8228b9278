/// Damped camera motion: each frame moves this fraction towards the target.
pub const DAMPING_FACTOR: f32 = 0.25;

/// Polar angle ceiling keeps the camera above the floor plane.
pub const MAX_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Dolly distance limits around the table.
pub const MIN_DISTANCE: f32 = 0.8;
pub const MAX_DISTANCE: f32 = 4.0;

/// Mouse input sensitivities.
pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;
pub const PAN_SENSITIVITY: f32 = 0.002;

/// Wheel scroll to dolly conversion per scroll unit.
pub const LINE_SCROLL_FACTOR: f32 = 0.25;
pub const PIXEL_SCROLL_FACTOR: f32 = 0.0125;
