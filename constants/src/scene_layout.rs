use bevy::math::Vec3;

/// Table rests on the floor plane.
pub const TABLE_POSITION: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Cup sits on the table surface, slightly off-centre.
pub const COFFEE_CUP_POSITION: Vec3 = Vec3::new(0.25, 1.14, -0.25);

/// Initial camera placement, aimed at the world origin.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.8, 3.0);

/// Orbit target and look-at point for the whole scene.
pub const CAMERA_LOOK_TARGET: Vec3 = Vec3::ZERO;

/// Side length of the square floor plane in world units.
pub const FLOOR_SIZE: f32 = 500.0;

/// Vertical position of the floor, level with the table feet.
pub const FLOOR_HEIGHT: f32 = -1.0;

/// Texture tiling factor across the floor plane on both axes.
pub const FLOOR_TEXTURE_REPEAT: f32 = 300.0;
