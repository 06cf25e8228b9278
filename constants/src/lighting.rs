use bevy::color::Color;
use bevy::math::Vec3;

/// Ambient fill, white, bright enough to lift unlit faces.
pub const AMBIENT_LIGHT_COLOR: Color = Color::WHITE;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 80.0;

/// Spot light hangs above the table and points straight down at it.
pub const SPOT_LIGHT_COLOR: Color = Color::WHITE;
pub const SPOT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Luminous power in lumens (Bevy photometric units).
pub const SPOT_LIGHT_INTENSITY: f32 = 1_000_000.0;

/// Attenuation cut-off distance in world units.
pub const SPOT_LIGHT_RANGE: f32 = 50.0;

/// Cone half-angle; the soft edge starts at 90% of it.
pub const SPOT_LIGHT_OUTER_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
pub const SPOT_LIGHT_PENUMBRA: f32 = 0.1;

/// Shadow map resolution for point and spot lights.
pub const SHADOW_MAP_SIZE: usize = 8192;

/// Near plane of the shadow projection.
pub const SPOT_SHADOW_NEAR_Z: f32 = 0.5;

/// Depth bias against self-shadowing acne on the table surface.
pub const SPOT_SHADOW_DEPTH_BIAS: f32 = 0.02;
