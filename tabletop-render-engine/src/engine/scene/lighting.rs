use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;

use constants::lighting::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOR, SHADOW_MAP_SIZE, SPOT_LIGHT_COLOR,
    SPOT_LIGHT_INTENSITY, SPOT_LIGHT_OUTER_ANGLE, SPOT_LIGHT_PENUMBRA, SPOT_LIGHT_POSITION,
    SPOT_LIGHT_RANGE, SPOT_SHADOW_DEPTH_BIAS, SPOT_SHADOW_NEAR_Z,
};
use constants::scene_layout::CAMERA_LOOK_TARGET;

/// White ambient fill plus one shadow-casting spot aimed down at the table.
///
/// The ambient term is a resource in Bevy rather than a scene node; the spot
/// is a real entity. Shadow map resolution for spot lights is global, set
/// through [`PointLightShadowMap`].
pub fn spawn_scene_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_LIGHT_COLOR,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.insert_resource(PointLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        SpotLight {
            color: SPOT_LIGHT_COLOR,
            intensity: SPOT_LIGHT_INTENSITY,
            range: SPOT_LIGHT_RANGE,
            outer_angle: SPOT_LIGHT_OUTER_ANGLE,
            // Penumbra: the cone softens over the outer tenth.
            inner_angle: SPOT_LIGHT_OUTER_ANGLE * (1.0 - SPOT_LIGHT_PENUMBRA),
            shadows_enabled: true,
            shadow_depth_bias: SPOT_SHADOW_DEPTH_BIAS,
            shadow_map_near_z: SPOT_SHADOW_NEAR_Z,
            ..default()
        },
        Transform::from_translation(SPOT_LIGHT_POSITION).looking_at(CAMERA_LOOK_TARGET, Vec3::Z),
    ));
}
