use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::engine::scene::WoodFloor;
use constants::scene_layout::{FLOOR_HEIGHT, FLOOR_SIZE};

/// Spawn the wood floor plane under the table.
///
/// The rectangle spans the XY plane, so it is rotated -90 degrees about X to
/// lie flat. The texture handle may still be loading; tiling and wrap modes
/// are applied later by `configure_floor_texture`, and until the image
/// decodes the plane renders with the material's plain base colour.
///
/// The floor receives shadows (Bevy's default) but never casts: nothing is
/// below it to shadow.
pub fn spawn_wood_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    wood_texture: Handle<Image>,
) -> Entity {
    let floor_mesh = meshes.add(Rectangle::new(FLOOR_SIZE, FLOOR_SIZE));
    let floor_material = materials.add(StandardMaterial {
        base_color_texture: Some(wood_texture),
        ..default()
    });

    commands
        .spawn((
            Mesh3d(floor_mesh),
            MeshMaterial3d(floor_material),
            Transform::from_xyz(0.0, FLOOR_HEIGHT, 0.0)
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            // skip_shadow_casting walks an applied hierarchy; the floor does
            // not exist until these commands flush, so the opt-out is
            // attached at spawn.
            NotShadowCaster,
            WoodFloor,
        ))
        .id()
}
