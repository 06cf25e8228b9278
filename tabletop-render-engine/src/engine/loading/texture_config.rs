use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::TabletopAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::WoodFloor;
use constants::scene_layout::FLOOR_TEXTURE_REPEAT;

/// Apply repeat wrapping and floor-scale tiling once the wood image decodes.
///
/// This runs every frame until the image shows up. The floor may already be
/// on screen untextured by then; it pops in when this fires, matching the
/// fire-and-forget load the scene was built with.
pub fn configure_floor_texture(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<TabletopAssets>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    floor_query: Query<&MeshMaterial3d<StandardMaterial>, With<WoodFloor>>,
) {
    if loading_progress.floor_texture_configured || !loading_progress.manifest_loaded {
        return;
    }

    let Some(image) = images.get_mut(&assets.floor_texture) else {
        return;
    };

    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..default()
    });

    let Ok(material_handle) = floor_query.single() else {
        return;
    };
    if let Some(material) = materials.get_mut(&material_handle.0) {
        material.uv_transform = Affine2::from_scale(Vec2::splat(FLOOR_TEXTURE_REPEAT));
    }

    info!("✓ Floor texture configured: repeat wrap, {FLOOR_TEXTURE_REPEAT}x tiling");
    loading_progress.floor_texture_configured = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::floor::spawn_wood_floor;
    use bevy::ecs::system::RunSystemOnce;

    fn spawn_floor_in(world: &mut World, texture: Handle<Image>) {
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    spawn_wood_floor(&mut commands, &mut meshes, &mut materials, texture.clone());
                },
            )
            .unwrap();
    }

    #[test]
    fn floor_texture_configured_after_image_arrives() {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<Assets<Image>>();
        world.init_resource::<LoadingProgress>();

        let texture = world
            .resource_mut::<Assets<Image>>()
            .reserve_handle();
        world.insert_resource(TabletopAssets {
            floor_texture: texture.clone(),
            ..default()
        });
        world.resource_mut::<LoadingProgress>().manifest_loaded = true;

        spawn_floor_in(&mut world, texture.clone());

        // Image not decoded yet: nothing to configure.
        world.run_system_once(configure_floor_texture).unwrap();
        assert!(
            !world
                .resource::<LoadingProgress>()
                .floor_texture_configured
        );

        // Simulate the load completing.
        world
            .resource_mut::<Assets<Image>>()
            .insert(&texture, Image::default());
        world.run_system_once(configure_floor_texture).unwrap();

        let progress = world.resource::<LoadingProgress>();
        assert!(progress.floor_texture_configured);

        let images = world.resource::<Assets<Image>>();
        let image = images.get(&texture).unwrap();
        match &image.sampler {
            ImageSampler::Descriptor(descriptor) => {
                // ImageAddressMode doesn't implement PartialEq, so match on the variant.
                assert!(matches!(descriptor.address_mode_u, ImageAddressMode::Repeat));
                assert!(matches!(descriptor.address_mode_v, ImageAddressMode::Repeat));
            }
            other => panic!("expected a sampler descriptor, got {other:?}"),
        }

        let material_handle = world
            .query_filtered::<&MeshMaterial3d<StandardMaterial>, With<WoodFloor>>()
            .single(&world)
            .unwrap()
            .0
            .clone();
        let materials = world.resource::<Assets<StandardMaterial>>();
        let material = materials.get(&material_handle).unwrap();
        assert_eq!(
            material.uv_transform,
            Affine2::from_scale(Vec2::splat(FLOOR_TEXTURE_REPEAT))
        );
    }
}
