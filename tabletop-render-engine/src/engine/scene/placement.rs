use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::shadows::{
    add_shadows, cast_shadow, receive_shadow, skip_shadow_receiving, subtree_has_mesh,
};
use crate::engine::scene::{CoffeeCupModel, TableModel};
use constants::scene_layout::{
    CAMERA_LOOK_TARGET, CAMERA_START_POSITION, COFFEE_CUP_POSITION, TABLE_POSITION,
};

/// Place both models and the camera at their fixed scene positions.
///
/// The camera ends up aimed at the world origin; Bevy refreshes the
/// projection on its own, so there is nothing more to trigger.
pub fn set_initial_model_positions(
    table: &mut Transform,
    coffee_cup: &mut Transform,
    camera: &mut Transform,
) {
    table.translation = TABLE_POSITION;
    coffee_cup.translation = COFFEE_CUP_POSITION;

    *camera =
        Transform::from_translation(CAMERA_START_POSITION).looking_at(CAMERA_LOOK_TARGET, Vec3::Y);
}

/// Arrange the scene once the spawned glTF subtrees have renderable meshes.
///
/// glTF scenes spawn their mesh children a frame or two after the root
/// entity, so this polls until every present hierarchy is actually there
/// before placing anything or applying the shadow policy. A model whose
/// load failed has no root at all and does not block the arrangement: the
/// camera and whatever models exist are still placed, exactly once.
pub fn arrange_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut table_query: Query<
        (Entity, &mut Transform),
        (With<TableModel>, Without<CoffeeCupModel>, Without<Camera3d>),
    >,
    mut cup_query: Query<
        (Entity, &mut Transform),
        (With<CoffeeCupModel>, Without<TableModel>, Without<Camera3d>),
    >,
    mut camera_query: Query<
        &mut Transform,
        (With<Camera3d>, Without<TableModel>, Without<CoffeeCupModel>),
    >,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
) {
    if loading_progress.scene_arranged || !loading_progress.models_spawned {
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let table = table_query.single_mut().ok();
    let cup = cup_query.single_mut().ok();

    if let Some((entity, _)) = table.as_ref() {
        if !subtree_has_mesh(*entity, &children, &meshes) {
            return;
        }
    }
    if let Some((entity, _)) = cup.as_ref() {
        if !subtree_has_mesh(*entity, &children, &meshes) {
            return;
        }
    }

    match (table, cup) {
        (Some((table_entity, mut table_transform)), Some((cup_entity, mut cup_transform))) => {
            set_initial_model_positions(
                &mut table_transform,
                &mut cup_transform,
                &mut camera_transform,
            );
            add_shadows(&mut commands, table_entity, cup_entity, &children, &meshes);
            info!("✓ Scene arranged: models placed, shadow policy applied");
        }
        // A model failed to load: place the camera and whatever is present.
        (table, cup) => {
            *camera_transform = Transform::from_translation(CAMERA_START_POSITION)
                .looking_at(CAMERA_LOOK_TARGET, Vec3::Y);
            if let Some((entity, mut transform)) = table {
                transform.translation = TABLE_POSITION;
                cast_shadow(&mut commands, entity, &children, &meshes);
                receive_shadow(&mut commands, entity, &children, &meshes);
            }
            if let Some((entity, mut transform)) = cup {
                transform.translation = COFFEE_CUP_POSITION;
                cast_shadow(&mut commands, entity, &children, &meshes);
                skip_shadow_receiving(&mut commands, entity, &children, &meshes);
            }
            warn!("Scene arranged with missing models");
        }
    }

    loading_progress.scene_arranged = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::pbr::{NotShadowCaster, NotShadowReceiver};

    #[test]
    fn models_and_camera_get_fixed_positions() {
        let mut table = Transform::default();
        let mut cup = Transform::default();
        let mut camera = Transform::default();

        set_initial_model_positions(&mut table, &mut cup, &mut camera);

        assert_eq!(table.translation, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(cup.translation, Vec3::new(0.25, 1.14, -0.25));
        assert_eq!(camera.translation, Vec3::new(0.0, 0.8, 3.0));
    }

    #[test]
    fn camera_looks_at_origin() {
        let mut table = Transform::default();
        let mut cup = Transform::default();
        let mut camera = Transform::default();

        set_initial_model_positions(&mut table, &mut cup, &mut camera);

        let expected = (CAMERA_LOOK_TARGET - camera.translation).normalize();
        let forward: Vec3 = *camera.forward();
        assert!((forward - expected).length() < 1e-5);
    }

    fn world_with_spawned_models() -> World {
        let mut world = World::new();
        world.init_resource::<LoadingProgress>();
        world.resource_mut::<LoadingProgress>().models_spawned = true;
        world.spawn((Camera3d::default(), Transform::default()));
        world
    }

    fn attach_mesh(world: &mut World, root: Entity) -> Entity {
        let mesh = world.spawn(Mesh3d(Handle::default())).id();
        world.entity_mut(root).add_children(&[mesh]);
        mesh
    }

    #[test]
    fn arrangement_waits_for_model_meshes() {
        let mut world = world_with_spawned_models();
        let table = world.spawn((TableModel, Transform::default())).id();
        let cup = world.spawn((CoffeeCupModel, Transform::default())).id();

        // Roots exist but their glTF meshes have not spawned yet.
        world.run_system_once(arrange_scene_when_ready).unwrap();
        assert!(!world.resource::<LoadingProgress>().scene_arranged);
        assert_eq!(
            world.entity(table).get::<Transform>().unwrap().translation,
            Vec3::ZERO
        );

        let table_mesh = attach_mesh(&mut world, table);
        let cup_mesh = attach_mesh(&mut world, cup);

        world.run_system_once(arrange_scene_when_ready).unwrap();

        assert!(world.resource::<LoadingProgress>().scene_arranged);
        assert_eq!(
            world.entity(table).get::<Transform>().unwrap().translation,
            TABLE_POSITION
        );
        assert_eq!(
            world.entity(cup).get::<Transform>().unwrap().translation,
            COFFEE_CUP_POSITION
        );

        // Policy applied: cup casts only, table casts and receives.
        assert!(world.entity(cup_mesh).contains::<NotShadowReceiver>());
        assert!(!world.entity(cup_mesh).contains::<NotShadowCaster>());
        assert!(!world.entity(table_mesh).contains::<NotShadowReceiver>());
        assert!(!world.entity(table_mesh).contains::<NotShadowCaster>());
    }

    #[test]
    fn arrangement_runs_exactly_once() {
        let mut world = world_with_spawned_models();
        let table = world.spawn((TableModel, Transform::default())).id();
        let cup = world.spawn((CoffeeCupModel, Transform::default())).id();
        attach_mesh(&mut world, table);
        attach_mesh(&mut world, cup);

        world.run_system_once(arrange_scene_when_ready).unwrap();
        assert!(world.resource::<LoadingProgress>().scene_arranged);

        // A later run must not snap a user-moved model back into place.
        world
            .entity_mut(table)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::splat(5.0);
        world.run_system_once(arrange_scene_when_ready).unwrap();
        assert_eq!(
            world.entity(table).get::<Transform>().unwrap().translation,
            Vec3::splat(5.0)
        );
    }

    #[test]
    fn arrangement_copes_with_a_missing_model() {
        let mut world = world_with_spawned_models();
        let table = world.spawn((TableModel, Transform::default())).id();
        let table_mesh = attach_mesh(&mut world, table);

        // The cup failed to load, so no root was ever spawned for it.
        world.run_system_once(arrange_scene_when_ready).unwrap();

        assert!(world.resource::<LoadingProgress>().scene_arranged);
        assert_eq!(
            world.entity(table).get::<Transform>().unwrap().translation,
            TABLE_POSITION
        );
        assert!(!world.entity(table_mesh).contains::<NotShadowCaster>());
        assert!(!world.entity(table_mesh).contains::<NotShadowReceiver>());

        let camera = world
            .query_filtered::<&Transform, With<Camera3d>>()
            .single(&world)
            .unwrap();
        assert_eq!(camera.translation, CAMERA_START_POSITION);
    }
}
