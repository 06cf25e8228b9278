use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

/// Every entity in the subtree (root included) that can render shadows.
///
/// Bevy only consults shadow flags on mesh entities, so `Mesh3d` is the
/// capability test; group and empty transform nodes are skipped.
fn shadow_capable_nodes(
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) -> Vec<Entity> {
    std::iter::once(root)
        .chain(children.iter_descendants(root))
        .filter(|entity| meshes.contains(*entity))
        .collect()
}

pub fn subtree_has_mesh(
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) -> bool {
    !shadow_capable_nodes(root, children, meshes).is_empty()
}

/// Make every mesh in the model subtree cast shadows.
///
/// Bevy meshes cast by default; this clears any opt-out left on the subtree.
pub fn cast_shadow(
    commands: &mut Commands,
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    for entity in shadow_capable_nodes(root, children, meshes) {
        commands.entity(entity).remove::<NotShadowCaster>();
    }
}

/// Make every mesh in the model subtree receive shadows.
pub fn receive_shadow(
    commands: &mut Commands,
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    for entity in shadow_capable_nodes(root, children, meshes) {
        commands.entity(entity).remove::<NotShadowReceiver>();
    }
}

/// Opt the whole subtree out of casting shadows.
pub fn skip_shadow_casting(
    commands: &mut Commands,
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    for entity in shadow_capable_nodes(root, children, meshes) {
        commands.entity(entity).insert(NotShadowCaster);
    }
}

/// Opt the whole subtree out of receiving shadows.
pub fn skip_shadow_receiving(
    commands: &mut Commands,
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    for entity in shadow_capable_nodes(root, children, meshes) {
        commands.entity(entity).insert(NotShadowReceiver);
    }
}

/// Shadow policy for the stacked scene (floor < table < cup).
///
/// The cup only casts: nothing sits on it, so it never shows a shadow. The
/// table casts onto the floor and receives the cup's shadow.
pub fn add_shadows(
    commands: &mut Commands,
    table: Entity,
    coffee_cup: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
) {
    cast_shadow(commands, coffee_cup, children, meshes);
    skip_shadow_receiving(commands, coffee_cup, children, meshes);

    cast_shadow(commands, table, children, meshes);
    receive_shadow(commands, table, children, meshes);
}
