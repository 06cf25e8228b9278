//! Scene composition: model placement, lighting, shadows, and the floor.

/// Initial model and camera placement.
pub mod placement;

/// Ambient fill and the shadow-casting spot light.
pub mod lighting;

/// Shadow participation for model subtrees.
pub mod shadows;

/// Tiled wood floor plane.
pub mod floor;

use bevy::prelude::*;

/// Marker component for the table model root.
#[derive(Component)]
pub struct TableModel;

/// Marker component for the coffee cup model root.
#[derive(Component)]
pub struct CoffeeCupModel;

/// Marker component for the floor plane.
#[derive(Component)]
pub struct WoodFloor;
