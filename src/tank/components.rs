use bevy::prelude::*;

/// Root entity of the spawned tank scene.
#[derive(Component)]
pub struct Tank;

/// Scene handle requested at startup; polled until it settles.
#[derive(Resource, Clone)]
pub struct TankModel(pub Handle<Scene>);

/// Shared material laid over every mesh in the tank scene.
#[derive(Resource, Clone)]
pub struct TankPaint(pub Handle<StandardMaterial>);
