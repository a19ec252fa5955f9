// src/tank/systems.rs

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::actions::PlayerAction;
use crate::config::{hex_color, SimulatorSettings};
use crate::controller::{Boundary, PointerSample, Pose, ViewportCamera};
use crate::setup::MainCamera;
use crate::simulation::Simulation;
use crate::state::SimState;
use crate::tank::components::{Tank, TankModel, TankPaint};

/// Startup: size the drivable square from the arena settings.
pub fn init_simulation(mut commands: Commands, settings: Res<SimulatorSettings>) {
    commands.insert_resource(Simulation::new(Boundary::new(settings.arena.half_extent)));
}

/// Startup: kick off the async model load and build the shared paint.
pub fn request_tank_model(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SimulatorSettings>,
) {
    let tank = &settings.tank;
    let scene: Handle<Scene> =
        assets.load(GltfAssetLabel::Scene(0).from_asset(tank.model_path.clone()));
    info!("Tank: loading model from '{}'", tank.model_path);

    let paint = materials.add(StandardMaterial {
        base_color: hex_color(tank.paint_color),
        metallic: tank.paint_metallic,
        perceptual_roughness: tank.paint_roughness,
        ..default()
    });

    commands.insert_resource(TankModel(scene));
    commands.insert_resource(TankPaint(paint));
}

/// Update (Loading): wait for the scene to settle, then either spawn the tank
/// and hand the simulation a pose, or log and give up.
pub fn poll_tank_model(
    mut commands: Commands,
    assets: Res<AssetServer>,
    model: Option<Res<TankModel>>,
    settings: Res<SimulatorSettings>,
    mut sim: ResMut<Simulation>,
    mut next_state: ResMut<NextState<SimState>>,
) {
    let Some(model) = model else { return; };

    match assets.get_load_state(&model.0) {
        Some(LoadState::Loaded) => {
            let pose = Pose::default();
            commands
                .spawn((
                    SceneRoot(model.0.clone()),
                    pose_transform(pose, settings.tank.model_scale),
                    Tank,
                    StateScoped(SimState::Running),
                ))
                .observe(paint_tank_meshes);
            sim.spawn(pose);
            next_state.set(SimState::Running);
            info!("Tank: model loaded, controls live");
        }
        Some(LoadState::Failed(err)) => {
            error!("An error occurred while loading the model: {err}");
            next_state.set(SimState::Failed);
        }
        _ => {}
    }
}

/// Observer: once the scene is instantiated, swap every mesh's material for
/// the shared paint.
fn paint_tank_meshes(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    paint: Res<TankPaint>,
) {
    let mut painted = 0usize;
    for entity in children.iter_descendants(trigger.target()) {
        if meshes.contains(entity) {
            commands.entity(entity).insert(MeshMaterial3d(paint.0.clone()));
            painted += 1;
        }
    }
    debug!("Tank: painted {painted} mesh nodes");
}

/// Apply every pointer sample that arrived this frame, in order.
pub fn steer_toward_pointer(
    mut samples: EventReader<PointerSample>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<SimulatorSettings>,
    mut sim: ResMut<Simulation>,
) {
    let Ok((camera, transform)) = cameras.single() else {
        samples.clear();
        return;
    };
    let view = ViewportCamera { camera, transform };

    for sample in samples.read() {
        sim.steer(*sample, &view, settings.controls.turn_smoothing);
    }
}

/// One fixed step per forward action; no time integration.
pub fn drive_forward(
    mut actions: EventReader<PlayerAction>,
    settings: Res<SimulatorSettings>,
    mut sim: ResMut<Simulation>,
) {
    for action in actions.read() {
        match action {
            PlayerAction::MoveForward => {
                if !sim.advance(settings.controls.move_distance) {
                    debug!("Tank: forward step blocked at boundary");
                }
            }
        }
    }
}

/// Mirror the committed pose onto the tank's transform for rendering.
pub fn sync_tank_transform(
    sim: Res<Simulation>,
    mut query: Query<&mut Transform, With<Tank>>,
) {
    let Some(pose) = sim.pose() else { return; };
    for mut tf in &mut query {
        tf.translation = pose.position;
        tf.rotation = Quat::from_rotation_y(pose.heading);
    }
}

/// OnExit(Running): the tank entity is state-scoped; drop the pose with it.
pub fn release_simulation(mut sim: ResMut<Simulation>) {
    if sim.release() {
        info!("Tank: controls released");
    }
}

fn pose_transform(pose: Pose, scale: f32) -> Transform {
    Transform {
        translation: pose.position,
        rotation: Quat::from_rotation_y(pose.heading),
        scale: Vec3::splat(scale),
    }
}
