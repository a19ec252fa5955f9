use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::{hex_color, SimulatorSettings};

#[derive(Component)]
pub struct MainCamera;

pub fn setup(
    mut commands: Commands,
    settings: Res<SimulatorSettings>,
) {
    let view = &settings.view;

    // 1) Background + ambient fill
    commands.insert_resource(ClearColor(hex_color(view.clear_color)));
    commands.insert_resource(AmbientLight {
        color: hex_color(view.ambient_color),
        brightness: view.ambient_brightness,
        ..default()
    });

    // 2) Sun
    commands.spawn((
        DirectionalLight {
            illuminance: view.sun_illuminance,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(view.sun_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 3) Camera
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: view.fov_degrees.to_radians(),
            near: view.near,
            far: view.far,
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(view.camera_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Ground grid spanning exactly the drivable square.
pub fn draw_ground_grid(mut gizmos: Gizmos, settings: Res<SimulatorSettings>) {
    let arena = &settings.arena;
    let cells = arena.grid_divisions.max(1);
    let spacing = 2.0 * arena.half_extent / cells as f32;

    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(cells),
        Vec2::splat(spacing),
        hex_color(arena.grid_color),
    );
}
