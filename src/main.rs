use bevy::prelude::*;
use bevy::window::WindowPlugin;

mod setup;
mod input;
mod actions;
mod config;
mod controller;
mod simulation;
mod state;
mod ui;
mod tank;

use config::{load_settings, SimulatorSettings};
use input::{key_mapping_system, pointer_mapping_system, InputMappingSet};
use setup::draw_ground_grid;
use state::SimState;
use tank::TankPlugin;
use ui::spawn_instructions;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Robot Simulator".into(),
                // wasm: track the host element instead of a fixed canvas size
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        // settings first so every Startup system sees the final values
        .init_resource::<SimulatorSettings>()
        .add_systems(PreStartup, load_settings)
        .init_state::<SimState>()
        .enable_state_scoped_entities::<SimState>()
        // camera, lights, overlay
        .add_systems(Startup, (setup::setup, spawn_instructions))
        .add_systems(Update, draw_ground_grid)
        // window events -> pointer samples / player actions
        .add_systems(
            Update,
            (pointer_mapping_system, key_mapping_system).in_set(InputMappingSet),
        )
        // model load, steering, driving
        .add_plugins(TankPlugin)
        .run();
}
