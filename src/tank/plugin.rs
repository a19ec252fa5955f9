use bevy::prelude::*;

use crate::actions::PlayerAction;
use crate::controller::PointerSample;
use crate::input::InputMappingSet;
use crate::simulation::Simulation;
use crate::state::SimState;
use crate::tank::systems::{
    drive_forward, init_simulation, poll_tank_model, release_simulation, request_tank_model,
    steer_toward_pointer, sync_tank_transform,
};

pub struct TankPlugin;

impl Plugin for TankPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<PointerSample>()
            .add_event::<PlayerAction>()
            .init_resource::<Simulation>()
            // settings are final by Startup (loaded in PreStartup)
            .add_systems(Startup, (init_simulation, request_tank_model))
            .add_systems(Update, poll_tank_model.run_if(in_state(SimState::Loading)))
            .add_systems(
                Update,
                (steer_toward_pointer, drive_forward, sync_tank_transform)
                    .chain()
                    .after(InputMappingSet)
                    .run_if(in_state(SimState::Running)),
            )
            .add_systems(OnExit(SimState::Running), release_simulation);
    }
}
