use bevy::prelude::*;

/// Lifecycle of the controllable tank.
///
/// `Loading` until the model asset settles, then `Running` (controls live)
/// or `Failed` (scene stays up with nothing to drive).
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimState {
    #[default]
    Loading,
    Running,
    Failed,
}
