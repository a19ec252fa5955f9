// src/simulation.rs
use bevy::prelude::*;

use crate::controller::{
    try_move_forward, update_heading, Boundary, PointerSample, Pose, Unproject,
};

/// Sole owner of the tank's pose. Empty until the model has loaded, and
/// emptied again when the running scene is torn down; every operation is a
/// no-op while empty.
#[derive(Resource, Debug, Default)]
pub struct Simulation {
    pose: Option<Pose>,
    boundary: Boundary,
}

impl Simulation {
    pub fn new(boundary: Boundary) -> Self {
        Self { pose: None, boundary }
    }

    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    pub fn spawn(&mut self, pose: Pose) {
        self.pose = Some(pose);
    }

    /// Drops the pose; returns whether there was one.
    pub fn release(&mut self) -> bool {
        self.pose.take().is_some()
    }

    /// Apply one pointer sample. Returns `true` if the heading changed.
    pub fn steer(
        &mut self,
        sample: PointerSample,
        camera: &impl Unproject,
        smoothing: f32,
    ) -> bool {
        let Some(pose) = self.pose.as_mut() else {
            return false;
        };
        let next = update_heading(sample, camera, *pose, smoothing);
        let changed = next != *pose;
        *pose = next;
        changed
    }

    /// Apply one forward step. Returns `true` if it was committed.
    pub fn advance(&mut self, distance: f32) -> bool {
        let Some(pose) = self.pose.as_mut() else {
            return false;
        };
        match try_move_forward(*pose, distance, self.boundary) {
            Some(next) => {
                *pose = next;
                true
            }
            None => false,
        }
    }
}
