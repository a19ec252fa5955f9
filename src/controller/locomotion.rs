// src/controller/locomotion.rs
use bevy::math::Vec3;

use super::pose::{Boundary, Pose};

/// Step `distance` along the current heading.
///
/// Returns the moved pose, or `None` if the candidate falls outside
/// `boundary`. X and Z move together or not at all; there's no sliding along
/// the edge.
pub fn try_move_forward(pose: Pose, distance: f32, boundary: Boundary) -> Option<Pose> {
    let step = pose.forward_xz() * distance;
    let x = pose.position.x + step.x;
    let z = pose.position.z + step.y;

    if !boundary.contains(x, z) {
        return None;
    }

    Some(Pose {
        position: Vec3::new(x, pose.position.y, z),
        ..pose
    })
}
