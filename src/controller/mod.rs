// src/controller/mod.rs
//! Input → pose math. Nothing in here touches the ECS; systems hand in a
//! `Pose` and get one back.

mod heading;
mod locomotion;
mod pose;

pub use heading::{update_heading, PointerSample, Unproject, ViewportCamera};
pub use locomotion::try_move_forward;
pub use pose::{Boundary, Pose};
