// src/controller/pose.rs
use bevy::math::{Vec2, Vec3};

/// Position + heading of the controlled entity.
///
/// Heading is a rotation about +Y in radians; 0 faces down -Z, the same
/// convention `Quat::from_rotation_y` uses, so the transform sync can feed it
/// straight through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub heading: f32,
}

impl Pose {
    pub const fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit vector the entity is facing, on the ground plane (X/Z).
    #[inline]
    pub fn forward_xz(&self) -> Vec2 {
        Vec2::new(-self.heading.sin(), -self.heading.cos())
    }
}

/// Symmetric square on the ground plane, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub half_extent: f32,
}

impl Boundary {
    pub const fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Strict containment: a point sitting exactly on the edge is outside.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let h = self.half_extent;
        x > -h && x < h && z > -h && z < h
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(2.5)
    }
}
