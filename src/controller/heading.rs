// src/controller/heading.rs
//! Pointer → heading: cast the cursor onto the ground plane and ease the
//! entity's heading toward the hit point.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

use super::pose::Pose;

/// Depth used when unprojecting the cursor. Any depth strictly inside the
/// frustum lands on the same ray; this one is well clear of both planes.
const UNPROJECT_DEPTH: f32 = 0.5;

/// Squared ground distance under which the cursor counts as "on top of" the
/// entity and no heading can be derived.
const MIN_AIM_DISTANCE_SQ: f32 = 1e-8;

/// Cursor position in normalized device coordinates, both axes in [-1, 1],
/// +Y up.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `cursor` is in logical pixels from the top-left of a viewport of size
    /// `viewport`. Returns `None` for a zero-area viewport (minimised window).
    pub fn from_viewport(cursor: Vec2, viewport: Vec2) -> Option<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        Some(Self {
            x: (cursor.x / viewport.x) * 2.0 - 1.0,
            y: -(cursor.y / viewport.y) * 2.0 + 1.0,
        })
    }
}

/// A point on y = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundIntersection(pub Vec3);

/// What the heading controller needs from a camera.
pub trait Unproject {
    /// World-space camera position.
    fn eye(&self) -> Vec3;
    /// NDC point → world-space point. `None` if the camera can't invert its
    /// projection right now (e.g. viewport not sized yet).
    fn unproject(&self, ndc: Vec3) -> Option<Vec3>;
}

/// Adapter over Bevy's camera pair.
pub struct ViewportCamera<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl Unproject for ViewportCamera<'_> {
    fn eye(&self) -> Vec3 {
        self.transform.translation()
    }

    fn unproject(&self, ndc: Vec3) -> Option<Vec3> {
        self.camera.ndc_to_world(self.transform, ndc)
    }
}

/// Cast the sample through `camera` onto the ground plane.
///
/// `None` when the ray runs parallel to the ground or points away from it.
pub fn ground_intersection(
    sample: PointerSample,
    camera: &impl Unproject,
) -> Option<GroundIntersection> {
    let eye = camera.eye();
    let world = camera.unproject(Vec3::new(sample.x, sample.y, UNPROJECT_DEPTH))?;
    let dir = (world - eye).normalize_or_zero();

    if dir.y.abs() < f32::EPSILON {
        return None;
    }
    let t = -eye.y / dir.y;
    if !(t > 0.0) {
        return None;
    }

    Some(GroundIntersection(eye + dir * t))
}

/// Heading that would face `target` from `from`. `None` if the two points
/// coincide on the ground plane.
pub fn heading_toward(from: Vec3, target: Vec3) -> Option<f32> {
    let dx = target.x - from.x;
    let dz = target.z - from.z;
    if dx * dx + dz * dz < MIN_AIM_DISTANCE_SQ {
        return None;
    }
    Some((-dx).atan2(-dz))
}

/// Wrap an angle difference into (-π, π].
pub fn wrap_angle(diff: f32) -> f32 {
    let wrapped = PI - (PI - diff).rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// One smoothing step from `current` toward `target`, always along the short
/// way round.
#[inline]
pub fn smooth_heading(current: f32, target: f32, factor: f32) -> f32 {
    current + wrap_angle(target - current) * factor
}

/// Full pointer-move step. Returns the pose untouched when no ground point or
/// no heading can be derived.
pub fn update_heading(
    sample: PointerSample,
    camera: &impl Unproject,
    pose: Pose,
    smoothing: f32,
) -> Pose {
    let Some(GroundIntersection(hit)) = ground_intersection(sample, camera) else {
        return pose;
    };
    let Some(target) = heading_toward(pose.position, hit) else {
        return pose;
    };

    Pose {
        heading: smooth_heading(pose.heading, target, smoothing),
        ..pose
    }
}
