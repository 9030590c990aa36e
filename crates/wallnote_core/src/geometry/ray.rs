//! Ray queries and their results.

use crate::geometry::{GeometryError, MIN_VECTOR_LENGTH};
use crate::model::surface::SurfaceId;
use glam::Vec3;

/// One frame's ray, built fresh from the active hand's pose.
///
/// The direction is normalized on construction and never mutated, so a
/// hit distance along the ray is also a world-space distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayQuery {
    origin: Vec3,
    direction: Vec3,
}

impl RayQuery {
    /// Builds a ray from an origin and a not-necessarily-unit direction.
    ///
    /// # Errors
    /// - `GeometryError::ZeroLengthDirection` when the direction cannot be
    ///   normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, GeometryError> {
        let length = direction.length();
        if !length.is_finite() || length < MIN_VECTOR_LENGTH {
            return Err(GeometryError::ZeroLengthDirection);
        }
        Ok(Self {
            origin,
            direction: direction / length,
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// World-space point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest surface hit for one ray query.
///
/// Note hits never surface here: the intersector suppresses them before
/// this type is produced, so `surface` always names room geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// World-space hit point.
    pub point: Vec3,
    /// Unit normal facing the ray's incoming side.
    pub normal: Vec3,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// The struck surface.
    pub surface: SurfaceId,
}
