//! Normal-to-quaternion orientation solver.
//!
//! # Responsibility
//! - Map a surface normal to the rotation that turns a note's canonical
//!   forward axis (+Z) onto that normal.
//!
//! # Invariants
//! - Pure and deterministic: equal inputs yield bit-identical outputs.
//! - Near-parallel normals take an explicit branch, so the numerically
//!   unstable antiparallel case of the shortest-arc formula is never hit.

use crate::geometry::{GeometryError, MIN_VECTOR_LENGTH};
use glam::{Quat, Vec3};

/// Stateless solver carrying only its degenerate-angle threshold.
#[derive(Debug, Clone, Copy)]
pub struct OrientationSolver {
    parallel_threshold: f32,
}

impl OrientationSolver {
    /// `parallel_threshold` is the `|normal . forward|` value above which
    /// the degenerate branch applies; callers pass a validated config value.
    pub fn new(parallel_threshold: f32) -> Self {
        Self { parallel_threshold }
    }

    /// Rotation from the canonical forward axis (+Z) onto `normal`.
    ///
    /// Near-parallel inputs resolve to identity (`normal.z >= 0`) or a 180
    /// degree turn about +Y (`normal.z < 0`). Everything else uses the
    /// shortest-arc rotation between the two unit vectors.
    ///
    /// # Errors
    /// - `GeometryError::ZeroLengthNormal` when `normal` cannot be
    ///   normalized.
    pub fn align_to_normal(&self, normal: Vec3) -> Result<Quat, GeometryError> {
        let length = normal.length();
        if !length.is_finite() || length < MIN_VECTOR_LENGTH {
            return Err(GeometryError::ZeroLengthNormal);
        }
        let unit = normal / length;

        if unit.dot(Vec3::Z).abs() > self.parallel_threshold {
            if unit.z >= 0.0 {
                return Ok(Quat::IDENTITY);
            }
            return Ok(Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI));
        }

        Ok(Quat::from_rotation_arc(Vec3::Z, unit))
    }
}

impl Default for OrientationSolver {
    fn default() -> Self {
        Self::new(0.9999)
    }
}
