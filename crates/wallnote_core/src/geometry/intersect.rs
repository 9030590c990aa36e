//! Nearest-hit ray intersection over surfaces and note proxies.
//!
//! # Responsibility
//! - Find the nearest geometric hit for one ray against the current
//!   candidate set (room surfaces plus all live note hit proxies).
//! - Suppress note hits: a ray whose nearest hit is a note resolves to
//!   "absent", exactly like a miss, so placement logic short-circuits.
//!
//! # Invariants
//! - Candidates are unioned fresh per call; nothing is cached here.
//! - Ties by distance keep the earlier candidate (surfaces scan before
//!   note proxies, both in iteration order).
//! - Returned normals are unit length and face the ray origin's side.

use crate::geometry::ray::{Intersection, RayQuery};
use crate::model::note::NoteId;
use crate::model::surface::{Surface, SurfaceId, TriangleMesh};
use glam::Vec3;
use log::debug;

/// A live note's raycastable stand-in for one tick.
#[derive(Debug, Clone)]
pub struct NoteProxy {
    pub id: NoteId,
    pub mesh: TriangleMesh,
}

/// What the nearest hit struck, before note suppression is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitKind {
    Surface(SurfaceId),
    Note(NoteId),
}

/// Stateless nearest-hit intersector.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersector {
    /// Hits closer than this along the ray are discarded.
    min_hit_distance: f32,
}

impl RayIntersector {
    pub fn new(min_hit_distance: f32) -> Self {
        Self { min_hit_distance }
    }

    /// Resolves `ray` against every surface and note proxy, nearest first.
    ///
    /// Returns `None` for a true miss *and* when the nearest hit is a
    /// note: from the placement gate's point of view a "miss via note" is
    /// identical to "no surface under the ray".
    pub fn intersect<'a>(
        &self,
        ray: &RayQuery,
        surfaces: impl IntoIterator<Item = &'a Surface>,
        notes: &[NoteProxy],
    ) -> Option<Intersection> {
        let mut nearest: Option<(f32, Vec3, HitKind)> = None;

        for surface in surfaces {
            if let Some((distance, normal)) = self.nearest_triangle_hit(ray, &surface.mesh) {
                if nearest.map_or(true, |(best, _, _)| distance < best) {
                    nearest = Some((distance, normal, HitKind::Surface(surface.id)));
                }
            }
        }
        for proxy in notes {
            if let Some((distance, normal)) = self.nearest_triangle_hit(ray, &proxy.mesh) {
                if nearest.map_or(true, |(best, _, _)| distance < best) {
                    nearest = Some((distance, normal, HitKind::Note(proxy.id)));
                }
            }
        }

        match nearest? {
            (distance, _, HitKind::Note(id)) => {
                debug!(
                    "event=self_hit_suppressed module=geometry status=ok note={} distance={:.3}",
                    id, distance
                );
                None
            }
            (distance, normal, HitKind::Surface(id)) => Some(Intersection {
                point: ray.point_at(distance),
                normal,
                distance,
                surface: id,
            }),
        }
    }

    fn nearest_triangle_hit(&self, ray: &RayQuery, mesh: &TriangleMesh) -> Option<(f32, Vec3)> {
        let mut best: Option<(f32, Vec3)> = None;
        for triangle in mesh.triangles() {
            if let Some(hit) = self.ray_triangle(ray, triangle) {
                if best.map_or(true, |(t, _)| hit.0 < t) {
                    best = Some(hit);
                }
            }
        }
        best
    }

    /// Moller-Trumbore, returning `(distance, incoming-side unit normal)`.
    fn ray_triangle(&self, ray: &RayQuery, triangle: [Vec3; 3]) -> Option<(f32, Vec3)> {
        const DET_EPSILON: f32 = 1e-8;

        let edge1 = triangle[1] - triangle[0];
        let edge2 = triangle[2] - triangle[0];
        let p = ray.direction().cross(edge2);
        let det = edge1.dot(p);
        // Zero determinant covers both parallel rays and degenerate
        // triangles.
        if det.abs() < DET_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin() - triangle[0];
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = ray.direction().dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = edge2.dot(q) * inv_det;
        if t <= self.min_hit_distance {
            return None;
        }

        let mut normal = edge1.cross(edge2).normalize();
        if normal.dot(ray.direction()) > 0.0 {
            normal = -normal;
        }
        Some((t, normal))
    }
}

impl Default for RayIntersector {
    fn default() -> Self {
        Self::new(1e-4)
    }
}
