//! Room-surface geometry as reported by scene understanding.

use crate::geometry::{GeometryError, MIN_VECTOR_LENGTH};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a platform-reported surface mesh.
pub type SurfaceId = Uuid;

/// Indexed triangle soup in world space.
///
/// The platform refines meshes in place, so geometry is plain owned data
/// with no interior sharing; an update replaces the whole mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Axis-aligned-free rectangle: a square quad of `half_extent` centered
    /// at `center`, facing `normal`. Walls and floors arrive from the
    /// platform in exactly this two-triangle shape.
    ///
    /// # Errors
    /// - `GeometryError::ZeroLengthNormal` when `normal` cannot be
    ///   normalized.
    pub fn quad(center: Vec3, normal: Vec3, half_extent: f32) -> Result<Self, GeometryError> {
        let length = normal.length();
        if !length.is_finite() || length < MIN_VECTOR_LENGTH {
            return Err(GeometryError::ZeroLengthNormal);
        }
        let unit = normal / length;

        // Pick whichever world axis is least aligned with the normal to
        // seed a stable tangent basis.
        let seed = if unit.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
        let tangent = seed.cross(unit).normalize();
        let bitangent = unit.cross(tangent);

        let vertices = vec![
            center - tangent * half_extent - bitangent * half_extent,
            center + tangent * half_extent - bitangent * half_extent,
            center + tangent * half_extent + bitangent * half_extent,
            center - tangent * half_extent + bitangent * half_extent,
        ];
        let indices = vec![[0, 1, 2], [0, 2, 3]];
        Ok(Self { vertices, indices })
    }

    /// Iterates resolved triangles, skipping any with out-of-range indices.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.iter().filter_map(move |tri| {
            let a = self.vertices.get(tri[0] as usize)?;
            let b = self.vertices.get(tri[1] as usize)?;
            let c = self.vertices.get(tri[2] as usize)?;
            Some([*a, *b, *c])
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// One detected room surface: opaque geometry plus semantic metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Stable platform identity; updates reuse it, retraction retires it.
    pub id: SurfaceId,
    /// Semantic label (`wall`, `floor`, ...); absent for unlabeled meshes.
    pub label: Option<String>,
    /// Whether the platform reports this mesh as a bounded 3D volume.
    pub bounded: bool,
    /// World-space geometry.
    pub mesh: TriangleMesh,
}

impl Surface {
    pub fn new(mesh: TriangleMesh) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: None,
            bounded: false,
            mesh,
        }
    }

    pub fn with_label(mesh: TriangleMesh, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: Some(label.into()),
            bounded: false,
            mesh,
        }
    }

    /// Label for bookkeeping, with the platform's absent case bucketed.
    pub fn label_or_unlabeled(&self) -> &str {
        self.label.as_deref().unwrap_or("unlabeled")
    }
}
