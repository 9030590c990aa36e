//! Sticky-note domain model.

use crate::model::surface::TriangleMesh;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a placed note.
pub type NoteId = Uuid;

/// Identifier of a note's render proxy, handed to the UI layer.
///
/// The UI reports edits against this id; the lifecycle manager maps it
/// back to a `NoteId` through a lookup table instead of a back-pointer
/// on the render object.
pub type ProxyId = Uuid;

/// Fixed note palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteColor {
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
}

impl NoteColor {
    /// Colors cycled through by successive placements. Pink stays
    /// selectable on an existing note but is not in the spawn rotation.
    pub const SPAWN_ROTATION: [NoteColor; 4] = [
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
    ];

    /// Pastel hex value the UI layer paints the card with.
    pub fn hex(self) -> &'static str {
        match self {
            NoteColor::Yellow => "#fffacd",
            NoteColor::Blue => "#add8e6",
            NoteColor::Green => "#c8e6c9",
            NoteColor::Pink => "#f8bbd0",
            NoteColor::Purple => "#e1bee7",
        }
    }
}

/// A user-created annotation anchored to a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identity, never reused within a session.
    pub id: NoteId,
    /// Anchor position: hit point pushed out along the surface normal.
    pub position: Vec3,
    /// Rotation turning the card's +Z face onto the surface normal.
    pub orientation: Quat,
    pub color: NoteColor,
    pub content: String,
    /// Externally supplied grab state, edge-tracked by the lifecycle
    /// manager.
    pub grabbed: bool,
    /// User pin toggle. Stored for the UI layer; nothing in the engine
    /// branches on it.
    pub pinned: bool,
    /// Session clock at placement, in ms.
    pub created_at_ms: u64,
    /// Render-proxy identity for UI callbacks.
    pub proxy: ProxyId,
    /// False until the visual subtree has been populated. Lags placement
    /// by at most one tick; the raycast proxy is valid regardless.
    pub finalized: bool,
}

impl Note {
    pub fn new(
        position: Vec3,
        orientation: Quat,
        color: NoteColor,
        content: impl Into<String>,
        created_at_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            orientation,
            color,
            content: content.into(),
            grabbed: false,
            pinned: false,
            created_at_ms,
            proxy: Uuid::new_v4(),
            finalized: false,
        }
    }

    /// Square hit proxy for raycasting: the card face, posed in world
    /// space. Built fresh each tick so a grabbed, moving note is tested
    /// where it currently is.
    pub fn hit_proxy(&self, half_extent: f32) -> TriangleMesh {
        let corners = [
            Vec3::new(-half_extent, -half_extent, 0.0),
            Vec3::new(half_extent, -half_extent, 0.0),
            Vec3::new(half_extent, half_extent, 0.0),
            Vec3::new(-half_extent, half_extent, 0.0),
        ];
        let vertices = corners
            .iter()
            .map(|corner| self.position + self.orientation * *corner)
            .collect();
        TriangleMesh::new(vertices, vec![[0, 1, 2], [0, 2, 3]])
    }
}
