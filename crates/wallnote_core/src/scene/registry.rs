//! Live registry of detected room surfaces.

use crate::model::surface::{Surface, SurfaceId};
use log::debug;
use std::collections::BTreeMap;

/// One scene-understanding notification, in queued form.
///
/// A multi-threaded host delivers these from the platform thread; the
/// engine applies them at the start of the next tick so the registry
/// only ever mutates mid-tick from the frame loop itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Added(Surface),
    Updated(Surface),
    Removed(SurfaceId),
}

/// Membership bookkeeping for the current surface set.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: BTreeMap<SurfaceId, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface. A duplicate id replaces the stored surface in
    /// place (the platform refines meshes under a stable id), never errors.
    pub fn register(&mut self, surface: Surface) {
        let id = surface.id;
        let label = surface.label_or_unlabeled().to_string();
        let replaced = self.surfaces.insert(id, surface).is_some();
        debug!(
            "event=surface_registered module=scene status=ok id={} label={} replaced={}",
            id, label, replaced
        );
    }

    /// Removes a surface; unknown ids are a no-op.
    pub fn unregister(&mut self, id: SurfaceId) -> bool {
        let removed = self.surfaces.remove(&id).is_some();
        if removed {
            debug!(
                "event=surface_unregistered module=scene status=ok id={}",
                id
            );
        }
        removed
    }

    /// Applies one queued scene notification.
    pub fn apply(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Added(surface) | SurfaceEvent::Updated(surface) => {
                self.register(surface)
            }
            SurfaceEvent::Removed(id) => {
                self.unregister(id);
            }
        }
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Visits every surface. Iteration order is id order, which is stable
    /// within a tick.
    pub fn for_each(&self, mut visitor: impl FnMut(&Surface)) {
        for surface in self.surfaces.values() {
            visitor(surface);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.values()
    }

    /// Census of semantic labels, with unlabeled meshes bucketed together.
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for surface in self.surfaces.values() {
            *counts
                .entry(surface.label_or_unlabeled().to_string())
                .or_insert(0) += 1;
        }
        counts
    }
}
