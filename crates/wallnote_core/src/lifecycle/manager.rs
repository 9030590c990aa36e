//! Note entity ownership and lifecycle orchestration.

use crate::config::PlacementConfig;
use crate::geometry::intersect::NoteProxy;
use crate::geometry::orientation::OrientationSolver;
use crate::geometry::GeometryError;
use crate::lifecycle::events::{FeedbackSink, NoteEvent};
use crate::model::note::{Note, NoteColor, NoteId, ProxyId};
use glam::{Quat, Vec3};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};

/// Owns every live note and the tables around it.
///
/// The palette cursor is shared between placement and the color button,
/// matching the interaction design: placing and recoloring both advance
/// the same round-robin cycle.
pub struct NoteLifecycleManager {
    notes: BTreeMap<NoteId, Note>,
    proxy_index: BTreeMap<ProxyId, NoteId>,
    /// Notes placed but not yet visually populated; drained at the start
    /// of the following tick, at most one tick after placement.
    pending_finalize: Vec<NoteId>,
    palette_cursor: usize,
    solver: OrientationSolver,
    surface_offset: f32,
    note_half_extent: f32,
    default_content: String,
    sink: Box<dyn FeedbackSink>,
}

impl NoteLifecycleManager {
    pub fn new(config: &PlacementConfig, sink: Box<dyn FeedbackSink>) -> Self {
        Self {
            notes: BTreeMap::new(),
            proxy_index: BTreeMap::new(),
            pending_finalize: Vec::new(),
            palette_cursor: 0,
            solver: OrientationSolver::new(config.parallel_threshold),
            surface_offset: config.surface_offset,
            note_half_extent: config.note_half_extent,
            default_content: config.default_content.clone(),
            sink,
        }
    }

    /// Creates a note at a resolved placement.
    ///
    /// The note is anchored at `point + normal * offset`, faced along the
    /// normal, and raycastable immediately; visual finalization is queued
    /// for the next tick.
    ///
    /// # Errors
    /// - `GeometryError::ZeroLengthNormal` when `normal` is degenerate.
    pub fn place(
        &mut self,
        point: Vec3,
        normal: Vec3,
        now_ms: u64,
    ) -> Result<NoteId, GeometryError> {
        let orientation = self.solver.align_to_normal(normal)?;
        let position = point + normal.normalize() * self.surface_offset;
        let color = self.next_spawn_color();

        let note = Note::new(
            position,
            orientation,
            color,
            self.default_content.clone(),
            now_ms,
        );
        let id = note.id;
        self.proxy_index.insert(note.proxy, id);
        self.pending_finalize.push(id);
        self.notes.insert(id, note);

        info!(
            "event=note_placed module=lifecycle status=ok id={} color={} x={:.3} y={:.3} z={:.3}",
            id,
            color.hex(),
            position.x,
            position.y,
            position.z
        );
        self.sink.on_note_event(&NoteEvent::Placed {
            id,
            position,
            color,
        });
        Ok(id)
    }

    /// Marks queued notes as visually populated. Called once at the top of
    /// each tick, bounding the placement-to-finalize lag to one tick.
    pub fn finalize_pending(&mut self) -> usize {
        let mut finalized = 0;
        for id in std::mem::take(&mut self.pending_finalize) {
            // A delete between placement and this tick cancels finalization.
            if let Some(note) = self.notes.get_mut(&id) {
                note.finalized = true;
                finalized += 1;
                debug!(
                    "event=note_finalized module=lifecycle status=ok id={}",
                    id
                );
            }
        }
        finalized
    }

    /// Sets a note's color. Idempotent; `false` on a dead id.
    pub fn set_color(&mut self, id: NoteId, color: NoteColor) -> bool {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.color = color;
                true
            }
            None => {
                debug!(
                    "event=lifecycle_noop module=lifecycle status=ok op=set_color id={}",
                    id
                );
                false
            }
        }
    }

    /// Color-button behavior: advance the shared palette cursor, then
    /// apply the color it now points at. The next placement reuses that
    /// same cursor position.
    pub fn cycle_color(&mut self, id: NoteId) -> Option<NoteColor> {
        if !self.notes.contains_key(&id) {
            debug!(
                "event=lifecycle_noop module=lifecycle status=ok op=cycle_color id={}",
                id
            );
            return None;
        }
        self.palette_cursor = (self.palette_cursor + 1) % NoteColor::SPAWN_ROTATION.len();
        let color = NoteColor::SPAWN_ROTATION[self.palette_cursor];
        self.set_color(id, color);
        Some(color)
    }

    /// Replaces a note's content. Idempotent; `false` on a dead id.
    pub fn set_content(&mut self, id: NoteId, content: impl Into<String>) -> bool {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.content = content.into();
                true
            }
            None => {
                debug!(
                    "event=lifecycle_noop module=lifecycle status=ok op=set_content id={}",
                    id
                );
                false
            }
        }
    }

    /// Writes back a note's pose after the grab subsystem relocates it,
    /// so the raycast proxy follows the card to where it was dropped.
    /// `false` on a dead id.
    pub fn set_pose(&mut self, id: NoteId, position: Vec3, orientation: Quat) -> bool {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.position = position;
                note.orientation = orientation;
                true
            }
            None => {
                debug!(
                    "event=lifecycle_noop module=lifecycle status=ok op=set_pose id={}",
                    id
                );
                false
            }
        }
    }

    /// Pins or unpins a note. `false` on a dead id.
    pub fn set_pinned(&mut self, id: NoteId, pinned: bool) -> bool {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.pinned = pinned;
                true
            }
            None => false,
        }
    }

    /// Deletes a note: render identity, raycast proxy and any pending
    /// finalization go in the same call, so no tick can observe a note
    /// that is visually gone but still raycastable.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.remove(&id) else {
            debug!(
                "event=lifecycle_noop module=lifecycle status=ok op=delete id={}",
                id
            );
            return false;
        };
        self.proxy_index.remove(&note.proxy);
        self.pending_finalize.retain(|pending| *pending != id);

        info!("event=note_deleted module=lifecycle status=ok id={}", id);
        self.sink.on_note_event(&NoteEvent::Deleted { id });
        true
    }

    /// Applies one grab edge. The grab subsystem owns detection; this is
    /// called once per flip, not per frame.
    pub fn on_grab_transition(&mut self, id: NoteId, grabbed: bool) -> bool {
        let Some(note) = self.notes.get_mut(&id) else {
            return false;
        };
        if note.grabbed == grabbed {
            return true;
        }
        note.grabbed = grabbed;
        let event = if grabbed {
            NoteEvent::Grabbed { id }
        } else {
            NoteEvent::Released { id }
        };
        debug!(
            "event=note_grab_edge module=lifecycle status=ok id={} grabbed={}",
            id, grabbed
        );
        self.sink.on_note_event(&event);
        true
    }

    /// Reconciles per-note grab booleans supplied by the interaction
    /// subsystem for this tick, emitting one event per flip.
    pub fn sync_grab_states(&mut self, grabbed: &BTreeSet<NoteId>) {
        let ids: Vec<NoteId> = self.notes.keys().copied().collect();
        for id in ids {
            self.on_grab_transition(id, grabbed.contains(&id));
        }
    }

    /// Raycastable stand-ins for every live note, pending ones included:
    /// a note's geometric identity exists from the moment of placement.
    pub fn raycast_proxies(&self) -> Vec<NoteProxy> {
        self.notes
            .values()
            .map(|note| NoteProxy {
                id: note.id,
                mesh: note.hit_proxy(self.note_half_extent),
            })
            .collect()
    }

    /// Resolves a UI render-proxy id back to its note.
    pub fn note_for_proxy(&self, proxy: ProxyId) -> Option<NoteId> {
        self.proxy_index.get(&proxy).copied()
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn next_spawn_color(&mut self) -> NoteColor {
        let color = NoteColor::SPAWN_ROTATION[self.palette_cursor];
        self.palette_cursor = (self.palette_cursor + 1) % NoteColor::SPAWN_ROTATION.len();
        color
    }
}
