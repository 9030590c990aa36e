//! Discrete feedback events and the collaborator sink.

use crate::model::note::{NoteColor, NoteId};
use glam::Vec3;

/// One discrete note event for the haptics/audio collaborator.
///
/// The core emits these and never blocks on the consumer; any sensory
/// feedback (chimes, pulses) is the collaborator's business.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteEvent {
    Placed {
        id: NoteId,
        position: Vec3,
        color: NoteColor,
    },
    Grabbed {
        id: NoteId,
    },
    Released {
        id: NoteId,
    },
    Deleted {
        id: NoteId,
    },
}

/// Receiver for note events, wired in at lifecycle construction.
pub trait FeedbackSink {
    fn on_note_event(&mut self, event: &NoteEvent);
}

/// Sink that drops every event; for shells without audio/haptics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn on_note_event(&mut self, _event: &NoteEvent) {}
}
