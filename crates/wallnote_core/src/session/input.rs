//! Per-tick input snapshot from the platform.

use crate::geometry::ray::RayQuery;
use crate::model::note::NoteId;
use crate::placement::gate::Hand;
use std::collections::BTreeSet;

/// One hand's input sample for a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandInput {
    /// World-space pointing ray; `None` when the hand is not tracked this
    /// tick.
    pub ray: Option<RayQuery>,
    /// Select/trigger held down.
    pub pressed: bool,
    /// The hand is mid-interaction with something else (grabbing a note);
    /// suppresses placement for this hand.
    pub ray_busy: bool,
}

/// Everything the engine consumes for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Wall-clock time advanced this tick, in ms.
    pub delta_ms: u64,
    /// Indexed by `Hand::index()`.
    pub hands: [HandInput; 2],
    /// Notes currently held, as reported by the grab/interaction
    /// subsystem. The engine only derives edges from this.
    pub grabbed: BTreeSet<NoteId>,
}

impl FrameInput {
    /// A tick where nothing happens but time passing.
    pub fn idle(delta_ms: u64) -> Self {
        Self {
            delta_ms,
            ..Self::default()
        }
    }

    pub fn hand(&self, hand: Hand) -> &HandInput {
        &self.hands[hand.index()]
    }

    pub fn hand_mut(&mut self, hand: Hand) -> &mut HandInput {
        &mut self.hands[hand.index()]
    }

    /// Builder-style helper for tests and shells.
    pub fn with_hand(mut self, hand: Hand, input: HandInput) -> Self {
        self.hands[hand.index()] = input;
        self
    }
}
