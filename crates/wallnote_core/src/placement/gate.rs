//! Per-hand placement state machine.

use crate::geometry::ray::Intersection;
use glam::Vec3;
use log::debug;

/// Which controller/hand an input sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

/// Gate phase for one hand.
///
/// The phase tracks the press lifecycle; the actual re-placement throttle
/// is the timestamp, so `Cooling -> Idle` happens immediately on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// No active press.
    Idle,
    /// Pressed, but no placement came of it (guard failed or still held).
    Pressed,
    /// Pressed and a placement fired; waiting for release.
    Cooling,
}

#[derive(Debug, Clone, Copy)]
struct HandState {
    phase: GatePhase,
    was_pressed: bool,
    last_placement_ms: Option<u64>,
}

impl HandState {
    fn new() -> Self {
        Self {
            phase: GatePhase::Idle,
            was_pressed: false,
            last_placement_ms: None,
        }
    }
}

/// A placement the gate has approved: where the note goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub hand: Hand,
    pub point: Vec3,
    pub normal: Vec3,
}

/// Debounce/cooldown/grab-conflict state machine, one lane per hand.
#[derive(Debug)]
pub struct PlacementGate {
    cooldown_ms: u64,
    hands: [HandState; 2],
}

impl PlacementGate {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            hands: [HandState::new(), HandState::new()],
        }
    }

    /// Feeds one tick of input for one hand.
    ///
    /// Returns a `PlacementRequest` exactly when all guards pass: a fresh
    /// press edge, a non-busy hand, a surface-classified intersection, and
    /// an expired cooldown. Every failure is a silent, expected outcome.
    pub fn evaluate(
        &mut self,
        hand: Hand,
        pressed: bool,
        ray_busy: bool,
        intersection: Option<&Intersection>,
        now_ms: u64,
    ) -> Option<PlacementRequest> {
        let state = &mut self.hands[hand.index()];
        let press_edge = pressed && !state.was_pressed;
        state.was_pressed = pressed;

        if !pressed {
            state.phase = GatePhase::Idle;
            return None;
        }
        if !press_edge {
            // Held press: stay in whatever phase the edge resolved to.
            return None;
        }

        state.phase = GatePhase::Pressed;

        if ray_busy {
            debug!(
                "event=placement_suppressed module=placement status=ok hand={} reason=ray_busy",
                hand.as_str()
            );
            return None;
        }
        let Some(intersection) = intersection else {
            debug!(
                "event=placement_suppressed module=placement status=ok hand={} reason=no_surface",
                hand.as_str()
            );
            return None;
        };
        if let Some(last) = state.last_placement_ms {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed <= self.cooldown_ms {
                debug!(
                    "event=placement_suppressed module=placement status=ok hand={} reason=cooldown elapsed_ms={}",
                    hand.as_str(),
                    elapsed
                );
                return None;
            }
        }

        state.last_placement_ms = Some(now_ms);
        state.phase = GatePhase::Cooling;
        Some(PlacementRequest {
            hand,
            point: intersection.point,
            normal: intersection.normal,
        })
    }

    pub fn phase(&self, hand: Hand) -> GatePhase {
        self.hands[hand.index()].phase
    }

    pub fn last_placement_ms(&self, hand: Hand) -> Option<u64> {
        self.hands[hand.index()].last_placement_ms
    }
}
