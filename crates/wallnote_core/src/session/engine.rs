//! The per-frame placement engine.

use crate::config::{ConfigError, PlacementConfig};
use crate::geometry::intersect::RayIntersector;
use crate::geometry::ray::Intersection;
use crate::lifecycle::events::FeedbackSink;
use crate::lifecycle::manager::NoteLifecycleManager;
use crate::model::note::NoteId;
use crate::placement::gate::{Hand, PlacementGate};
use crate::scene::registry::{SurfaceEvent, SurfaceRegistry};
use crate::session::input::FrameInput;
use log::warn;

/// What one tick did, for the surrounding shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Placements performed this tick, in hand order.
    pub placed: Vec<(Hand, NoteId)>,
    /// Whether each hand ended the tick with a cached surface
    /// intersection, indexed by `Hand::index()`.
    pub surface_hit: [bool; 2],
}

/// Single-threaded cooperative frame driver.
///
/// Owns every engine component and runs them in the fixed tick order;
/// nothing outside `tick` mutates shared state. Surface notifications
/// from other threads go through `submit_surface_event` and are applied
/// at the start of the next tick.
pub struct PlacementEngine {
    registry: SurfaceRegistry,
    intersector: RayIntersector,
    gate: PlacementGate,
    lifecycle: NoteLifecycleManager,
    queued_surface_events: Vec<SurfaceEvent>,
    /// Per-hand cached intersection. Deliberately never cleared at the
    /// top of a tick; a tick's raycast result overwrites it, a tick with
    /// no tracked ray leaves it alone. Avoids one-frame flicker on
    /// marginal queries.
    current: [Option<Intersection>; 2],
    now_ms: u64,
}

impl PlacementEngine {
    /// # Errors
    /// - `ConfigError` when `config` fails validation.
    pub fn new(config: PlacementConfig, sink: Box<dyn FeedbackSink>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: SurfaceRegistry::new(),
            intersector: RayIntersector::new(config.min_hit_distance),
            gate: PlacementGate::new(config.cooldown_ms),
            lifecycle: NoteLifecycleManager::new(&config, sink),
            queued_surface_events: Vec::new(),
            current: [None, None],
            now_ms: 0,
        })
    }

    /// Queues one scene-understanding notification for the next tick.
    /// Safe to call from outside the frame loop's own mutation window.
    pub fn submit_surface_event(&mut self, event: SurfaceEvent) {
        self.queued_surface_events.push(event);
    }

    /// Runs one frame: apply queued surface events, finalize pending
    /// notes, raycast per hand, evaluate the gate, place, sync grabs.
    pub fn tick(&mut self, input: FrameInput) -> TickReport {
        self.now_ms += input.delta_ms;

        for event in std::mem::take(&mut self.queued_surface_events) {
            self.registry.apply(event);
        }
        self.lifecycle.finalize_pending();

        // Candidate set for this tick: surfaces plus every live note's hit
        // proxy, rebuilt fresh so deletions take effect immediately.
        let proxies = self.lifecycle.raycast_proxies();
        for hand in Hand::BOTH {
            if let Some(ray) = &input.hand(hand).ray {
                self.current[hand.index()] =
                    self.intersector
                        .intersect(ray, self.registry.iter(), &proxies);
            }
        }

        let mut placed = Vec::new();
        for hand in Hand::BOTH {
            let sample = input.hand(hand);
            let request = self.gate.evaluate(
                hand,
                sample.pressed,
                sample.ray_busy,
                self.current[hand.index()].as_ref(),
                self.now_ms,
            );
            if let Some(request) = request {
                match self.lifecycle.place(request.point, request.normal, self.now_ms) {
                    Ok(id) => placed.push((hand, id)),
                    Err(err) => warn!(
                        "event=placement_failed module=session status=error hand={} reason={}",
                        hand.as_str(),
                        err
                    ),
                }
            }
        }

        self.lifecycle.sync_grab_states(&input.grabbed);

        TickReport {
            placed,
            surface_hit: [self.current[0].is_some(), self.current[1].is_some()],
        }
    }

    /// Session clock in ms, advanced by `tick`.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The cached intersection a hand would place against right now.
    pub fn current_intersection(&self, hand: Hand) -> Option<&Intersection> {
        self.current[hand.index()].as_ref()
    }

    pub fn registry(&self) -> &SurfaceRegistry {
        &self.registry
    }

    /// Lifecycle access for the UI command path (`set_color`, `delete`,
    /// proxy lookup); invoked synchronously between ticks.
    pub fn lifecycle(&self) -> &NoteLifecycleManager {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut NoteLifecycleManager {
        &mut self.lifecycle
    }
}
