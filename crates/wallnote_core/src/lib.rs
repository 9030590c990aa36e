//! Surface placement engine for AR sticky notes.
//! This crate is the single source of truth for placement invariants:
//! which surfaces exist, where a hand ray lands, when a press becomes a
//! note, and how a note's face is aligned to the struck surface.

pub mod config;
pub mod geometry;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod placement;
pub mod scene;
pub mod session;

pub use config::{ConfigError, PlacementConfig};
pub use geometry::intersect::{NoteProxy, RayIntersector};
pub use geometry::orientation::OrientationSolver;
pub use geometry::ray::{Intersection, RayQuery};
pub use geometry::GeometryError;
pub use lifecycle::events::{FeedbackSink, NoteEvent, NullSink};
pub use lifecycle::manager::NoteLifecycleManager;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteColor, NoteId, ProxyId};
pub use model::surface::{Surface, SurfaceId, TriangleMesh};
pub use placement::gate::{GatePhase, Hand, PlacementGate, PlacementRequest};
pub use scene::registry::{SurfaceEvent, SurfaceRegistry};
pub use session::engine::{PlacementEngine, TickReport};
pub use session::input::{FrameInput, HandInput};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
