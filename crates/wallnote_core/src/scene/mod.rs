//! Scene-understanding bookkeeping.
//!
//! # Responsibility
//! - Track the live set of platform-reported surfaces and their semantic
//!   metadata. Pure membership management, no geometry computation.
//!
//! # Invariants
//! - All mutation happens on the frame loop; external surface
//!   notifications are queued as `SurfaceEvent`s and applied at the start
//!   of a tick.

pub mod registry;
