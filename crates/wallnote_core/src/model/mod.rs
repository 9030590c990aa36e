//! Domain model for placement targets and placed notes.
//!
//! # Responsibility
//! - Define the canonical surface and note records shared by every
//!   engine component.
//!
//! # Invariants
//! - Every surface and note is identified by a stable UUID that is never
//!   reused within a session.
//! - A note is raycastable from the moment it exists; visual readiness is
//!   tracked separately and lags by at most one tick.

pub mod note;
pub mod surface;
