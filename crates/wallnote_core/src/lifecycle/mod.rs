//! Note lifecycle: creation, mutation, deletion, grab edges.
//!
//! # Responsibility
//! - Own the set of live note entities and their raycast proxies.
//! - Emit discrete feedback events for the haptics/audio collaborator.
//!
//! # Invariants
//! - Mutating or deleting a dead note id is a logged no-op, never a
//!   panic; asynchronous UI callbacks may race a deletion.
//! - Deleting a note removes its render identity and its raycast proxy
//!   atomically within the same call.

pub mod events;
pub mod manager;
