//! Frame-loop driver for the placement engine.
//!
//! # Responsibility
//! - Run one synchronous `tick` per rendered frame in a fixed order:
//!   apply queued surface events, finalize pending notes, raycast per
//!   hand, evaluate the gate, perform lifecycle actions.
//!
//! # Invariants
//! - All shared state is mutated only inside `tick` (single-writer).
//! - The cached per-hand intersection is never cleared at the top of a
//!   tick; it is only overwritten by that tick's raycast result.

pub mod engine;
pub mod input;
