//! Placement gating: when does a trigger press become a note?
//!
//! # Responsibility
//! - Decide, per hand and per tick, whether a press edge may place a
//!   note, applying grab-conflict suppression and a cooldown window.
//!
//! # Invariants
//! - Cooldowns are per hand; two hands place independently.
//! - A hand that is mid-grab (`ray_busy`) never places, regardless of
//!   cooldown state.

pub mod gate;
