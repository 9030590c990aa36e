//! Placement engine configuration.
//!
//! # Responsibility
//! - Collect every tunable the engine needs into one explicit struct.
//! - Validate values once, at engine construction, so the per-tick path
//!   never has to re-check them.
//!
//! # Invariants
//! - A `PlacementConfig` held by a running engine has passed `validate()`.
//! - Defaults reproduce the shipped interaction feel (500 ms cooldown,
//!   5 mm surface offset, 0.2 m note face).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunables for raycasting, gating and note creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum time between two placements by the same hand, in ms.
    pub cooldown_ms: u64,
    /// Offset of a note's anchor along the surface normal, in meters.
    /// Keeps the card from z-fighting with the surface it sits on.
    pub surface_offset: f32,
    /// `|normal . forward|` above which the orientation solver takes the
    /// degenerate near-parallel branch instead of the shortest-arc formula.
    pub parallel_threshold: f32,
    /// Half of a note face's edge length, in meters. The raycast hit proxy
    /// for a placed note is a square quad of this half-extent.
    pub note_half_extent: f32,
    /// Hits closer than this along the ray are discarded, so a ray starting
    /// on a surface does not immediately re-hit it.
    pub min_hit_distance: f32,
    /// Text a freshly placed note starts with.
    pub default_content: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 500,
            surface_offset: 0.005,
            parallel_threshold: 0.9999,
            note_half_extent: 0.1,
            min_hit_distance: 1e-4,
            default_content: "New Note".to_string(),
        }
    }
}

impl PlacementConfig {
    /// Checks every field against its allowed range.
    ///
    /// # Errors
    /// - Returns the first offending field as a `ConfigError`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.surface_offset.is_finite() || self.surface_offset <= 0.0 {
            return Err(ConfigError::InvalidSurfaceOffset(self.surface_offset));
        }
        if !self.parallel_threshold.is_finite()
            || self.parallel_threshold <= 0.0
            || self.parallel_threshold > 1.0
        {
            return Err(ConfigError::InvalidParallelThreshold(
                self.parallel_threshold,
            ));
        }
        if !self.note_half_extent.is_finite() || self.note_half_extent <= 0.0 {
            return Err(ConfigError::InvalidNoteHalfExtent(self.note_half_extent));
        }
        if !self.min_hit_distance.is_finite() || self.min_hit_distance < 0.0 {
            return Err(ConfigError::InvalidMinHitDistance(self.min_hit_distance));
        }
        Ok(())
    }
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `surface_offset` must be finite and strictly positive.
    InvalidSurfaceOffset(f32),
    /// `parallel_threshold` must lie in `(0, 1]`.
    InvalidParallelThreshold(f32),
    /// `note_half_extent` must be finite and strictly positive.
    InvalidNoteHalfExtent(f32),
    /// `min_hit_distance` must be finite and non-negative.
    InvalidMinHitDistance(f32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSurfaceOffset(value) => {
                write!(f, "surface_offset must be finite and > 0, got {value}")
            }
            Self::InvalidParallelThreshold(value) => {
                write!(f, "parallel_threshold must be in (0, 1], got {value}")
            }
            Self::InvalidNoteHalfExtent(value) => {
                write!(f, "note_half_extent must be finite and > 0, got {value}")
            }
            Self::InvalidMinHitDistance(value) => {
                write!(f, "min_hit_distance must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
