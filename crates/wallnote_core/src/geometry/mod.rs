//! Continuous geometry: ray queries, intersection search, orientation.
//!
//! # Responsibility
//! - Resolve a hand ray against surface and note geometry every tick.
//! - Map a struck surface normal to a stable note orientation.
//!
//! # Invariants
//! - Returned intersection normals are unit length and face the ray's
//!   incoming side.
//! - No public operation produces NaN; degenerate inputs are rejected
//!   with `GeometryError` or resolved by an explicit branch.

pub mod intersect;
pub mod orientation;
pub mod ray;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Vectors shorter than this are treated as zero length.
pub(crate) const MIN_VECTOR_LENGTH: f32 = 1e-6;

/// Degenerate geometric input at a public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A ray direction of (near) zero length cannot be normalized.
    ZeroLengthDirection,
    /// A surface normal of (near) zero length has no orientation.
    ZeroLengthNormal,
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLengthDirection => write!(f, "ray direction has zero length"),
            Self::ZeroLengthNormal => write!(f, "surface normal has zero length"),
        }
    }
}

impl Error for GeometryError {}
