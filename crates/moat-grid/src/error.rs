//! Error types for path tracing.

use moat_core::Point;
use std::fmt;

/// Errors arising while walking a [`CellSource`](crate::CellSource) for a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// A cell on the walk does not continue in exactly one direction
    /// (or, for the start cell, exactly two).
    NotOnPath {
        /// The cell where the walk stopped.
        at: Point,
        /// Solid neighbours found, excluding the one the walk came from.
        solid_neighbours: usize,
    },
    /// The walk left the permitted extent before closing.
    TooLarge {
        /// Longer side of the box bound so far.
        extent: u32,
        /// The configured cap.
        max: u32,
    },
    /// The loop closed with fewer cells than the smallest valid polygon.
    TooShort {
        /// Number of cells in the loop.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnPath {
                at,
                solid_neighbours,
            } => {
                write!(f, "cell {at} is not on a path: {solid_neighbours} onward neighbours")
            }
            Self::TooLarge { extent, max } => {
                write!(f, "path extent {extent} exceeds maximum {max}")
            }
            Self::TooShort { len, min } => {
                write!(f, "path has {len} cells; at least {min} required")
            }
        }
    }
}

impl std::error::Error for TraceError {}
