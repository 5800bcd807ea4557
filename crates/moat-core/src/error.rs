//! Error types for polygon resolution.
//!
//! Every failure is local and synchronous: the input is pure data, so
//! nothing here is retryable. Callers are expected to map these onto
//! their own user-facing messages.

use crate::bounds::BoundingBox;
use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Why a path failed its structural invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    /// A ray-casting fallback sweep finished without classifying the cell.
    UnresolvedCell,
    /// The flood fill could not find an interior cell to start from.
    NoInteriorSeed,
    /// The flood fill reached the bounding box perimeter, so the wall
    /// does not close.
    InteriorLeak,
    /// A boundary cell does not have exactly two boundary neighbours.
    BadDegree {
        /// Number of axis neighbours that are also on the path.
        neighbours: u8,
    },
    /// Two consecutive path points (or the last and first) are not adjacent.
    NotContiguous,
    /// The same cell appears twice on the path.
    DuplicatePoint,
    /// Two path cells touch diagonally without sharing a path neighbour.
    DiagonalTouch,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedCell => write!(f, "boundary cell could not be resolved"),
            Self::NoInteriorSeed => write!(f, "no interior seed"),
            Self::InteriorLeak => write!(f, "interior leaks to the bounding box edge"),
            Self::BadDegree { neighbours } => {
                write!(f, "boundary cell has {neighbours} path neighbours, expected 2")
            }
            Self::NotContiguous => write!(f, "consecutive path points are not adjacent"),
            Self::DuplicatePoint => write!(f, "path visits a cell twice"),
            Self::DiagonalTouch => write!(f, "path touches itself diagonally"),
        }
    }
}

/// Errors arising from polygon construction or resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The path violates a structural invariant. Fatal to this resolution.
    MalformedPolygon {
        /// Which invariant failed.
        kind: MalformedKind,
        /// The offending cell, in world coordinates.
        at: Point,
    },
    /// A path point lies outside the supplied bounding box.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// The box it was checked against.
        bounds: BoundingBox,
    },
    /// The path is shorter than the smallest valid loop.
    DegenerateInput {
        /// Number of points supplied.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// The bounding box exceeds the configured extent cap.
    TooLarge {
        /// The box's longer side.
        extent: u32,
        /// The configured cap.
        max: u32,
    },
}

impl PolygonError {
    /// Shorthand for a [`PolygonError::MalformedPolygon`].
    pub fn malformed(kind: MalformedKind, at: Point) -> Self {
        Self::MalformedPolygon { kind, at }
    }

    /// Returns `true` for [`PolygonError::MalformedPolygon`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPolygon { .. })
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPolygon { kind, at } => {
                write!(f, "malformed polygon at {at}: {kind}")
            }
            Self::OutOfBounds { point, bounds } => {
                write!(f, "path point {point} out of bounds: {bounds}")
            }
            Self::DegenerateInput { len, min } => {
                write!(f, "path has {len} points; at least {min} required")
            }
            Self::TooLarge { extent, max } => {
                write!(f, "polygon extent {extent} exceeds maximum {max}")
            }
        }
    }
}

impl Error for PolygonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_cell() {
        let err = PolygonError::malformed(MalformedKind::NoInteriorSeed, Point::new(3, -1));
        assert_eq!(err.to_string(), "malformed polygon at (3, -1): no interior seed");
        assert!(err.is_malformed());
    }

    #[test]
    fn degree_display_reports_count() {
        let err = PolygonError::malformed(
            MalformedKind::BadDegree { neighbours: 3 },
            Point::new(0, 0),
        );
        assert!(err.to_string().contains("3 path neighbours"));
    }

    #[test]
    fn degenerate_is_not_malformed() {
        let err = PolygonError::DegenerateInput { len: 4, min: 8 };
        assert!(!err.is_malformed());
        assert_eq!(err.to_string(), "path has 4 points; at least 8 required");
    }
}
