//! Moat: interior resolution for closed boundary paths on integer grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Moat sub-crates. For most users, adding `moat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use moat::prelude::*;
//! use std::collections::HashSet;
//!
//! // The walls of a 4x3 room, in no particular order.
//! let walls: HashSet<Point> = [
//!     (0, 0), (1, 0), (2, 0), (3, 0),
//!     (0, 1), (3, 1),
//!     (0, 2), (1, 2), (2, 2), (3, 2),
//! ]
//! .into_iter()
//! .map(Point::from)
//! .collect();
//!
//! let traced = trace_path(&walls, Point::new(0, 1), 100).unwrap();
//! let room = PolygonData::try_from(traced).unwrap();
//! assert_eq!(
//!     room.interior_points().unwrap(),
//!     &[Point::new(1, 1), Point::new(2, 1)]
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `moat-core` | `Point`, `BoundingBox`, `PolygonError` |
//! | [`grid`] | `moat-grid` | Local frames, boundary classification, path tracing |
//! | [`resolve`] | `moat-resolve` | Resolvers, `PolygonData`, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value and error types (`moat-core`).
pub use moat_core as types;

/// Grid addressing, boundary classification and path tracing (`moat-grid`).
///
/// [`grid::trace_path`] turns an unordered set of wall cells into the
/// ordered loop the resolvers expect.
pub use moat_grid as grid;

/// Interior resolvers and the cached [`resolve::PolygonData`] (`moat-resolve`).
///
/// Pick an algorithm through [`resolve::ResolverConfig`], or call
/// [`resolve::RayCast`] and [`resolve::SpanFill`] directly through the
/// [`resolve::Resolve`] trait.
pub use moat_resolve as resolve;

/// Common imports for typical Moat usage.
///
/// ```rust
/// use moat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use moat_core::{BoundingBox, MalformedKind, Point, PolygonError};

    // Path discovery
    pub use moat_grid::{trace_path, CellSource, TraceError, TracedPath};

    // Resolution
    pub use moat_resolve::{
        Algorithm, BuildError, ConfigError, PolygonData, Resolve, ResolverConfig,
    };
}
