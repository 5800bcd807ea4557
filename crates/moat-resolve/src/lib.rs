//! Interior resolution for closed grid paths.
//!
//! Given an ordered loop of boundary cells, computes every cell strictly
//! enclosed by it. Two algorithms implement the [`Resolve`] trait and
//! return identical results for every valid path:
//!
//! - [`RayCast`]: row parity sweep, memoized in a tri-state grid, with a
//!   column sweep for cells whose row ray runs along a wall
//! - [`SpanFill`]: span flood fill from one interior seed
//!
//! [`PolygonData`] ties a path to its bounding box and caches the result
//! of the configured algorithm.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod flood;
pub mod polygon;
pub mod raycast;
pub mod resolver;

pub use config::{Algorithm, ConfigError, ResolverConfig};
pub use error::BuildError;
pub use extract::InteriorExtractor;
pub use flood::SpanFill;
pub use polygon::PolygonData;
pub use raycast::{CellState, RayCast};
pub use resolver::Resolve;
