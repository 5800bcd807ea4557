//! Core types for the Moat polygon-interior workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid [`Point`], the inclusive [`BoundingBox`] accumulator, and the
//! [`PolygonError`] taxonomy shared by every resolver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod point;

pub use bounds::BoundingBox;
pub use error::{MalformedKind, PolygonError};
pub use point::Point;

/// Shortest closed loop that can enclose a cell: the 3x3 ring.
pub const MIN_PATH_LEN: usize = 8;
