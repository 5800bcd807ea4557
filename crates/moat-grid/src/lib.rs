//! Grid addressing and boundary classification for Moat.
//!
//! A polygon boundary arrives in world coordinates. This crate maps it
//! into the zero-based local frame of its bounding box, stores per-cell
//! state in flat row-major arrays, and answers "is this cell on the
//! boundary?" for the resolvers in `moat-resolve`.
//!
//! # Components
//!
//! - [`GridFrame`]: world ↔ local coordinate mapping for one bounding box
//! - [`CellGrid`]: dense `y * size_x + x` storage over a frame
//! - [`PathBoundaryClassifier`]: validated boundary membership lookup
//! - [`trace_path`]: walks a [`CellSource`] to discover an ordered path

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod grid;
pub mod trace;

pub use classify::{Links, PathBoundaryClassifier};
pub use error::TraceError;
pub use grid::{CellGrid, GridFrame, MAX_FRAME_EXTENT};
pub use trace::{trace_path, CellSource, Direction, TracedPath};
