//! ASCII fixtures and shape builders for Moat development.
//!
//! Fixtures are drawn as space-separated grids, one character per cell:
//! `x` for a boundary cell, `-` for an expected interior cell and `.`
//! for everything else. [`Fixture::parse`] turns such a drawing into an
//! ordered path plus the expected interior; [`render`] draws a result
//! back the same way.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ascii;
pub mod shapes;

pub use ascii::{normalize, render, Fixture, EXTERIOR, INTERIOR, PATH};
pub use shapes::{column_outline, notched_interior_len, notched_ring, rect_ring};
