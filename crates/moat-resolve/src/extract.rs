//! Readout of resolved cells into sorted world coordinates.

use moat_core::{MalformedKind, Point, PolygonError};
use moat_grid::{CellGrid, GridFrame};

use crate::raycast::CellState;

/// Translates a resolver's local result into the public point list.
///
/// Output is always in world coordinates and sorted by `(y, x)`, so the
/// two algorithms produce directly comparable results.
#[derive(Clone, Copy, Debug)]
pub struct InteriorExtractor<'a> {
    frame: &'a GridFrame,
}

impl<'a> InteriorExtractor<'a> {
    /// An extractor for cells of `frame`.
    pub fn new(frame: &'a GridFrame) -> Self {
        Self { frame }
    }

    /// Collect every resolved, inside, non-boundary cell of a sweep grid.
    ///
    /// # Errors
    ///
    /// A cell still [`CellState::Unresolved`] means the sweep did not
    /// finish; it is reported as [`MalformedKind::UnresolvedCell`].
    pub fn extract_resolved(&self, grid: &CellGrid<CellState>) -> Result<Vec<Point>, PolygonError> {
        let mut interior = Vec::new();
        // Row-major iteration already yields (y, x) order.
        for (x, y, state) in grid.iter() {
            match state {
                CellState::Unresolved => {
                    return Err(PolygonError::malformed(
                        MalformedKind::UnresolvedCell,
                        self.frame.to_world(x, y),
                    ));
                }
                s if s.is_interior() => interior.push(self.frame.to_world(x, y)),
                _ => {}
            }
        }
        Ok(interior)
    }

    /// Translate and sort a set of filled local cells.
    pub fn extract_filled<I>(&self, filled: I) -> Vec<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut interior: Vec<Point> = filled
            .into_iter()
            .map(|p| self.frame.to_world(p.x, p.y))
            .collect();
        interior.sort_unstable();
        interior
    }
}
