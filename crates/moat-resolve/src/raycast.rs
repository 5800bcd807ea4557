//! Row/column parity sweep with perpendicular fallback.
//!
//! The boundary is treated as a polyline through the centres of its
//! cells, and every ray is cast a hair below (for rows) or a hair right
//! of (for columns) the centres it visits. A boundary cell's stored
//! `inside` flag is therefore the inside-ness of the region just
//! below-right of its centre, which is the same whichever way the cell
//! was reached. Row sweeps and column sweeps share one memo grid.
//!
//! A row ray crosses the boundary cleanly at a wall the path runs
//! straight down through. A boundary cell the path enters or leaves along
//! the row is aligned with the ray; it is resolved by sweeping its column
//! from the top of the box instead. The column ray crosses the boundary
//! exactly where the path leaves a cell to the right, so the column sweep
//! never needs a fallback of its own.

use moat_core::{MalformedKind, Point, PolygonError};
use moat_grid::{CellGrid, GridFrame, PathBoundaryClassifier};

use crate::extract::InteriorExtractor;
use crate::resolver::Resolve;

/// Deepest permitted chain of perpendicular fallbacks.
const MAX_FALLBACK_DEPTH: u8 = 1;

/// Per-cell classification written by the sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Not yet reached by any sweep.
    #[default]
    Unresolved,
    /// Classified. Written exactly once.
    Resolved {
        /// Parity of the region just below-right of the cell centre.
        inside: bool,
        /// The cell is on the boundary path.
        edge: bool,
    },
}

impl CellState {
    /// The `inside` flag, or `None` while unresolved.
    pub fn inside(self) -> Option<bool> {
        match self {
            Self::Unresolved => None,
            Self::Resolved { inside, .. } => Some(inside),
        }
    }

    /// Returns `true` for a resolved, non-boundary, inside cell.
    pub fn is_interior(self) -> bool {
        matches!(
            self,
            Self::Resolved {
                inside: true,
                edge: false
            }
        )
    }
}

/// The ray-casting resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayCast;

impl Resolve for RayCast {
    fn name(&self) -> &'static str {
        "ray-cast"
    }

    fn resolve(
        &self,
        frame: &GridFrame,
        classifier: &PathBoundaryClassifier,
    ) -> Result<Vec<Point>, PolygonError> {
        let mut sweep = Sweep::new(*frame, classifier);
        sweep.resolve_rows()?;
        log::trace!(
            "ray cast over {} cells took {} column fallbacks",
            frame.cell_count(),
            sweep.fallbacks
        );
        InteriorExtractor::new(frame).extract_resolved(&sweep.grid)
    }
}

/// Scratch state for one ray-casting pass.
struct Sweep<'a> {
    frame: GridFrame,
    classifier: &'a PathBoundaryClassifier,
    grid: CellGrid<CellState>,
    fallbacks: usize,
}

impl<'a> Sweep<'a> {
    fn new(frame: GridFrame, classifier: &'a PathBoundaryClassifier) -> Self {
        Self {
            frame,
            classifier,
            grid: CellGrid::new(frame, CellState::Unresolved),
            fallbacks: 0,
        }
    }

    fn state(&self, x: i32, y: i32) -> CellState {
        self.grid.get(x, y).copied().unwrap_or_default()
    }

    fn write(&mut self, x: i32, y: i32, inside: bool, edge: bool) {
        debug_assert_eq!(self.state(x, y), CellState::Unresolved);
        self.grid.set(x, y, CellState::Resolved { inside, edge });
    }

    fn unresolved(&self, x: i32, y: i32) -> PolygonError {
        PolygonError::malformed(MalformedKind::UnresolvedCell, self.frame.to_world(x, y))
    }

    /// Sweep every row top to bottom, left to right.
    fn resolve_rows(&mut self) -> Result<(), PolygonError> {
        for y in 0..self.frame.size_y() {
            // Rays enter from outside the box.
            let mut prev_inside = false;
            for x in 0..self.frame.size_x() {
                prev_inside = self.resolve_in_row(x, y, prev_inside)?;
            }
        }
        Ok(())
    }

    /// Classify `(x, y)` given the parity just left of it.
    fn resolve_in_row(&mut self, x: i32, y: i32, prev_inside: bool) -> Result<bool, PolygonError> {
        if let Some(inside) = self.state(x, y).inside() {
            return Ok(inside);
        }
        if !self.classifier.is_edge(x, y) {
            self.write(x, y, prev_inside, false);
            return Ok(prev_inside);
        }

        let links = self.classifier.links(x, y);
        if !links.horizontal() {
            let inside = !prev_inside;
            self.write(x, y, inside, true);
            return Ok(inside);
        }

        log::trace!("row ray aligned with boundary at local ({x}, {y}); sweeping column");
        self.fallbacks += 1;
        self.resolve_col(x, y, 1)?;
        self.state(x, y)
            .inside()
            .ok_or_else(|| self.unresolved(x, y))
    }

    /// Sweep column `x` from the top of the box down to `target_y`.
    fn resolve_col(&mut self, x: i32, target_y: i32, depth: u8) -> Result<(), PolygonError> {
        if depth > MAX_FALLBACK_DEPTH {
            return Err(self.unresolved(x, target_y));
        }
        let mut prev_inside = false;
        for y in 0..=target_y {
            prev_inside = match self.state(x, y).inside() {
                Some(inside) => inside,
                None => {
                    let edge = self.classifier.is_edge(x, y);
                    let inside = if edge {
                        prev_inside ^ self.classifier.links(x, y).east
                    } else {
                        prev_inside
                    };
                    self.write(x, y, inside, edge);
                    inside
                }
            };
        }
        Ok(())
    }
}
