//! The resolver trait shared by every interior algorithm.

use moat_core::{Point, PolygonError};
use moat_grid::{GridFrame, PathBoundaryClassifier};

/// An interior algorithm.
///
/// Given a validated boundary and the frame it lives in, a resolver
/// returns every cell strictly enclosed by the boundary, in world
/// coordinates, sorted by `(y, x)`. Path cells are never part of the
/// result, and every result lies strictly inside the frame's box.
///
/// Implementations are stateless; all per-resolution scratch space is
/// allocated inside [`resolve`](Self::resolve). `Send + Sync` lets a
/// `&'static dyn Resolve` be shared freely.
pub trait Resolve: Send + Sync {
    /// Short human-readable name, used in log lines.
    fn name(&self) -> &'static str;

    /// Compute the interior of `classifier`'s boundary.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::MalformedPolygon`] when the boundary does
    /// not enclose a well-formed interior.
    fn resolve(
        &self,
        frame: &GridFrame,
        classifier: &PathBoundaryClassifier,
    ) -> Result<Vec<Point>, PolygonError>;
}
