//! Span flood fill from a single interior seed.
//!
//! Every boundary cell is flagged up front, turning the path into a
//! wall. The fill then works in whole row spans: a seed is crawled to
//! the top-left corner of its pocket, widened to its full span, and the
//! rows above and below are scanned across that span for new seeds.
//! Pending seeds live on an explicit stack, so pathological shapes cannot
//! exhaust the call stack.

use moat_core::{MalformedKind, Point, PolygonError};
use moat_grid::{CellGrid, GridFrame, PathBoundaryClassifier};

use crate::extract::InteriorExtractor;
use crate::resolver::Resolve;

/// The span flood-fill resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanFill;

impl Resolve for SpanFill {
    fn name(&self) -> &'static str {
        "span-fill"
    }

    fn resolve(
        &self,
        frame: &GridFrame,
        classifier: &PathBoundaryClassifier,
    ) -> Result<Vec<Point>, PolygonError> {
        let mut fill = Fill::new(*frame, classifier);
        let seed = fill.seed(classifier)?;
        log::trace!("span fill seeded at local {seed}");
        fill.run(seed)?;
        Ok(InteriorExtractor::new(frame).extract_filled(fill.filled))
    }
}

/// Scratch state for one fill pass.
struct Fill {
    frame: GridFrame,
    flagged: CellGrid<bool>,
    filled: Vec<Point>,
}

impl Fill {
    fn new(frame: GridFrame, classifier: &PathBoundaryClassifier) -> Self {
        let mut flagged = CellGrid::new(frame, false);
        for cell in classifier.cells() {
            flagged.set(cell.x, cell.y, true);
        }
        Self {
            frame,
            flagged,
            filled: Vec::new(),
        }
    }

    /// Out-of-range cells count as flagged.
    fn is_open(&self, x: i32, y: i32) -> bool {
        self.flagged.get(x, y).is_some_and(|f| !f)
    }

    /// Pick the first interior cell.
    ///
    /// The canonical seed sits just below the topmost boundary cell of
    /// the column right of the leftmost boundary column. When the path
    /// turns down there, that cell is wall; the cell diagonally
    /// below-right of the top-left boundary corner is tried instead.
    fn seed(&self, classifier: &PathBoundaryClassifier) -> Result<Point, PolygonError> {
        let column_seed = classifier.leftmost_column().and_then(|left| {
            let x = left + 1;
            classifier.topmost_in_column(x).map(|top| Point::new(x, top + 1))
        });
        let corner = classifier.first_cell();
        let corner_seed = corner.map(|c| c.offset(1, 1));

        column_seed
            .into_iter()
            .chain(corner_seed)
            .find(|p| self.is_open(p.x, p.y))
            .ok_or_else(|| {
                let at = corner.unwrap_or(Point::new(0, 0));
                PolygonError::malformed(
                    MalformedKind::NoInteriorSeed,
                    self.frame.to_world(at.x, at.y),
                )
            })
    }

    /// Relocate a seed to the topmost-then-leftmost open cell it can
    /// reach by moving up and left.
    fn crawl(&self, mut at: Point) -> Point {
        loop {
            if self.is_open(at.x, at.y - 1) {
                at.y -= 1;
            } else if self.is_open(at.x - 1, at.y) {
                at.x -= 1;
            } else {
                return at;
            }
        }
    }

    fn run(&mut self, seed: Point) -> Result<(), PolygonError> {
        let mut stack = vec![seed];
        while let Some(seed) = stack.pop() {
            if !self.is_open(seed.x, seed.y) {
                continue;
            }
            let Point { x, y } = self.crawl(seed);

            let mut lo = x;
            while self.is_open(lo - 1, y) {
                lo -= 1;
            }
            let mut hi = x;
            while self.is_open(hi + 1, y) {
                hi += 1;
            }

            for cx in lo..=hi {
                if self.frame.on_perimeter(cx, y) {
                    return Err(PolygonError::malformed(
                        MalformedKind::InteriorLeak,
                        self.frame.to_world(cx, y),
                    ));
                }
                self.flagged.set(cx, y, true);
                self.filled.push(Point::new(cx, y));
            }

            for ny in [y - 1, y + 1] {
                self.push_sub_spans(&mut stack, lo, hi, ny);
            }
        }
        Ok(())
    }

    /// Push one seed per open run of row `y` within `[lo, hi]`.
    ///
    /// Runs that continue past either end are picked up when the seed
    /// is widened on its own row.
    fn push_sub_spans(&self, stack: &mut Vec<Point>, lo: i32, hi: i32, y: i32) {
        let mut in_run = false;
        for x in lo..=hi {
            let open = self.is_open(x, y);
            if open && !in_run {
                log::trace!("span fill queued seed at local ({x}, {y})");
                stack.push(Point::new(x, y));
            }
            in_run = open;
        }
    }
}
