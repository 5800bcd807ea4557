//! Boundary membership lookup and path validation.

use crate::grid::GridFrame;
use indexmap::{IndexMap, IndexSet};
use moat_core::{MalformedKind, Point, PolygonError};

/// Which of a cell's four axis neighbours are boundary cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Links {
    /// Neighbour at `y - 1`.
    pub north: bool,
    /// Neighbour at `y + 1`.
    pub south: bool,
    /// Neighbour at `x + 1`.
    pub east: bool,
    /// Neighbour at `x - 1`.
    pub west: bool,
}

impl Links {
    /// Number of linked neighbours.
    pub fn count(&self) -> u8 {
        self.north as u8 + self.south as u8 + self.east as u8 + self.west as u8
    }

    /// The path runs through the cell along a row (enters or leaves east/west).
    pub fn horizontal(&self) -> bool {
        self.east || self.west
    }

    /// The path runs through the cell along a column (enters or leaves north/south).
    pub fn vertical(&self) -> bool {
        self.north || self.south
    }
}

/// Answers "is local cell `(x, y)` on the boundary?" for one path.
///
/// Built once per resolution from the path normalized into the frame's
/// local coordinates. Internally a column → set-of-rows map, so
/// [`is_edge`](Self::is_edge) is an amortized O(1) membership test.
/// Read-only once built.
///
/// Construction validates the structural invariants every resolver
/// relies on: no duplicate cells, consecutive cells adjacent (the loop
/// closes), every cell linked to exactly two others, and no diagonal
/// self-contact.
#[derive(Clone, Debug)]
pub struct PathBoundaryClassifier {
    frame: GridFrame,
    columns: IndexMap<i32, IndexSet<i32>>,
    len: usize,
}

impl PathBoundaryClassifier {
    /// Build and validate the classifier for `path` inside `frame`.
    pub fn new(frame: GridFrame, path: &[Point]) -> Result<Self, PolygonError> {
        let mut columns: IndexMap<i32, IndexSet<i32>> = IndexMap::new();
        for &world in path {
            let local = frame.to_local(world).ok_or(PolygonError::OutOfBounds {
                point: world,
                bounds: frame.bounds(),
            })?;
            if !columns.entry(local.x).or_default().insert(local.y) {
                return Err(PolygonError::malformed(MalformedKind::DuplicatePoint, world));
            }
        }

        let classifier = Self {
            frame,
            columns,
            len: path.len(),
        };
        classifier.validate(path)?;
        Ok(classifier)
    }

    fn validate(&self, path: &[Point]) -> Result<(), PolygonError> {
        // Closing pair included: last -> first.
        let pairs = path.iter().zip(path.iter().cycle().skip(1));
        for (&a, &b) in pairs {
            if !a.is_adjacent(b) {
                return Err(PolygonError::malformed(MalformedKind::NotContiguous, b));
            }
        }

        for &world in path {
            let Some(local) = self.frame.to_local(world) else {
                continue;
            };
            let (x, y) = (local.x, local.y);
            let links = self.links(x, y);
            if links.count() != 2 {
                return Err(PolygonError::malformed(
                    MalformedKind::BadDegree {
                        neighbours: links.count(),
                    },
                    world,
                ));
            }
            // Two diagonal path cells must share a path neighbour, otherwise
            // the loop pinches and the interior splits.
            for (dx, dy) in [(1, 1), (-1, 1)] {
                if self.is_edge(x + dx, y + dy)
                    && !self.is_edge(x + dx, y)
                    && !self.is_edge(x, y + dy)
                {
                    return Err(PolygonError::malformed(MalformedKind::DiagonalTouch, world));
                }
            }
        }
        Ok(())
    }

    /// Number of boundary cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if local `(x, y)` is a boundary cell.
    ///
    /// Coordinates outside the frame, negative ones included, are never edges.
    pub fn is_edge(&self, x: i32, y: i32) -> bool {
        self.columns.get(&x).is_some_and(|rows| rows.contains(&y))
    }

    /// Which axis neighbours of local `(x, y)` are boundary cells.
    pub fn links(&self, x: i32, y: i32) -> Links {
        Links {
            north: self.is_edge(x, y - 1),
            south: self.is_edge(x, y + 1),
            east: self.is_edge(x + 1, y),
            west: self.is_edge(x - 1, y),
        }
    }

    /// Smallest local column holding a boundary cell.
    pub fn leftmost_column(&self) -> Option<i32> {
        self.columns.keys().copied().min()
    }

    /// Smallest boundary row in local column `x`.
    pub fn topmost_in_column(&self, x: i32) -> Option<i32> {
        self.columns.get(&x)?.iter().copied().min()
    }

    /// The first boundary cell in row-major order (topmost, then leftmost).
    pub fn first_cell(&self) -> Option<Point> {
        self.columns
            .iter()
            .flat_map(|(&x, rows)| rows.iter().map(move |&y| Point::new(x, y)))
            .min()
    }

    /// Iterate boundary cells in local coordinates, in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.columns
            .iter()
            .flat_map(|(&x, rows)| rows.iter().map(move |&y| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moat_core::BoundingBox;

    /// Ordered 3x3 ring starting at the top-left corner, offset by `(ox, oy)`.
    fn ring3(ox: i32, oy: i32) -> Vec<Point> {
        [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x + ox, y + oy))
        .collect()
    }

    fn build(path: &[Point]) -> Result<PathBoundaryClassifier, PolygonError> {
        let bounds = BoundingBox::from_points(path.iter().copied()).unwrap();
        PathBoundaryClassifier::new(GridFrame::new(bounds).unwrap(), path)
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn normalizes_into_local_frame() {
        let c = build(&ring3(40, -9)).unwrap();
        assert!(c.is_edge(0, 0));
        assert!(c.is_edge(2, 2));
        assert!(!c.is_edge(1, 1));
        assert!(!c.is_edge(-1, 0));
        assert!(!c.is_edge(40, -9));
        assert_eq!(c.len(), 8);
    }

    #[test]
    fn links_of_corner_and_wall() {
        let c = build(&ring3(0, 0)).unwrap();
        assert_eq!(
            c.links(0, 0),
            Links {
                north: false,
                south: true,
                east: true,
                west: false
            }
        );
        let wall = c.links(2, 1);
        assert!(wall.north && wall.south && !wall.horizontal());
        assert_eq!(c.links(1, 1).count(), 4);
    }

    #[test]
    fn extremal_queries() {
        let c = build(&ring3(5, 5)).unwrap();
        assert_eq!(c.leftmost_column(), Some(0));
        assert_eq!(c.topmost_in_column(1), Some(0));
        assert_eq!(c.topmost_in_column(7), None);
        assert_eq!(c.first_cell(), Some(Point::new(0, 0)));
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn rejects_out_of_bounds_point() {
        let path = ring3(0, 0);
        let bounds = BoundingBox::from_corners(Point::new(0, 0), Point::new(1, 2));
        let frame = GridFrame::new(bounds).unwrap();
        let err = PathBoundaryClassifier::new(frame, &path).unwrap_err();
        assert!(matches!(
            err,
            PolygonError::OutOfBounds { point, .. } if point == Point::new(2, 0)
        ));
    }

    #[test]
    fn rejects_duplicate_point() {
        let mut path = ring3(0, 0);
        path.push(Point::new(1, 0));
        let err = build(&path).unwrap_err();
        assert_eq!(
            err,
            PolygonError::malformed(MalformedKind::DuplicatePoint, Point::new(1, 0))
        );
    }

    #[test]
    fn rejects_unordered_path() {
        let mut path = ring3(0, 0);
        path.swap(1, 4);
        let err = build(&path).unwrap_err();
        assert!(matches!(
            err,
            PolygonError::MalformedPolygon {
                kind: MalformedKind::NotContiguous,
                ..
            }
        ));
    }

    #[test]
    fn rejects_cell_with_three_path_neighbours() {
        // The loop doubles back under its own top wall, so (1,0) touches
        // (0,0), (2,0) and (1,1).
        //  x x x x
        //  x x . x
        //  . x x x
        let path: Vec<Point> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (2, 2),
            (1, 2),
            (1, 1),
            (0, 1),
        ]
        .iter()
        .map(|&p| p.into())
        .collect();
        let err = build(&path).unwrap_err();
        assert!(matches!(
            err,
            PolygonError::MalformedPolygon {
                kind: MalformedKind::BadDegree { .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_diagonal_pinch() {
        // Two 3x3 lobes sharing one diagonal contact at (2,1)/(1,2).
        let path: Vec<Point> = [
            (1, 2),
            (0, 2),
            (0, 1),
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
        ]
        .iter()
        .map(|&p| p.into())
        .collect();
        let err = build(&path).unwrap_err();
        assert!(matches!(
            err,
            PolygonError::MalformedPolygon {
                kind: MalformedKind::DiagonalTouch,
                ..
            }
        ));
    }
}
