//! Path discovery: walk a set of solid cells into an ordered loop.
//!
//! A path is a closed loop of consecutive cells in which every cell has
//! exactly two solid axis neighbours, so the loop cannot cross or touch
//! itself. [`trace_path`] follows such a loop from a starting cell,
//! binding a [`BoundingBox`] as it goes and giving up once the box grows
//! past the caller's extent cap.

use crate::error::TraceError;
use indexmap::IndexSet;
use moat_core::{BoundingBox, Point, MIN_PATH_LEN};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Anything that can answer "is this cell solid?".
pub trait CellSource {
    /// Returns `true` if `point` holds a solid (path) cell.
    fn is_solid(&self, point: Point) -> bool;
}

impl CellSource for IndexSet<Point> {
    fn is_solid(&self, point: Point) -> bool {
        self.contains(&point)
    }
}

impl<S: BuildHasher> CellSource for HashSet<Point, S> {
    fn is_solid(&self, point: Point) -> bool {
        self.contains(&point)
    }
}

/// One of the four axis directions, in probe order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `y - 1`.
    North,
    /// `y + 1`.
    South,
    /// `x + 1`.
    East,
    /// `x - 1`.
    West,
}

impl Direction {
    /// All directions in the order the tracer probes them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The cell one step from `from` in this direction, or `None` past
    /// the edge of the `i32` plane.
    pub fn step(self, from: Point) -> Option<Point> {
        match self {
            Self::North => from.checked_offset(0, -1),
            Self::South => from.checked_offset(0, 1),
            Self::East => from.checked_offset(1, 0),
            Self::West => from.checked_offset(-1, 0),
        }
    }
}

/// An ordered closed loop and the box that bounds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracedPath {
    /// Loop cells in walk order; the start cell comes last.
    pub path: Vec<Point>,
    /// Inclusive bounds of every cell in `path`.
    pub bounding_box: BoundingBox,
}

/// Walk the loop that passes through `start`.
///
/// The start cell must have exactly two solid neighbours; the walk leaves
/// through the first one in [`Direction::ALL`] order. Every later cell
/// must have exactly one solid neighbour besides the one the walk came
/// from. The walk ends when it arrives back at `start`, which is appended
/// last.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use moat_core::Point;
/// use moat_grid::trace_path;
///
/// let ring: IndexSet<Point> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// let traced = trace_path(&ring, Point::new(1, 0), 100).unwrap();
/// assert_eq!(traced.path.len(), 8);
/// assert_eq!(traced.path.last(), Some(&Point::new(1, 0)));
/// assert_eq!(traced.bounding_box.max_size(), 3);
/// ```
pub fn trace_path<S>(source: &S, start: Point, max_extent: u32) -> Result<TracedPath, TraceError>
where
    S: CellSource + ?Sized,
{
    let first = onward(source, start, None);
    if first.len() != 2 {
        return Err(TraceError::NotOnPath {
            at: start,
            solid_neighbours: first.len(),
        });
    }

    let mut bounds = BoundingBox::new(start.x, start.y);
    let mut path = Vec::new();
    let (mut current, mut heading) = first[0];

    while current != start {
        bounds.bind(current.x, current.y);
        if bounds.max_size() > max_extent {
            return Err(TraceError::TooLarge {
                extent: bounds.max_size(),
                max: max_extent,
            });
        }
        path.push(current);

        let next = onward(source, current, Some(heading));
        if next.len() != 1 {
            return Err(TraceError::NotOnPath {
                at: current,
                solid_neighbours: next.len(),
            });
        }
        (current, heading) = next[0];
    }
    path.push(start);

    if path.len() < MIN_PATH_LEN {
        return Err(TraceError::TooShort {
            len: path.len(),
            min: MIN_PATH_LEN,
        });
    }

    log::debug!(
        "traced path of {} cells from {start} within {bounds}",
        path.len()
    );
    Ok(TracedPath {
        path,
        bounding_box: bounds,
    })
}

/// Solid neighbours of `at`, skipping the cell the walk arrived from.
fn onward<S>(source: &S, at: Point, heading: Option<Direction>) -> SmallVec<[(Point, Direction); 4]>
where
    S: CellSource + ?Sized,
{
    Direction::ALL
        .iter()
        .filter(|&&d| heading.map(Direction::opposite) != Some(d))
        .filter_map(|&d| d.step(at).map(|p| (p, d)))
        .filter(|&(p, _)| source.is_solid(p))
        .collect()
}
