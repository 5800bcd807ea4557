//! Integer grid points.

use std::cmp::Ordering;
use std::fmt;

/// A cell on the discrete block grid.
///
/// Ordering is row-major: `y` is compared first, then `x`. Sorting a set
/// of points therefore yields the top-to-bottom, left-to-right order
/// used for every interior set returned by the resolvers.
///
/// # Examples
///
/// ```
/// use moat_core::Point;
///
/// let mut points = vec![Point::new(2, 1), Point::new(5, 0), Point::new(1, 1)];
/// points.sort();
/// assert_eq!(points, vec![Point::new(5, 0), Point::new(1, 1), Point::new(2, 1)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point shifted by `(dx, dy)`, or `None` if a coordinate overflows.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The four axis-aligned neighbours in north, south, east, west order.
    pub const fn neighbours(self) -> [Point; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(-1, 0),
        ]
    }

    /// Returns `true` if `other` is exactly one step away along an axis.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
