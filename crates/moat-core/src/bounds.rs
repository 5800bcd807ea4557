//! Inclusive bounding box accumulator.

use crate::point::Point;
use std::fmt;

/// Min/max accumulator over a stream of 2D points.
///
/// Both extremes are inclusive, so a box built from a single point has
/// `size_x() == size_y() == 1`. [`bind`](BoundingBox::bind) only ever
/// grows the box.
///
/// # Examples
///
/// ```
/// use moat_core::BoundingBox;
///
/// let mut bounds = BoundingBox::new(4, 4);
/// bounds.bind(1, 6);
/// bounds.bind(8, 5);
/// assert_eq!((bounds.size_x(), bounds.size_y()), (8, 3));
/// assert_eq!(bounds.max_size(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Smallest column (inclusive).
    pub min_x: i32,
    /// Smallest row (inclusive).
    pub min_y: i32,
    /// Largest column (inclusive).
    pub max_x: i32,
    /// Largest row (inclusive).
    pub max_y: i32,
}

impl BoundingBox {
    /// A box covering the single cell `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// A box with explicit corners.
    ///
    /// The corners are normalized so the min/max invariant always holds.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// The smallest box containing every point, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first.x, first.y);
        for p in iter {
            bounds.bind(p.x, p.y);
        }
        Some(bounds)
    }

    /// Extend the box so it includes `(x, y)`.
    pub fn bind(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Number of columns covered.
    pub fn size_x(&self) -> u32 {
        self.max_x.abs_diff(self.min_x).saturating_add(1)
    }

    /// Number of rows covered.
    pub fn size_y(&self) -> u32 {
        self.max_y.abs_diff(self.min_y).saturating_add(1)
    }

    /// The longer side.
    pub fn max_size(&self) -> u32 {
        self.size_x().max(self.size_y())
    }

    /// Returns `true` if `point` lies inside the box (edges included).
    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Returns `true` if `point` lies inside the box and off its perimeter.
    pub fn strictly_contains(&self, point: Point) -> bool {
        point.x > self.min_x && point.x < self.max_x && point.y > self.min_y && point.y < self.max_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
