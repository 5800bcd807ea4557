//! Local grid addressing over a bounding box.

use moat_core::{BoundingBox, Point, PolygonError};

/// Longest side a frame can address with `i32` local coordinates.
pub const MAX_FRAME_EXTENT: u32 = i32::MAX as u32;

/// The local coordinate frame of one bounding box.
///
/// Local cell `(0, 0)` is the box's `(min_x, min_y)` corner. Local
/// coordinates are `i32` so neighbour probes one step outside the frame
/// (`x - 1` at column 0) stay representable; they are simply reported as
/// out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridFrame {
    bounds: BoundingBox,
    size_x: i32,
    size_y: i32,
}

impl GridFrame {
    /// Create the frame for `bounds`.
    ///
    /// # Errors
    ///
    /// [`PolygonError::TooLarge`] if a side exceeds [`MAX_FRAME_EXTENT`]
    /// or the cell count does not fit in `usize`.
    pub fn new(bounds: BoundingBox) -> Result<Self, PolygonError> {
        let too_large = || PolygonError::TooLarge {
            extent: bounds.max_size(),
            max: MAX_FRAME_EXTENT,
        };
        let size_x = i32::try_from(bounds.size_x()).map_err(|_| too_large())?;
        let size_y = i32::try_from(bounds.size_y()).map_err(|_| too_large())?;
        (size_x as usize)
            .checked_mul(size_y as usize)
            .ok_or_else(too_large)?;
        Ok(Self {
            bounds,
            size_x,
            size_y,
        })
    }

    /// The world-space box this frame covers.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of local columns.
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    /// Number of local rows.
    pub fn size_y(&self) -> i32 {
        self.size_y
    }

    /// Total number of cells. Checked against overflow at construction.
    pub fn cell_count(&self) -> usize {
        (self.size_x as usize) * (self.size_y as usize)
    }

    /// Returns `true` if local `(x, y)` addresses a cell of this frame.
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.size_x && y < self.size_y
    }

    /// Returns `true` if local `(x, y)` lies on the outermost ring of cells.
    pub fn on_perimeter(&self, x: i32, y: i32) -> bool {
        self.in_range(x, y) && (x == 0 || y == 0 || x == self.size_x - 1 || y == self.size_y - 1)
    }

    /// Normalize a world point into local coordinates.
    ///
    /// Returns `None` if the point lies outside the box.
    pub fn to_local(&self, world: Point) -> Option<Point> {
        if !self.bounds.contains(world) {
            return None;
        }
        Some(Point::new(
            world.x.wrapping_sub(self.bounds.min_x),
            world.y.wrapping_sub(self.bounds.min_y),
        ))
    }

    /// Translate local `(x, y)` back to world coordinates.
    pub fn to_world(&self, x: i32, y: i32) -> Point {
        Point::new(
            self.bounds.min_x.wrapping_add(x),
            self.bounds.min_y.wrapping_add(y),
        )
    }

    /// Flat row-major offset of local `(x, y)`, or `None` when out of range.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_range(x, y) {
            return None;
        }
        Some((y as usize) * (self.size_x as usize) + (x as usize))
    }
}

/// Dense per-cell storage over a [`GridFrame`], one `T` per cell.
///
/// Cells live in a single `Vec` indexed `y * size_x + x`; there is no
/// per-cell allocation. Reads outside the frame return `None` and writes
/// outside the frame are rejected with `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid<T> {
    frame: GridFrame,
    cells: Vec<T>,
}

impl<T: Clone> CellGrid<T> {
    /// Allocate a grid with every cell set to `fill`.
    pub fn new(frame: GridFrame, fill: T) -> Self {
        Self {
            frame,
            cells: vec![fill; frame.cell_count()],
        }
    }
}

impl<T> CellGrid<T> {
    /// The cell at local `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.frame.index(x, y).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at local `(x, y)`. Returns `false` if out of range.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.frame.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate `(x, y, &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let size_x = self.frame.size_x().max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % size_x) as i32, (i / size_x) as i32, cell))
    }
}
