//! Parsing and rendering of ASCII-art grids.

use indexmap::IndexSet;
use moat_core::{BoundingBox, Point};
use moat_grid::{trace_path, TraceError};

pub const PATH: char = 'x';
pub const INTERIOR: char = '-';
pub const EXTERIOR: char = '.';

/// A drawn grid: the traced boundary and the interior it should enclose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// Boundary cells in walk order, starting beside the top-left corner.
    pub path: Vec<Point>,
    /// Cells drawn as interior, sorted by `(y, x)`.
    pub interior: Vec<Point>,
    /// The whole drawing, `(0, 0)` to `(width - 1, height - 1)`.
    pub bounding_box: BoundingBox,
}

impl Fixture {
    /// Parse a drawing whose boundary is a valid loop.
    ///
    /// Panics on unknown characters, ragged rows, or a boundary that
    /// does not trace.
    pub fn parse(art: &str) -> Self {
        Self::try_parse(art).unwrap_or_else(|e| panic!("fixture boundary does not trace: {e}"))
    }

    /// Parse a drawing, reporting a boundary that does not trace.
    ///
    /// Panics on unknown characters or ragged rows.
    pub fn try_parse(art: &str) -> Result<Self, TraceError> {
        let (cells, bounding_box) = cells(art);
        let mut solid = IndexSet::new();
        let mut interior = Vec::new();
        for (point, c) in cells {
            match c {
                PATH => {
                    solid.insert(point);
                }
                INTERIOR => interior.push(point),
                _ => {}
            }
        }
        // Row-major scan, so the first solid cell is the top-left corner.
        let start = *solid.first().expect("fixture has no boundary cells");
        let traced = trace_path(&solid, start, u32::MAX)?;
        Ok(Self {
            path: traced.path,
            interior,
            bounding_box,
        })
    }

    /// Redraw this fixture with `interior` in place of the drawn one.
    pub fn render_with(&self, interior: &[Point]) -> String {
        render(self.bounding_box, &self.path, interior)
    }
}

/// Every cell of a drawing in row-major order, with the drawing's box.
fn cells(art: &str) -> (Vec<(Point, char)>, BoundingBox) {
    let rows: Vec<Vec<char>> = normalize(art)
        .lines()
        .map(|line| line.split_whitespace().flat_map(str::chars).collect())
        .collect();
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, Vec::len) as i32;
    assert!(height > 0 && width > 0, "fixture is empty");

    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as i32, width, "fixture row {y} is ragged");
        for (x, &c) in row.iter().enumerate() {
            assert!(
                matches!(c, PATH | INTERIOR | EXTERIOR),
                "invalid char {c:?} in fixture"
            );
            cells.push((Point::new(x as i32, y as i32), c));
        }
    }
    let bounds = BoundingBox::from_corners(Point::new(0, 0), Point::new(width - 1, height - 1));
    (cells, bounds)
}

/// Draw `path` and `interior` over `bounds`, one row per line.
pub fn render(bounds: BoundingBox, path: &[Point], interior: &[Point]) -> String {
    let path: IndexSet<Point> = path.iter().copied().collect();
    let interior: IndexSet<Point> = interior.iter().copied().collect();
    (bounds.min_y..=bounds.max_y)
        .map(|y| {
            (bounds.min_x..=bounds.max_x)
                .map(|x| {
                    let p = Point::new(x, y);
                    if path.contains(&p) {
                        PATH
                    } else if interior.contains(&p) {
                        INTERIOR
                    } else {
                        EXTERIOR
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip indentation and blank lines so drawings compare by content.
pub fn normalize(art: &str) -> String {
    art.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
