//! Ordered boundary builders for generated tests and benchmarks.

use indexmap::IndexSet;
use moat_core::Point;
use moat_grid::trace_path;

/// Clockwise `w` x `h` rectangle ring with its top-left corner at `origin`.
///
/// Panics unless `w >= 3` and `h >= 3`.
pub fn rect_ring(origin: Point, w: i32, h: i32) -> Vec<Point> {
    assert!(w >= 3 && h >= 3, "ring must be at least 3x3, got {w}x{h}");
    let mut path = Vec::with_capacity((2 * (w + h) - 4) as usize);
    path.extend((0..w).map(|x| origin.offset(x, 0)));
    path.extend((1..h).map(|y| origin.offset(w - 1, y)));
    path.extend((0..w - 1).rev().map(|x| origin.offset(x, h - 1)));
    path.extend((1..h - 1).rev().map(|y| origin.offset(0, y)));
    path
}

/// Clockwise rectangle ring with a one-cell-wide notch cut down from the
/// top wall at column `notch_x`, `depth` rows deep.
///
/// ```text
/// x x x . x x x
/// x - x . x - x
/// x - x x x - x
/// x - - - - - x
/// x x x x x x x
/// ```
///
/// is `notched_ring(origin, 7, 5, 3, 2)`. Panics unless the notch walls
/// stay clear of the outer walls and leave a row of interior beneath.
pub fn notched_ring(origin: Point, w: i32, h: i32, notch_x: i32, depth: i32) -> Vec<Point> {
    assert!(
        notch_x >= 3 && notch_x <= w - 4,
        "notch column {notch_x} too close to the side walls of width {w}"
    );
    assert!(
        depth >= 1 && depth <= h - 3,
        "notch depth {depth} leaves no interior below it in height {h}"
    );
    let at = |x: i32, y: i32| origin.offset(x, y);
    let mut path = Vec::new();
    path.extend((0..notch_x).map(|x| at(x, 0)));
    path.extend((1..=depth).map(|y| at(notch_x - 1, y)));
    path.extend([at(notch_x, depth), at(notch_x + 1, depth)]);
    path.extend((0..depth).rev().map(|y| at(notch_x + 1, y)));
    path.extend((notch_x + 2..w).map(|x| at(x, 0)));
    path.extend((1..h).map(|y| at(w - 1, y)));
    path.extend((0..w - 1).rev().map(|x| at(x, h - 1)));
    path.extend((1..h - 1).rev().map(|y| at(0, y)));
    path
}

/// Interior cell count of [`notched_ring`] with the same dimensions.
pub fn notched_interior_len(w: i32, h: i32, depth: i32) -> usize {
    ((w - 2) * (h - 2) - 3 * depth) as usize
}

/// Outline of a column-convex polyomino drawn at double scale.
///
/// Column `c` of the polyomino fills rows `spans[c].0..=spans[c].1`.
/// Each polyomino cell becomes a 2x2 block whose shared corners lie on
/// even coordinates, and the outline runs along the block edges, so
/// every boundary cell keeps exactly two path neighbours. The returned
/// loop starts beside the top-left corner.
///
/// Panics unless every span is non-empty and neighbouring spans share at
/// least one row.
pub fn column_outline(origin: Point, spans: &[(i32, i32)]) -> Vec<Point> {
    assert!(!spans.is_empty(), "outline needs at least one column");
    assert!(
        spans.iter().all(|&(lo, hi)| lo <= hi),
        "empty column span in {spans:?}"
    );
    assert!(
        spans.windows(2).all(|w| w[0].0 <= w[1].1 && w[1].0 <= w[0].1),
        "neighbouring columns must share a row in {spans:?}"
    );

    let filled = |c: i32, r: i32| {
        usize::try_from(c)
            .ok()
            .and_then(|c| spans.get(c))
            .is_some_and(|&(lo, hi)| (lo..=hi).contains(&r))
    };

    let mut cells = IndexSet::new();
    for (c, &(lo, hi)) in spans.iter().enumerate() {
        let c = c as i32;
        for r in lo..=hi {
            let (x, y) = (2 * c, 2 * r);
            if !filled(c, r - 1) {
                cells.extend((0..3).map(|i| origin.offset(x + i, y)));
            }
            if !filled(c, r + 1) {
                cells.extend((0..3).map(|i| origin.offset(x + i, y + 2)));
            }
            if !filled(c - 1, r) {
                cells.extend((0..3).map(|i| origin.offset(x, y + i)));
            }
            if !filled(c + 1, r) {
                cells.extend((0..3).map(|i| origin.offset(x + 2, y + i)));
            }
        }
    }

    let start = *cells.iter().min().expect("outline has cells");
    trace_path(&cells, start, u32::MAX)
        .unwrap_or_else(|e| panic!("column outline does not trace: {e}"))
        .path
}
