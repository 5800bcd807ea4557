use std::collections::HashSet;

use moat_core::{BoundingBox, Point};
use moat_grid::{GridFrame, PathBoundaryClassifier};
use moat_resolve::{Algorithm, PolygonData, RayCast, Resolve, SpanFill};
use moat_test_utils::{column_outline, notched_interior_len, notched_ring, rect_ring};
use proptest::prelude::*;

/// Resolve `path` with both algorithms and check the shared contract.
fn resolve_both(path: Vec<Point>) -> Result<Vec<Point>, TestCaseError> {
    let bounds = BoundingBox::from_points(path.iter().copied()).unwrap();
    let frame = GridFrame::new(bounds).unwrap();
    let classifier = PathBoundaryClassifier::new(frame, &path).unwrap();

    let ray = RayCast.resolve(&frame, &classifier).unwrap();
    let fill = SpanFill.resolve(&frame, &classifier).unwrap();
    prop_assert_eq!(&ray, &fill);

    let on_path: HashSet<Point> = path.iter().copied().collect();
    for p in &ray {
        prop_assert!(!on_path.contains(p), "interior point {} is on the path", p);
        prop_assert!(bounds.strictly_contains(*p), "{} not strictly inside {}", p, bounds);
    }
    prop_assert!(ray.windows(2).all(|w| w[0] < w[1]), "output not sorted by (y, x)");
    Ok(ray)
}

/// Cells of the box around `path` that no 4-connected walk from the box
/// edge reaches without crossing the path, sorted by `(y, x)`.
fn enclosed_by_flood(path: &[Point]) -> Vec<Point> {
    let bounds = BoundingBox::from_points(path.iter().copied()).unwrap();
    let wall: HashSet<Point> = path.iter().copied().collect();
    let cells: Vec<Point> = (bounds.min_y..=bounds.max_y)
        .flat_map(|y| (bounds.min_x..=bounds.max_x).map(move |x| Point::new(x, y)))
        .collect();

    let mut outside = HashSet::new();
    let mut stack: Vec<Point> = cells
        .iter()
        .copied()
        .filter(|p| !bounds.strictly_contains(*p))
        .collect();
    while let Some(p) = stack.pop() {
        if !bounds.contains(p) || wall.contains(&p) || !outside.insert(p) {
            continue;
        }
        stack.extend(p.neighbours());
    }

    cells
        .into_iter()
        .filter(|p| !wall.contains(p) && !outside.contains(p))
        .collect()
}

/// Column spans where each column shares at least one row with the last.
fn column_spans() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..6, 0i32..6), 1..8).prop_map(|raw| {
        let mut spans: Vec<(i32, i32)> = Vec::with_capacity(raw.len());
        for (a, b) in raw {
            let (mut lo, mut hi) = (a.min(b), a.max(b));
            if let Some(&(prev_lo, prev_hi)) = spans.last() {
                hi = hi.max(prev_lo);
                lo = lo.min(prev_hi);
            }
            spans.push((lo, hi));
        }
        spans
    })
}

fn origin() -> impl Strategy<Value = Point> {
    (-500i32..500, -500i32..500).prop_map(Point::from)
}

proptest! {
    #[test]
    fn rect_ring_interior_is_full_rectangle(o in origin(), w in 3i32..40, h in 3i32..40) {
        let interior = resolve_both(rect_ring(o, w, h))?;
        prop_assert_eq!(interior.len(), ((w - 2) * (h - 2)) as usize);
        prop_assert_eq!(interior.first().copied(), Some(o.offset(1, 1)));
    }

    #[test]
    fn notch_is_excluded(
        o in origin(),
        w in 7i32..30,
        h in 4i32..30,
        notch in 0i32..100,
        depth in 0i32..100,
    ) {
        let notch_x = 3 + notch % (w - 6);
        let depth = 1 + depth % (h - 3);
        let interior = resolve_both(notched_ring(o, w, h, notch_x, depth))?;
        prop_assert_eq!(interior.len(), notched_interior_len(w, h, depth));
        prop_assert!(!interior.contains(&o.offset(notch_x, 1)));
    }

    #[test]
    fn polyomino_outline_matches_outside_flood(o in origin(), spans in column_spans()) {
        let path = column_outline(o, &spans);
        let interior = resolve_both(path.clone())?;
        prop_assert_eq!(interior, enclosed_by_flood(&path));
    }

    #[test]
    fn reversed_polyomino_outline_resolves_the_same(spans in column_spans()) {
        let path = column_outline(Point::new(0, 0), &spans);
        let mut reversed = path.clone();
        reversed.reverse();
        prop_assert_eq!(resolve_both(reversed)?, resolve_both(path)?);
    }

    #[test]
    fn path_rotation_and_direction_do_not_matter(
        w in 3i32..20,
        h in 3i32..20,
        turn in 0usize..200,
        reverse in any::<bool>(),
    ) {
        let base = rect_ring(Point::new(0, 0), w, h);
        let expected = resolve_both(base.clone())?;

        let mut path = base;
        let turn = turn % path.len();
        path.rotate_left(turn);
        if reverse {
            path.reverse();
        }
        for algorithm in Algorithm::ALL {
            let polygon = PolygonData::from_path(path.clone()).unwrap();
            prop_assert_eq!(polygon.resolve_with(algorithm).unwrap(), expected.clone());
        }
    }
}
