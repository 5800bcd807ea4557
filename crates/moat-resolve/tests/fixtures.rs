use std::collections::HashSet;

use moat_core::{MalformedKind, Point, PolygonError};
use moat_grid::trace_path;
use moat_resolve::{Algorithm, PolygonData, ResolverConfig};
use moat_test_utils::{normalize, Fixture};

const NOTCHED: &str = "
    x x x . . . x x x
    x - x x . . x - x
    x - - x x x x - x
    x x - - - - - - x
    . x x x - - - x x
    . . . x x x x x .
";

const RING: &str = "
    x x x
    x - x
    x x x
";

const HOOK: &str = "
    . x x x .
    x x - x .
    x - - x x
    x - - - x
    x x x x x
";

const PADDED: &str = "
    . . . . . . .
    . x x x x x .
    . x - - - x .
    . x - - - x .
    . x x x x x .
    . . . . . . .
";

fn build(f: &Fixture, algorithm: Algorithm) -> PolygonData {
    PolygonData::with_config(
        f.path.clone(),
        f.bounding_box,
        ResolverConfig::with_algorithm(algorithm),
    )
    .unwrap()
}

fn points(cells: &[(i32, i32)]) -> Vec<Point> {
    cells.iter().map(|&p| p.into()).collect()
}

// ── Reference drawings ─────────────────────────────────────────

#[test]
fn notched_reference_interior() {
    let expected = points(&[
        (1, 1),
        (7, 1),
        (1, 2),
        (2, 2),
        (7, 2),
        (2, 3),
        (3, 3),
        (4, 3),
        (5, 3),
        (6, 3),
        (7, 3),
        (4, 4),
        (5, 4),
        (6, 4),
    ]);
    let f = Fixture::parse(NOTCHED);
    assert_eq!(f.interior, expected);
    for algorithm in Algorithm::ALL {
        let polygon = build(&f, algorithm);
        assert_eq!(polygon.interior_points().unwrap(), expected, "{algorithm}");
    }
}

#[test]
fn drawings_round_trip() {
    for art in [NOTCHED, RING, HOOK, PADDED] {
        let f = Fixture::parse(art);
        for algorithm in Algorithm::ALL {
            let polygon = build(&f, algorithm);
            let interior = polygon.interior_points().unwrap();
            assert_eq!(f.render_with(interior), normalize(art), "{algorithm}");
        }
    }
}

#[test]
fn minimum_loop_is_centre() {
    let f = Fixture::parse(RING);
    for algorithm in Algorithm::ALL {
        let interior = build(&f, algorithm).interior_points().unwrap().to_vec();
        assert_eq!(interior, vec![Point::new(1, 1)]);
    }
}

#[test]
fn world_offset_is_preserved() {
    let f = Fixture::parse(HOOK);
    let shift = |p: &Point| p.offset(-250, 1_000);
    let path: Vec<Point> = f.path.iter().map(shift).collect();
    let expected: Vec<Point> = f.interior.iter().map(shift).collect();
    let polygon = PolygonData::from_path(path).unwrap();
    assert_eq!(polygon.interior_points().unwrap(), expected);
}

// ── Rejection ──────────────────────────────────────────────────

#[test]
fn spur_into_interior_is_rejected() {
    // (1,3) and (7,3) stick into the interior with one path neighbour.
    let art = "
        x x x . . . x x x
        x - x x . x x - x
        x - - x x x - - x
        x x - - - - - x x
        x - - x x x - - x
        x - x x . x x - x
        x x x . . . x x x
    ";
    assert!(Fixture::try_parse(art).is_err());

    let drawn: Vec<Point> = normalize(art)
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.split_whitespace()
                .enumerate()
                .filter(|(_, c)| *c == "x")
                .map(move |(x, _)| Point::new(x as i32, y as i32))
        })
        .collect();
    let polygon = PolygonData::from_path(drawn).unwrap();
    let err = polygon.interior_points().unwrap_err();
    assert!(err.is_malformed(), "{err}");
}

#[test]
fn diagonal_pinch_is_rejected() {
    let art = "
        x x x .
        x . x x
        x x . x
        . x x x
    ";
    let f = Fixture::parse(art);
    for algorithm in Algorithm::ALL {
        let err = build(&f, algorithm).interior_points().unwrap_err();
        assert!(matches!(
            err,
            PolygonError::MalformedPolygon {
                kind: MalformedKind::DiagonalTouch,
                ..
            }
        ));
    }
}

// ── Memoization and discovery ──────────────────────────────────

#[test]
fn second_call_reuses_result() {
    let f = Fixture::parse(NOTCHED);
    let polygon = PolygonData::new(f.path.clone(), f.bounding_box).unwrap();
    let first = polygon.interior_points().unwrap().to_vec();
    let second = polygon.interior_points().unwrap().to_vec();
    assert_eq!(first, second);
    assert_eq!(polygon.resolutions(), 1);
}

#[test]
fn traced_cells_resolve() {
    let f = Fixture::parse(HOOK);
    let solid: HashSet<Point> = f.path.iter().copied().collect();
    let traced = trace_path(&solid, Point::new(4, 3), 100).unwrap();
    let polygon = PolygonData::try_from(traced).unwrap();
    assert_eq!(polygon.interior_points().unwrap(), f.interior);
}
