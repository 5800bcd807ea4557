//! Benchmark shape profiles for the Moat resolvers.
//!
//! Every profile fits the default 100-cell extent cap:
//!
//! - [`ring_profile`]: plain 100x100 rectangle ring (9,604 interior cells)
//! - [`comb_profile`]: 100x100 ring with a deep notch every four columns,
//!   which maximizes column fallbacks and fill seeds
//! - [`comb`]: the comb builder at any size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use moat_core::Point;
use moat_test_utils::rect_ring;

/// Side length of the benchmark shapes.
pub const PROFILE_SIZE: i32 = 100;

/// A 100x100 rectangle ring at the origin.
pub fn ring_profile() -> Vec<Point> {
    rect_ring(Point::new(0, 0), PROFILE_SIZE, PROFILE_SIZE)
}

/// A 100x100 comb whose teeth reach 90 rows down.
pub fn comb_profile() -> Vec<Point> {
    comb(PROFILE_SIZE, PROFILE_SIZE, PROFILE_SIZE - 10)
}

/// Clockwise `width` x `height` ring with a one-cell notch cut `depth`
/// rows down from the top wall at columns 3, 7, 11, ...
///
/// Requires `width >= 7` and `1 <= depth <= height - 3`.
pub fn comb(width: i32, height: i32, depth: i32) -> Vec<Point> {
    let notches: Vec<i32> = (3..=width - 4).step_by(4).collect();
    let mut path = Vec::new();
    let mut x = 0;
    while x < width {
        path.push(Point::new(x, 0));
        if notches.contains(&(x + 1)) {
            path.extend((1..=depth).map(|y| Point::new(x, y)));
            path.push(Point::new(x + 1, depth));
            path.extend((0..=depth).rev().map(|y| Point::new(x + 2, y)));
            x += 3;
        } else {
            x += 1;
        }
    }
    path.extend((1..height).map(|y| Point::new(width - 1, y)));
    path.extend((0..width - 1).rev().map(|x| Point::new(x, height - 1)));
    path.extend((1..height - 1).rev().map(|y| Point::new(0, y)));
    path
}
