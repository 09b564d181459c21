use tilewalk_core::Point;

/// Manhattan (L1) distance between two tiles.
///
/// Widened to `i64` so that tiles at opposite ends of the `i32` range do
/// not overflow.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs()
}

/// Euclidean (L2) distance between two tiles.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}
