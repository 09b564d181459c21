//! Nearest-adjacent-tile resolution, for walking up to a target and facing
//! it.

use log::debug;
use tilewalk_core::{BlockGrid, Point, Range, RowCol};

use crate::adapter::find_path_in;
use crate::config::SearchConfig;
use crate::distance::euclidean;
use crate::error::PathError;

/// The tiles orthogonally adjacent to `target`, in tie-break order:
/// above `(x, y + 1)`, below `(x, y - 1)`, left `(x - 1, y)`, right
/// `(x + 1, y)`.
///
/// Neighbors that would fall outside the `i32` range are left out.
pub fn approach_candidates(target: Point) -> Vec<Point> {
    [(0, 1), (0, -1), (-1, 0), (1, 0)]
        .into_iter()
        .filter_map(|(dx, dy)| {
            Some(Point::new(
                target.x.checked_add(dx)?,
                target.y.checked_add(dy)?,
            ))
        })
        .collect()
}

/// The candidate closest to `current` by Euclidean distance.
///
/// On ties the earliest candidate wins. Returns `None` for an empty slice.
pub fn closest_tile(current: Point, candidates: &[Point]) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &c in candidates {
        let d = euclidean(current, c);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((c, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Pick the in-bounds tile next to `target` that is closest to `self_xy`.
///
/// Only the `[0, grid_width) × [0, grid_height)` bounds are checked; the
/// chosen tile may still be blocked.
pub fn resolve_approach_tile(
    self_xy: Point,
    target_xy: Point,
    grid_width: i32,
    grid_height: i32,
) -> Result<Point, PathError> {
    let bounds = Range::sized(grid_width, grid_height);
    let mut candidates = approach_candidates(target_xy);
    candidates.retain(|&p| bounds.contains(p));
    closest_tile(self_xy, &candidates).ok_or(PathError::NoCandidate)
}

/// Route from `self_xy` to the closest open tile next to `target_xy`.
///
/// Unlike [`resolve_approach_tile`], blocked neighbors of the target are
/// skipped, so a walled side never wins over a reachable one.
pub fn approach_path<T, R>(
    raw: &[R],
    self_xy: Point,
    target_xy: Point,
    collision: &T,
) -> Result<Vec<Point>, PathError>
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    let grid = BlockGrid::from_markers(raw, collision)?;
    let tile = resolve_open_approach_tile(&grid, self_xy, target_xy)?;
    debug!("approach: {self_xy} heads for {tile} next to {target_xy}");
    find_path_in(&grid, self_xy, tile, &SearchConfig::default())
}

fn resolve_open_approach_tile(
    grid: &BlockGrid,
    self_xy: Point,
    target_xy: Point,
) -> Result<Point, PathError> {
    let mut candidates = approach_candidates(target_xy);
    candidates.retain(|&p| grid.is_open(RowCol::from(p)));
    closest_tile(self_xy, &candidates).ok_or(PathError::NoCandidate)
}
