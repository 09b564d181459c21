//! Caller-facing entry points in external `(x, y)` coordinates.
//!
//! Callers hand in tiles as [`Point`]s; the searches work on [`RowCol`]s.
//! This module is the only place where one is turned into the other: each
//! endpoint is swapped to `(row, col)` before searching and every tile of
//! the result is swapped back, so callers never see internal coordinates.

use tilewalk_core::{BlockGrid, Point, RowCol};

use crate::config::SearchConfig;
use crate::error::PathError;
use crate::traits::PathSearch;

/// Shortest path between two external tiles of a raw marker grid.
///
/// Cells equal to `collision` are impassable. `raw` is only read.
pub fn find_path<T, R>(
    raw: &[R],
    start: Point,
    end: Point,
    collision: &T,
) -> Result<Vec<Point>, PathError>
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    find_path_with(raw, start, end, collision, &SearchConfig::default())
}

/// Like [`find_path`], with an explicit strategy and sweep cap.
pub fn find_path_with<T, R>(
    raw: &[R],
    start: Point,
    end: Point,
    collision: &T,
    config: &SearchConfig,
) -> Result<Vec<Point>, PathError>
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    let grid = BlockGrid::from_markers(raw, collision)?;
    find_path_in(&grid, start, end, config)
}

/// Run `search` on an already derived grid, in external coordinates.
pub fn find_path_in<S>(
    grid: &BlockGrid,
    start: Point,
    end: Point,
    search: &S,
) -> Result<Vec<Point>, PathError>
where
    S: PathSearch + ?Sized,
{
    let path = search.search(grid, RowCol::from(start), RowCol::from(end))?;
    Ok(path.into_iter().map(Point::from).collect())
}
