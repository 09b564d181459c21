//! Rendezvous splitting: two agents walk toward each other and meet near
//! the middle of the route between them.

use tilewalk_core::Point;

use crate::adapter::find_path;
use crate::error::PathError;

/// The two halves of a route between agents `a` and `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingPaths {
    /// Walked by `a`, from its own tile toward the midpoint.
    pub first: Vec<Point>,
    /// Walked by `b`, from its own tile toward the midpoint.
    pub second: Vec<Point>,
}

/// Split a full `a -> b` path at its midpoint.
///
/// With `n` tiles and `h = n / 2`, `first` is tiles `0..h` and `second` is
/// tiles `h - 1..n` reversed; the two halves share tile `h - 1`. Paths of at
/// most two tiles need no walking and yield `None`.
pub fn split_path(path: &[Point]) -> Option<MeetingPaths> {
    if path.len() <= 2 {
        return None;
    }
    let half = path.len() / 2;
    let first = path[..half].to_vec();
    let second = path[half - 1..].iter().rev().copied().collect();
    Some(MeetingPaths { first, second })
}

/// Route between `a` and `b` split into two halves, one per agent.
///
/// `Ok(None)` means the agents already stand on the same or adjacent tiles.
pub fn split_meeting_path<T, R>(
    raw: &[R],
    a: Point,
    b: Point,
    collision: &T,
) -> Result<Option<MeetingPaths>, PathError>
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    let path = find_path(raw, a, b, collision)?;
    Ok(split_path(&path))
}
