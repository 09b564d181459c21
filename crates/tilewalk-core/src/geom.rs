//! Geometry primitives: [`Point`], [`RowCol`] and [`Range`].
//!
//! Two tile conventions coexist and are kept apart by type:
//!
//! - [`Point`] is the caller-facing `(x, y)` tile, x being column-like and y
//!   row-like.
//! - [`RowCol`] is the `(row, col)` index used inside the grid model and
//!   the search algorithms.
//!
//! Conversions between the two only exist as `From` impls (row = y,
//! col = x), so every swap is explicit at the call site.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An external `(x, y)` tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<RowCol> for Point {
    #[inline]
    fn from(rc: RowCol) -> Self {
        Self::new(rc.col, rc.row)
    }
}

// ---------------------------------------------------------------------------
// RowCol
// ---------------------------------------------------------------------------

/// An internal `(row, col)` tile indexing the grid array.
///
/// Components are signed so that neighbour offsets may step outside the
/// grid; bounds are checked by the grid, not by the type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowCol {
    pub row: i32,
    pub col: i32,
}

impl RowCol {
    /// Create a new row/column pair.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a tile shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: RowCol) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[r{} c{}]", self.row, self.col)
    }
}

impl From<Point> for RowCol {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.y, p.x)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max) in external coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_row_col_swap() {
        let p = Point::new(4, 1);
        let rc = RowCol::from(p);
        assert_eq!(rc, RowCol::new(1, 4));
        assert_eq!(Point::from(rc), p);
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let p = Point::new(2, 2);
        assert!(p.is_adjacent(Point::new(2, 3)));
        assert!(p.is_adjacent(Point::new(1, 2)));
        assert!(!p.is_adjacent(Point::new(3, 3)));
        assert!(!p.is_adjacent(p));
        assert!(RowCol::new(0, 0).is_adjacent(RowCol::new(0, 1)));
        assert!(!RowCol::new(0, 0).is_adjacent(RowCol::new(1, 1)));
    }

    #[test]
    fn range_contains_half_open() {
        let r = Range::sized(3, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert!(!Range::sized(0, 4).contains(Point::ZERO));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }
}
