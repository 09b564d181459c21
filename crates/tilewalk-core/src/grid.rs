//! The [`BlockGrid`] type — an open/blocked classification of a tile maze.
//!
//! A `BlockGrid` is always derived from caller data: the raw markers are
//! only borrowed, and every search works on its own copy of the
//! classification, never on the caller's array.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Range, RowCol};

/// Flat row-major index of `rc` in a `rows` x `cols` array, or `None` if
/// the tile lies outside it.
#[inline]
pub fn flat_index(rows: usize, cols: usize, rc: RowCol) -> Option<usize> {
    let row = usize::try_from(rc.row).ok()?;
    let col = usize::try_from(rc.col).ok()?;
    (row < rows && col < cols).then(|| row * cols + col)
}

/// A rectangular grid of open and blocked tiles, indexed by [`RowCol`].
///
/// Storage is a flat row-major `Vec<bool>` where `true` marks a blocked
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    blocked: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl BlockGrid {
    /// Classify `raw` against `collision`: cells equal to the marker are
    /// blocked, everything else is open.
    ///
    /// The input must be non-empty and rectangular.
    pub fn from_markers<T, R>(raw: &[R], collision: &T) -> Result<Self, GridError>
    where
        T: PartialEq,
        R: AsRef<[T]>,
    {
        let rows = raw.len();
        let cols = raw.first().map_or(0, |r| r.as_ref().len());
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut blocked = Vec::with_capacity(rows * cols);
        for (i, row) in raw.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            blocked.extend(row.iter().map(|m| m == collision));
        }

        Ok(Self {
            blocked,
            rows,
            cols,
        })
    }

    /// Parse a multi-line string, one char per cell. Lines are trimmed of
    /// trailing `\r`; blank leading and trailing lines are ignored.
    pub fn parse(text: &str, collision: char) -> Result<Self, GridError> {
        let lines: Vec<Vec<char>> = text
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().collect())
            .collect();
        Self::from_markers(&lines, &collision)
    }

    /// A fully open grid.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            blocked: vec![false; rows * cols],
            rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width in external coordinates (the column count).
    #[inline]
    pub fn width(&self) -> i32 {
        self.cols as i32
    }

    /// Height in external coordinates (the row count).
    #[inline]
    pub fn height(&self) -> i32 {
        self.rows as i32
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// The external `[0, width) × [0, height)` range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width(), self.height())
    }

    /// Whether `rc` lies inside the grid.
    #[inline]
    pub fn contains(&self, rc: RowCol) -> bool {
        self.index(rc).is_some()
    }

    /// Convert a tile to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, rc: RowCol) -> Option<usize> {
        flat_index(self.rows, self.cols, rc)
    }

    /// Convert a flat index back to a tile.
    #[inline]
    pub fn row_col(&self, idx: usize) -> RowCol {
        RowCol::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Whether `rc` is inside the grid and walkable.
    #[inline]
    pub fn is_open(&self, rc: RowCol) -> bool {
        self.index(rc).is_some_and(|i| !self.blocked[i])
    }

    /// Whether `rc` is blocked. Out-of-bounds tiles count as blocked.
    #[inline]
    pub fn is_blocked(&self, rc: RowCol) -> bool {
        !self.is_open(rc)
    }

    /// Change the classification of one cell. No-op if out of bounds.
    pub fn set_blocked(&mut self, rc: RowCol, blocked: bool) {
        if let Some(i) = self.index(rc) {
            self.blocked[i] = blocked;
        }
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }

    /// Render the grid with `path` overlaid: `S` marks the first tile,
    /// `E` the last, `*` the tiles in between.
    pub fn render_path(&self, path: &[RowCol]) -> String {
        let mut glyphs: Vec<char> = self
            .blocked
            .iter()
            .map(|&b| if b { '#' } else { '.' })
            .collect();
        let last = path.len().saturating_sub(1);
        for (n, &rc) in path.iter().enumerate() {
            if let Some(i) = self.index(rc) {
                glyphs[i] = match n {
                    0 => 'S',
                    n if n == last => 'E',
                    _ => '*',
                };
            }
        }

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in glyphs.chunks(self.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for BlockGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}
