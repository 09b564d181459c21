use tilewalk_core::RowCol;

/// One orthogonal move in `(row, col)` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// The tile reached by taking this step from `rc`.
    #[inline]
    pub const fn apply(self, rc: RowCol) -> RowCol {
        match self {
            Self::Up => rc.shift(-1, 0),
            Self::Down => rc.shift(1, 0),
            Self::Left => rc.shift(0, -1),
            Self::Right => rc.shift(0, 1),
        }
    }
}

/// Push order of the depth-first search. Pops come out reversed.
pub const DFS_ORDER: [Step; 4] = [Step::Up, Step::Down, Step::Left, Step::Right];

/// Expansion and back-tracking order of the wavefront search.
pub const WAVEFRONT_ORDER: [Step; 4] = [Step::Up, Step::Left, Step::Down, Step::Right];

/// Cached neighbor computation helper.
///
/// Enumerates the four orthogonal neighbors of a tile in a caller-chosen
/// order, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<RowCol>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the neighbors of `rc` in `order`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(
        &mut self,
        rc: RowCol,
        order: &[Step; 4],
        keep: impl Fn(RowCol) -> bool,
    ) -> &[RowCol] {
        self.buf.clear();
        for step in order {
            let n = step.apply(rc);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
