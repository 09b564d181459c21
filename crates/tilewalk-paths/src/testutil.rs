//! Shared fixtures for the unit tests.

use std::collections::VecDeque;

use rand::{Rng, RngExt};
use tilewalk_core::{BlockGrid, RowCol};

/// The 13x8 demo maze; `#` is the collision marker.
pub const DEMO_MAZE: [&str; 8] = [
    "#############",
    "  #     #   #",
    "# #  ##   # #",
    "# #  ## # # #",
    "#       #   #",
    "### # ### # #",
    "#         #  ",
    "#############",
];

pub fn demo_rows() -> Vec<Vec<char>> {
    DEMO_MAZE.iter().map(|l| l.chars().collect()).collect()
}

pub fn demo_grid() -> BlockGrid {
    BlockGrid::from_markers(&demo_rows(), &'#').unwrap()
}

/// A random grid with roughly `percent_blocked` percent of its cells
/// blocked. Corners are left open so they can serve as endpoints.
pub fn random_grid(
    rng: &mut impl Rng,
    rows: usize,
    cols: usize,
    percent_blocked: u32,
) -> BlockGrid {
    let mut g = BlockGrid::open(rows, cols).unwrap();
    for i in 0..g.len() {
        if rng.random_range(0..100u32) < percent_blocked {
            let rc = g.row_col(i);
            g.set_blocked(rc, true);
        }
    }
    let (r, c) = (rows as i32 - 1, cols as i32 - 1);
    for rc in [RowCol::new(0, 0), RowCol::new(r, c), RowCol::new(0, c), RowCol::new(r, 0)] {
        g.set_blocked(rc, false);
    }
    g
}

/// Step count of the shortest path, by a plain queue BFS.
pub fn reference_distance(grid: &BlockGrid, start: RowCol, end: RowCol) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index(start)?] = 0;
    queue.push_back(start);
    while let Some(rc) = queue.pop_front() {
        let d = dist[grid.index(rc)?];
        if rc == end {
            return Some(d);
        }
        for n in [rc.shift(-1, 0), rc.shift(1, 0), rc.shift(0, -1), rc.shift(0, 1)] {
            if !grid.is_open(n) {
                continue;
            }
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if dist[ni] == usize::MAX {
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// Panic unless `path` is a 4-connected walk over open tiles from `start`
/// to `end`.
pub fn assert_valid_path(grid: &BlockGrid, path: &[RowCol], start: RowCol, end: RowCol) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&end), "path must finish at end");
    for rc in path {
        assert!(grid.is_open(*rc), "{rc} is not open");
    }
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not one step", w[0], w[1]);
    }
}
