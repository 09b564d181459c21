//! Exhaustive depth-first search.
//!
//! Finds *some* connection, not the shortest one. The returned trail is the
//! order in which tiles were expanded, so it may contain dead-end detours
//! that were entered before the search backed out of them. Use
//! [`Wavefront`](crate::Wavefront) when a walkable shortest route is needed.

use log::{debug, trace};
use tilewalk_core::{BlockGrid, RowCol};

use crate::error::PathError;
use crate::neighbors::{DFS_ORDER, Neighbors};
use crate::traits::{PathSearch, check_endpoints};

/// Stack-based depth-first search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn search(
        &self,
        grid: &BlockGrid,
        start: RowCol,
        end: RowCol,
    ) -> Result<Vec<RowCol>, PathError> {
        check_endpoints(grid, start, end)?;

        let mut visited = vec![false; grid.len()];
        let mut stack = vec![start];
        let mut trail = Vec::new();
        let mut nb = Neighbors::new();

        while let Some(rc) = stack.pop() {
            if rc == end {
                trail.push(rc);
                debug!("dfs: reached {end} after expanding {} tiles", trail.len());
                return Ok(trail);
            }
            let Some(i) = grid.index(rc) else {
                continue;
            };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            trail.push(rc);
            trace!("dfs: expand {rc}, stack depth {}", stack.len());

            // The end tile is open (checked above), so `is_open` admits it.
            let next = nb.cardinal(rc, &DFS_ORDER, |n| {
                grid.index(n).is_some_and(|ni| !visited[ni]) && grid.is_open(n)
            });
            stack.extend_from_slice(next);
        }

        debug!("dfs: {end} unreachable from {start}");
        Err(PathError::NotFound)
    }
}

/// Find some trail from `start` to `end` with [`DepthFirst`].
pub fn find_any_path(
    grid: &BlockGrid,
    start: RowCol,
    end: RowCol,
) -> Result<Vec<RowCol>, PathError> {
    DepthFirst.search(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Endpoint, TileFault};
    use crate::testutil::{demo_grid, random_grid, reference_distance};

    #[test]
    fn straight_corridor() {
        let g = BlockGrid::open(1, 4).unwrap();
        let trail = find_any_path(&g, RowCol::new(0, 0), RowCol::new(0, 3)).unwrap();
        assert_eq!(
            trail,
            vec![
                RowCol::new(0, 0),
                RowCol::new(0, 1),
                RowCol::new(0, 2),
                RowCol::new(0, 3)
            ]
        );
    }

    #[test]
    fn trail_keeps_dead_ends() {
        // ...
        // .##
        let g = BlockGrid::parse("...\n.##", '#').unwrap();
        let trail = find_any_path(&g, RowCol::new(0, 0), RowCol::new(1, 0)).unwrap();
        // Right is pushed last so it is explored first, into the dead end.
        assert_eq!(
            trail,
            vec![
                RowCol::new(0, 0),
                RowCol::new(0, 1),
                RowCol::new(0, 2),
                RowCol::new(1, 0)
            ]
        );
    }

    #[test]
    fn start_equals_end() {
        let g = BlockGrid::open(2, 2).unwrap();
        let rc = RowCol::new(1, 1);
        assert_eq!(find_any_path(&g, rc, rc).unwrap(), vec![rc]);
    }

    #[test]
    fn enclosed_end_is_not_found() {
        let g = BlockGrid::parse("...#.\n...#.\n...#.", '#').unwrap();
        assert_eq!(
            find_any_path(&g, RowCol::new(0, 0), RowCol::new(2, 4)),
            Err(PathError::NotFound)
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = demo_grid();
        assert_eq!(
            find_any_path(&g, RowCol::new(0, 0), RowCol::new(1, 1)),
            Err(PathError::InvalidInput {
                endpoint: Endpoint::Start,
                fault: TileFault::Blocked
            })
        );
        assert_eq!(
            find_any_path(&g, RowCol::new(1, 0), RowCol::new(8, 0)),
            Err(PathError::InvalidInput {
                endpoint: Endpoint::End,
                fault: TileFault::OutOfBounds
            })
        );
    }

    #[test]
    fn demo_maze_reaches_far_corner() {
        let g = demo_grid();
        let (s, e) = (RowCol::new(1, 0), RowCol::new(6, 12));
        let trail = find_any_path(&g, s, e).unwrap();
        assert_eq!(trail.first(), Some(&s));
        assert_eq!(trail.last(), Some(&e));
        assert!(trail.iter().all(|rc| g.is_open(*rc)));
        // Each tile is expanded at most once.
        let mut seen = trail.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), trail.len());
    }

    #[test]
    fn agrees_with_reachability_on_random_grids() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let g = random_grid(&mut rng, 7, 9, 35);
            let (s, e) = (RowCol::new(0, 0), RowCol::new(6, 8));
            let got = find_any_path(&g, s, e);
            match reference_distance(&g, s, e) {
                Some(d) => {
                    let trail = got.unwrap();
                    assert!(trail.len() > d);
                    assert_eq!(trail.last(), Some(&e));
                    assert!(trail.iter().all(|rc| g.is_open(*rc)));
                }
                None => assert_eq!(got, Err(PathError::NotFound)),
            }
        }
    }
}
