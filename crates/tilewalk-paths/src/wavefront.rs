//! Wavefront (breadth-first distance labeling) shortest-path search.

use log::{debug, trace, warn};
use tilewalk_core::{BlockGrid, RowCol, flat_index};

use crate::config::IterationLimit;
use crate::error::PathError;
use crate::neighbors::{Neighbors, WAVEFRONT_ORDER};
use crate::traits::{PathSearch, check_endpoints};

/// Distance labels produced by one wavefront expansion.
///
/// `0` means unvisited; a label `k > 0` means the tile is reachable from
/// the start in exactly `k - 1` steps. The start tile carries label `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField {
    labels: Vec<u32>,
    rows: usize,
    cols: usize,
    sweeps: u32,
}

impl LabelField {
    fn new(grid: &BlockGrid) -> Self {
        Self {
            labels: vec![0; grid.len()],
            rows: grid.rows(),
            cols: grid.cols(),
            sweeps: 0,
        }
    }

    /// Label at `rc`. Out-of-bounds tiles read as unvisited.
    #[inline]
    pub fn at(&self, rc: RowCol) -> u32 {
        flat_index(self.rows, self.cols, rc).map_or(0, |i| self.labels[i])
    }

    /// Whether the expansion reached `rc`.
    #[inline]
    pub fn reached(&self, rc: RowCol) -> bool {
        self.at(rc) != 0
    }

    /// Number of labeling sweeps that were run.
    #[inline]
    pub fn sweeps(&self) -> u32 {
        self.sweeps
    }

    /// Walk back from `end` along strictly decreasing labels.
    ///
    /// At each tile the neighbors are tried in up, left, down, right order
    /// and the first one labeled one less is taken. Returns `None` if `end`
    /// was never labeled.
    pub fn path_to(&self, end: RowCol) -> Option<Vec<RowCol>> {
        let mut k = self.at(end);
        if k == 0 {
            return None;
        }
        let mut path = Vec::with_capacity(k as usize);
        let mut cur = end;
        path.push(cur);
        while k > 1 {
            cur = WAVEFRONT_ORDER
                .iter()
                .map(|step| step.apply(cur))
                .find(|&n| self.at(n) == k - 1)?;
            path.push(cur);
            k -= 1;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first shortest-path strategy with a bounded number of sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wavefront {
    limit: IterationLimit,
}

impl Wavefront {
    pub fn new(limit: IterationLimit) -> Self {
        Self { limit }
    }

    /// Label every tile reachable from `start` until `end` is labeled, the
    /// frontier runs dry or the sweep cap is reached.
    ///
    /// Sweep `k` labels the open, unlabeled neighbors of every tile labeled
    /// `k` with `k + 1`.
    pub fn label(
        &self,
        grid: &BlockGrid,
        start: RowCol,
        end: RowCol,
    ) -> Result<LabelField, PathError> {
        check_endpoints(grid, start, end)?;

        let max_sweeps = self.limit.sweeps_for(grid);
        let mut field = LabelField::new(grid);
        let Some(si) = grid.index(start) else {
            return Err(PathError::NotFound);
        };
        field.labels[si] = 1;

        let mut frontier = vec![start];
        let mut next = Vec::new();
        let mut nb = Neighbors::new();
        let mut k: u32 = 1;

        while !field.reached(end) && !frontier.is_empty() {
            if k > max_sweeps {
                warn!("wavefront: gave up after {max_sweeps} sweeps, {end} not labeled");
                break;
            }
            next.clear();
            for &rc in &frontier {
                for &n in nb.cardinal(rc, &WAVEFRONT_ORDER, |n| grid.is_open(n)) {
                    let Some(ni) = grid.index(n) else {
                        continue;
                    };
                    if field.labels[ni] == 0 {
                        field.labels[ni] = k + 1;
                        next.push(n);
                    }
                }
            }
            trace!("wavefront: sweep {k} labeled {} tiles", next.len());
            std::mem::swap(&mut frontier, &mut next);
            field.sweeps = k;
            k += 1;
        }

        Ok(field)
    }
}

impl PathSearch for Wavefront {
    fn search(
        &self,
        grid: &BlockGrid,
        start: RowCol,
        end: RowCol,
    ) -> Result<Vec<RowCol>, PathError> {
        let field = self.label(grid, start, end)?;
        match field.path_to(end) {
            Some(path) => {
                debug!(
                    "wavefront: {start} -> {end} in {} steps, {} sweeps",
                    path.len() - 1,
                    field.sweeps()
                );
                Ok(path)
            }
            None => {
                debug!("wavefront: {end} unreachable from {start}");
                Err(PathError::NotFound)
            }
        }
    }
}

/// Shortest 4-connected path from `start` to `end`, running at most
/// `max_iterations` labeling sweeps.
pub fn find_shortest_path(
    grid: &BlockGrid,
    start: RowCol,
    end: RowCol,
    max_iterations: u32,
) -> Result<Vec<RowCol>, PathError> {
    Wavefront::new(IterationLimit::Fixed(max_iterations)).search(grid, start, end)
}
