//! Search configuration: which strategy to run and how far the wavefront
//! may expand.

use tilewalk_core::{BlockGrid, RowCol};

use crate::dfs::DepthFirst;
use crate::error::PathError;
use crate::traits::PathSearch;
use crate::wavefront::Wavefront;

/// Countdown start of the bounded legacy wavefront.
///
/// The countdown is tested for zero before it is decremented, so the legacy
/// search runs one sweep more than this value. See [`SearchConfig::legacy`].
pub const LEGACY_ITERATION_CAP: u32 = 150;

/// Upper bound on the number of wavefront labeling sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IterationLimit {
    /// One sweep per grid cell. No shortest path can be longer, so a
    /// reachable end tile is always labeled.
    #[default]
    CellCount,
    /// A fixed number of sweeps, regardless of grid size.
    Fixed(u32),
}

impl IterationLimit {
    /// The concrete sweep cap for `grid`.
    pub fn sweeps_for(self, grid: &BlockGrid) -> u32 {
        match self {
            Self::CellCount => u32::try_from(grid.len()).unwrap_or(u32::MAX),
            Self::Fixed(n) => n,
        }
    }
}

/// Which search answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Wavefront search: guaranteed shortest.
    #[default]
    Shortest,
    /// Depth-first search: some connecting trail, not necessarily short.
    Any,
}

/// Options for the coordinate-adapter entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub iteration_limit: IterationLimit,
}

impl SearchConfig {
    /// Shortest-path search with the legacy bound: `LEGACY_ITERATION_CAP + 1`
    /// sweeps, so routes of up to 151 steps are found.
    pub fn legacy() -> Self {
        Self {
            strategy: Strategy::Shortest,
            iteration_limit: IterationLimit::Fixed(LEGACY_ITERATION_CAP + 1),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_iteration_limit(mut self, limit: IterationLimit) -> Self {
        self.iteration_limit = limit;
        self
    }
}

impl PathSearch for SearchConfig {
    fn search(
        &self,
        grid: &BlockGrid,
        start: RowCol,
        end: RowCol,
    ) -> Result<Vec<RowCol>, PathError> {
        match self.strategy {
            Strategy::Shortest => Wavefront::new(self.iteration_limit).search(grid, start, end),
            Strategy::Any => DepthFirst.search(grid, start, end),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::legacy().with_strategy(Strategy::Any);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
