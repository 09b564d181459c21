use tilewalk_core::{BlockGrid, RowCol};

use crate::error::{Endpoint, PathError, TileFault};

/// A search strategy over a [`BlockGrid`], in internal coordinates.
///
/// Implementations hold no state between calls. On success the returned
/// tiles start at `start` and end at `end`; what lies in between depends on
/// the strategy.
pub trait PathSearch {
    fn search(&self, grid: &BlockGrid, start: RowCol, end: RowCol)
    -> Result<Vec<RowCol>, PathError>;
}

/// Reject endpoints that are outside the grid or blocked.
pub(crate) fn check_endpoints(
    grid: &BlockGrid,
    start: RowCol,
    end: RowCol,
) -> Result<(), PathError> {
    for (endpoint, rc) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        let fault = if !grid.contains(rc) {
            TileFault::OutOfBounds
        } else if grid.is_blocked(rc) {
            TileFault::Blocked
        } else {
            continue;
        };
        return Err(PathError::InvalidInput { endpoint, fault });
    }
    Ok(())
}
