//! Error taxonomy for path queries.
//!
//! Every failure here is an expected outcome in a simulation (the agent
//! simply does not move), so all of them are plain values.

use std::fmt;

use tilewalk_core::GridError;

/// Which end of a query a [`PathError::InvalidInput`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFault {
    OutOfBounds,
    Blocked,
}

/// Errors returned by the searches and the helpers built on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or end tile is outside the grid or blocked.
    InvalidInput { endpoint: Endpoint, fault: TileFault },
    /// No connecting path exists, or the wavefront ran out of sweeps
    /// before reaching the end tile.
    NotFound,
    /// The approach-tile resolver had no in-bounds candidate.
    NoCandidate,
    /// The raw marker array could not be turned into a grid.
    Grid(GridError),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

impl fmt::Display for TileFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { endpoint, fault } => {
                write!(f, "invalid {endpoint} tile: {fault}")
            }
            Self::NotFound => write!(f, "no path found"),
            Self::NoCandidate => write!(f, "no in-bounds tile adjacent to target"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = PathError::InvalidInput {
            endpoint: Endpoint::End,
            fault: TileFault::Blocked,
        };
        assert_eq!(e.to_string(), "invalid end tile: blocked");
        assert_eq!(PathError::NotFound.to_string(), "no path found");
    }

    #[test]
    fn grid_errors_convert_and_chain() {
        let e: PathError = GridError::Empty.into();
        assert_eq!(e, PathError::Grid(GridError::Empty));
        assert!(e.source().is_some());
        assert!(PathError::NoCandidate.source().is_none());
    }
}
