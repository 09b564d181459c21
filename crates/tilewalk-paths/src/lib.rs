//! Pathfinding for tile mazes.
//!
//! This crate finds routes across a rectangular grid of open and blocked
//! tiles with 4-connected movement:
//!
//! - **Wavefront** shortest-path search ([`Wavefront`], [`find_shortest_path`])
//! - **Depth-first** search for *some* connection ([`DepthFirst`], [`find_any_path`])
//! - **Coordinate adapter** taking and returning `(x, y)` tiles
//!   ([`find_path`], [`find_path_with`], [`find_path_in`])
//! - **Approach tiles** next to a target ([`resolve_approach_tile`], [`approach_path`])
//! - **Rendezvous** halves for two agents meeting mid-route ([`split_meeting_path`])
//!
//! Every call is self-contained: it derives its own [`BlockGrid`] or reads
//! the one it is given, and keeps nothing between calls.
//!
//! # Strategies
//!
//! | Type | Guarantees |
//! |---|---|
//! | [`Wavefront`] | shortest 4-connected path, or [`PathError::NotFound`] |
//! | [`DepthFirst`] | expansion trail from start to end, may include dead ends |
//! | [`SearchConfig`] | either of the above, chosen by [`Strategy`] |
//!
//! [`BlockGrid`]: tilewalk_core::BlockGrid

mod adapter;
mod approach;
mod config;
mod dfs;
mod distance;
mod error;
mod neighbors;
mod rendezvous;
mod traits;
mod wavefront;

#[cfg(test)]
mod testutil;

pub use adapter::{find_path, find_path_in, find_path_with};
pub use approach::{approach_candidates, approach_path, closest_tile, resolve_approach_tile};
pub use config::{IterationLimit, LEGACY_ITERATION_CAP, SearchConfig, Strategy};
pub use dfs::{DepthFirst, find_any_path};
pub use distance::{euclidean, manhattan};
pub use error::{Endpoint, PathError, TileFault};
pub use neighbors::{DFS_ORDER, Neighbors, Step, WAVEFRONT_ORDER};
pub use rendezvous::{MeetingPaths, split_meeting_path, split_path};
pub use traits::PathSearch;
pub use wavefront::{LabelField, Wavefront, find_shortest_path};
