//! Shortest paths across a character-grid dungeon.
//!
//! A dungeon map is plain text: one character per cell, rows separated by
//! newlines. With the default [`Markers`], `A` is the start, `B` the goal,
//! `#` an obstacle and a space an empty cell:
//!
//! ```
//! use dungeon_paths::Graph;
//!
//! let graph = Graph::parse("A  \n # \n B ").unwrap();
//! let path = graph.astar_path();
//! assert_eq!(path.len(), 4);
//! assert_eq!(graph.render(&path).unwrap(), "A  \n*# \n*B ");
//! ```
//!
//! - [`Graph`] parses the map into an arena of [`Node`]s joined to their
//!   walkable up/down/left/right neighbours.
//! - [`Astar`] runs A* over a borrowed graph with Euclidean edge costs and
//!   heuristic, keeping its per-node [`Scores`] to itself.

mod astar;
mod distance;
mod error;
mod graph;
mod markers;
mod node;

pub use astar::Astar;
pub use distance::euclidean;
pub use error::{ErrorKind, GraphError};
pub use graph::Graph;
pub use markers::{Markers, Role};
pub use node::{Node, NodeId, Scores};
