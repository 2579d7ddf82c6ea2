//! Route queries between two towns of a graph.
//!
//! - [`ShortestPath`]: Dijkstra shortest route weighted by length or by time.
//! - [`AllPaths`]: every simple route found by a depth first search, and the optimal route
//!   minimizing time² + length² among them.
//!
//! Both borrow the graph immutably and keep their scratch state to themselves.

pub mod all_paths;
pub mod route;
pub mod shortest_path;
