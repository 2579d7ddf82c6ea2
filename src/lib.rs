#![doc = include_str!("../README.md")]

mod error;
mod format;
mod graph;
mod model;
mod routing;
mod shell;

pub use error::{CommandError, DefinitionError, GraphError};
pub use format::reader::{DefinitionConfig, parse_definition, read_definition_file};
pub use format::writer::{definition_lines, serialize_definition, write_definition};
pub use format::{FIELD_SEPARATOR, SEPARATOR};
pub use graph::dijkstra::{SearchScope, SearchTree, search_tree};
pub use graph::path::Path;
pub use graph::town::Town;
pub use graph::{Graph, PathId, TownId};
pub use model::{Criterion, TownName};
pub use routing::all_paths::{AllPaths, OptimalRoute};
pub use routing::route::Route;
pub use routing::shortest_path::{ShortestPath, ShortestRoute, shortest_path};
pub use shell::{Command, Reply, Shell};
