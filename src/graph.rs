use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::graph::dijkstra::{SearchScope, search_tree};
use crate::graph::path::PathKey;
use crate::{Criterion, GraphError, TownName};

pub mod dijkstra;
pub mod path;
pub mod town;

use path::Path;
use town::Town;

/// Uniquely identify a town that belongs to the graph.
/// Identifiers are never reused, not even after the town has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TownId(pub(crate) u32);

/// Uniquely identify a path that belongs to the graph.
/// Identifiers are never reused, not even after the path has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(pub(crate) u32);

impl fmt::Display for TownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Undirected weighted graph of towns.
///
/// Towns and paths are stored in arenas indexed by their identifiers, removed entries leave an
/// empty slot behind so that iterating the graph always follows the insertion order.
///
/// Once built, the graph is connected: every structural change through [`Graph::add_path`],
/// [`Graph::insert_path`] and [`Graph::remove_path`] preserves connectivity.
/// Towns created with [`Graph::add_town`] stay isolated until a path reaches them, callers
/// building a graph from scratch should verify [`Graph::check_connected`] when done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    towns: Vec<Option<Town>>,
    paths: Vec<Option<Path>>,
    town_index: FxHashMap<TownName, TownId>,
    path_index: FxHashMap<PathKey, PathId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn town_count(&self) -> usize {
        self.town_index.len()
    }

    pub fn path_count(&self) -> usize {
        self.path_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.town_index.is_empty()
    }

    pub fn contains_town(&self, town: TownId) -> bool {
        self.town(town).is_some()
    }

    pub fn town(&self, town: TownId) -> Option<&Town> {
        self.towns.get(town.0 as usize).and_then(Option::as_ref)
    }

    pub fn path(&self, path: PathId) -> Option<&Path> {
        self.paths.get(path.0 as usize).and_then(Option::as_ref)
    }

    pub fn town_name(&self, town: TownId) -> Option<&TownName> {
        self.town(town).map(Town::name)
    }

    /// Gets an iterator over all the towns in insertion order.
    pub fn towns(&self) -> impl Iterator<Item = (TownId, &Town)> {
        self.towns
            .iter()
            .enumerate()
            .filter_map(|(i, town)| Some((TownId(i as u32), town.as_ref()?)))
    }

    /// Gets an iterator over all the paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = (PathId, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .filter_map(|(i, path)| Some((PathId(i as u32), path.as_ref()?)))
    }

    /// Gets an iterator over the neighbors of the town, together with the path leading to them.
    /// Returns an empty iterator if the town doesn't belong to the graph.
    pub fn neighbors(&self, town: TownId) -> impl Iterator<Item = (TownId, PathId)> + '_ {
        self.town(town).into_iter().flat_map(Town::neighbors)
    }

    /// Finds a town by name, ignoring casing.
    pub fn find_town(&self, name: &str) -> Option<TownId> {
        self.town_index.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Finds the path between two towns, in any direction.
    pub fn find_path(&self, a: TownId, b: TownId) -> Option<PathId> {
        self.path_index.get(&PathKey::new(a, b)).copied()
    }

    /// Inserts a new isolated town.
    /// Town names are unique, if the name is already taken the existing town is returned.
    pub fn add_town(&mut self, name: TownName) -> TownId {
        if let Some(&town) = self.town_index.get(&name) {
            debug!("Town {name} already exists as {town}");
            return town;
        }

        let town = TownId(self.towns.len() as u32);
        debug!("Adding town {name} as {town}");

        self.town_index.insert(name.clone(), town);
        self.towns.push(Some(Town::new(name)));
        town
    }

    /// Inserts a path between two distinct towns of the graph.
    pub fn add_path(
        &mut self,
        a: TownId,
        b: TownId,
        length: u32,
        time: u32,
    ) -> Result<PathId, GraphError> {
        self.validate_path(a, b, length, time)?;
        Ok(self.push_path(a, b, length, time))
    }

    /// Inserts a path between two towns given by name, at most one of them may be missing from
    /// the graph and is created along with the path. Nothing is inserted if the path is not valid.
    pub fn insert_path(
        &mut self,
        start: TownName,
        destination: TownName,
        length: u32,
        time: u32,
    ) -> Result<PathId, GraphError> {
        let start_town = self.find_town(start.as_str());
        let destination_town = self.find_town(destination.as_str());

        match (start_town, destination_town) {
            (Some(a), Some(b)) => self.add_path(a, b, length, time),
            (None, None) => Err(GraphError::NoExistingTown(start, destination)),
            _ if length == 0 || time == 0 => Err(GraphError::InvalidWeight { length, time }),
            (start_town, destination_town) => {
                let a = start_town.unwrap_or_else(|| self.add_town(start));
                let b = destination_town.unwrap_or_else(|| self.add_town(destination));
                Ok(self.push_path(a, b, length, time))
            }
        }
    }

    /// Removes the path from the graph.
    ///
    /// Towns that are left without neighbors are removed as well. The path is not removed if
    /// the remaining towns would not be connected anymore, in which case the graph is unchanged.
    pub fn remove_path(&mut self, path: PathId) -> Result<(), GraphError> {
        let Path {
            start, destination, ..
        } = *self.path(path).ok_or(GraphError::PathNotFound(path))?;

        // towns whose only neighbor is at the other end of the path
        let orphans: Vec<TownId> = [start, destination]
            .into_iter()
            .filter(|&t| self.town(t).is_some_and(|town| town.degree() == 1))
            .collect();

        if !self.is_connected_without(path, &orphans) {
            let (start, destination) = (self.name_of(start)?, self.name_of(destination)?);
            warn!("Cannot remove path {path} between {start} and {destination}: graph would be disconnected");
            return Err(GraphError::NotConnected(start, destination));
        }

        info!("Removing path {path} between {start} and {destination}, orphans: {orphans:?}");

        for (town, other) in [(start, destination), (destination, start)] {
            if let Some(Some(town)) = self.towns.get_mut(town.0 as usize) {
                town.remove_neighbor(other);
            }
        }

        self.path_index.remove(&PathKey::new(start, destination));
        self.paths[path.0 as usize] = None;

        for orphan in orphans {
            if let Some(town) = self.towns[orphan.0 as usize].take() {
                self.town_index.remove(town.name());
            }
        }

        Ok(())
    }

    /// Returns true if every town is reachable from every other town.
    /// The empty graph is connected.
    pub fn check_connected(&self) -> bool {
        self.is_connected_without_towns(SearchScope::default(), &[])
    }

    fn is_connected_without(&self, path: PathId, orphans: &[TownId]) -> bool {
        let scope = SearchScope {
            target: None,
            excluded_path: Some(path),
        };

        self.is_connected_without_towns(scope, orphans)
    }

    /// Grows a single search tree from the first remaining town in insertion order, the remaining
    /// towns are connected only if all of them are reached.
    fn is_connected_without_towns(&self, scope: SearchScope, removed: &[TownId]) -> bool {
        let remaining = self.town_count() - removed.len();

        let Some((origin, _)) = self.towns().find(|(t, _)| !removed.contains(t)) else {
            return true;
        };

        // only reachability matters here, any scalar criterion would do
        match search_tree(self, origin, Criterion::Time, scope) {
            Ok(tree) => tree.reached_count() == remaining,
            Err(error) => {
                warn!("Cannot verify connectivity from {origin}: {error}");
                false
            }
        }
    }

    fn validate_path(&self, a: TownId, b: TownId, length: u32, time: u32) -> Result<(), GraphError> {
        let start = self.name_of(a)?;
        let destination = self.name_of(b)?;

        if a == b {
            return Err(GraphError::SelfLoop(start));
        }

        if length == 0 || time == 0 {
            return Err(GraphError::InvalidWeight { length, time });
        }

        if self.find_path(a, b).is_some() {
            return Err(GraphError::DuplicatePath(start, destination));
        }

        Ok(())
    }

    fn push_path(&mut self, start: TownId, destination: TownId, length: u32, time: u32) -> PathId {
        let path = PathId(self.paths.len() as u32);
        info!("Adding path {path} between {start} and {destination} ({length} km, {time} min)");

        self.paths.push(Some(Path {
            start,
            destination,
            length,
            time,
        }));
        self.path_index.insert(PathKey::new(start, destination), path);

        for (town, other) in [(start, destination), (destination, start)] {
            if let Some(Some(town)) = self.towns.get_mut(town.0 as usize) {
                town.add_neighbor(other, path);
            }
        }

        path
    }

    fn name_of(&self, town: TownId) -> Result<TownName, GraphError> {
        self.town_name(town)
            .cloned()
            .ok_or(GraphError::TownNotFound(town))
    }
}

#[cfg(test)]
pub mod tests {
    #![allow(clippy::panic)]

    mod network;

    pub use network::{chain_graph, diamond_graph, graph_from, town, triangle_graph};

    use test_log::test;

    use super::*;

    #[test]
    fn graph_add_town_001() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        assert!(graph.check_connected());

        let a = graph.add_town(TownName::new("Aachen").unwrap());
        let b = graph.add_town(TownName::new("Bonn").unwrap());
        assert_eq!(graph.add_town(TownName::new("AACHEN").unwrap()), a);

        assert_eq!(graph.town_count(), 2);
        assert_eq!(graph.find_town("aachen"), Some(a));
        assert_eq!(graph.find_town("BoNn"), Some(b));
        assert_eq!(graph.find_town("berlin"), None);
        assert_eq!(graph.find_town("not a name"), None);
        assert!(!graph.check_connected());
    }

    #[test]
    fn graph_add_path_001() {
        let graph = chain_graph();
        let [a, b, c] = ["a", "b", "c"].map(|name| town(&graph, name));

        let path = graph.find_path(a, b).unwrap();
        assert_eq!(graph.find_path(b, a), Some(path));
        assert_eq!(graph.find_path(a, c), None);
        assert_eq!(graph.path(path).unwrap().length, 1);

        let neighbors: Vec<_> = graph.neighbors(b).map(|(t, _)| t).collect();
        assert_eq!(neighbors, [a, c]);
        assert_eq!(graph.neighbors(TownId(99)).count(), 0);
        assert!(graph.check_connected());
    }

    #[test]
    fn graph_add_path_002() {
        let mut graph = chain_graph();
        let [a, b] = ["a", "b"].map(|name| town(&graph, name));
        let name = |n: &str| TownName::new(n).unwrap();

        assert_eq!(
            graph.add_path(b, a, 5, 5),
            Err(GraphError::DuplicatePath(name("b"), name("a")))
        );
        assert_eq!(graph.add_path(a, a, 5, 5), Err(GraphError::SelfLoop(name("a"))));
        assert_eq!(
            graph.add_path(a, TownId(99), 5, 5),
            Err(GraphError::TownNotFound(TownId(99)))
        );

        let c = town(&graph, "c");
        assert_eq!(
            graph.add_path(a, c, 0, 5),
            Err(GraphError::InvalidWeight { length: 0, time: 5 })
        );

        let before = chain_graph();
        assert_eq!(graph, before);
    }

    #[test]
    fn graph_insert_path_001() {
        let mut graph = chain_graph();
        let c = town(&graph, "c");
        let name = |n: &str| TownName::new(n).unwrap();

        // the new town keeps its place as destination
        let path = graph.insert_path(name("C"), name("D"), 3, 4).unwrap();
        let d = town(&graph, "d");
        assert_eq!(graph.find_path(c, d), Some(path));
        assert_eq!(graph.path(path).unwrap().start, c);
        assert!(graph.check_connected());

        // and as start
        let path = graph.insert_path(name("e"), name("a"), 5, 6).unwrap();
        let e = town(&graph, "e");
        assert_eq!(graph.path(path).unwrap().start, e);
        assert_eq!(graph.town_count(), 5);
        assert!(graph.check_connected());

        // both towns exist
        let path = graph.insert_path(name("a"), name("d"), 7, 8).unwrap();
        assert_eq!(graph.path(path).unwrap().length, 7);
        assert_eq!(graph.path_count(), 5);
    }

    #[test]
    fn graph_insert_path_002() {
        let mut graph = chain_graph();
        let before = graph.clone();
        let name = |n: &str| TownName::new(n).unwrap();

        assert_eq!(
            graph.insert_path(name("x"), name("y"), 1, 1),
            Err(GraphError::NoExistingTown(name("x"), name("y")))
        );
        assert_eq!(
            graph.insert_path(name("a"), name("e"), 0, 4),
            Err(GraphError::InvalidWeight { length: 0, time: 4 })
        );
        assert_eq!(
            graph.insert_path(name("a"), name("b"), 5, 5),
            Err(GraphError::DuplicatePath(name("a"), name("b")))
        );
        assert_eq!(
            graph.insert_path(name("a"), name("A"), 5, 5),
            Err(GraphError::SelfLoop(name("a")))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn graph_remove_path_001() {
        // a - b - c: removing b-c only orphans c
        let mut graph = chain_graph();
        let [a, b, c] = ["a", "b", "c"].map(|name| town(&graph, name));
        let path = graph.find_path(b, c).unwrap();

        graph.remove_path(path).unwrap();

        assert_eq!(graph.town_count(), 2);
        assert_eq!(graph.path_count(), 1);
        assert!(!graph.contains_town(c));
        assert_eq!(graph.find_town("c"), None);
        assert_eq!(graph.neighbors(b).map(|(t, _)| t).collect::<Vec<_>>(), [a]);
        assert!(graph.check_connected());

        assert_eq!(graph.remove_path(path), Err(GraphError::PathNotFound(path)));
    }

    #[test]
    fn graph_remove_path_002() {
        // a - b - c - d: removing b-c would split {a, b} from {c, d}
        let mut graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b", 1, 1), ("b", "c", 1, 1), ("c", "d", 1, 1)],
        );
        let [b, c] = ["b", "c"].map(|name| town(&graph, name));
        let path = graph.find_path(b, c).unwrap();
        let before = graph.clone();

        let name = |n: &str| TownName::new(n).unwrap();
        assert_eq!(
            graph.remove_path(path),
            Err(GraphError::NotConnected(name("b"), name("c")))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn graph_remove_path_003() {
        // removing a path of a cycle keeps every town
        let mut graph = triangle_graph();
        let [a, b, c] = ["a", "b", "c"].map(|name| town(&graph, name));
        let path = graph.find_path(a, b).unwrap();

        graph.remove_path(path).unwrap();

        assert_eq!(graph.town_count(), 3);
        assert_eq!(graph.path_count(), 2);
        assert_eq!(graph.find_path(a, b), None);
        assert!(!graph.town(a).unwrap().is_neighbor(b));
        assert!(graph.town(a).unwrap().is_neighbor(c));
        assert!(graph.check_connected());

        // the order of the remaining towns is preserved
        let names: Vec<_> = graph.towns().map(|(_, t)| t.name().as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn graph_remove_path_004() {
        // removing the only path orphans both towns and leaves an empty graph
        let mut graph = graph_from(&["a", "b"], &[("a", "b", 2, 3)]);
        let [a, b] = ["a", "b"].map(|name| town(&graph, name));

        graph.remove_path(graph.find_path(a, b).unwrap()).unwrap();

        assert!(graph.is_empty());
        assert_eq!(graph.path_count(), 0);
        assert!(graph.check_connected());
    }

    #[test]
    fn graph_check_connected_001() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b", 1, 1), ("c", "d", 1, 1)],
        );
        assert!(!graph.check_connected());

        let graph = graph_from(&["a", "b", "c"], &[("b", "c", 1, 1)]);
        assert!(!graph.check_connected());

        assert!(diamond_graph().check_connected());
    }
}
