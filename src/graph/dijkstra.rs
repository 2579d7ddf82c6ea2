use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Criterion, Graph, GraphError, PathId, TownId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Current shortest distance from origin to this town.
    distance: u64,
    town: TownId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.town.cmp(&self.town))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path tree grown by a single Dijkstra run.
/// All the scratch state of the run lives here and never on the graph, so any number of searches
/// can read the same graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    origin: TownId,
    /// Shortest known distance from origin to the town (key).
    distances: FxHashMap<TownId, u64>,
    /// Previous town (value) on the best known route from origin to the town (key).
    predecessors: FxHashMap<TownId, TownId>,
}

impl SearchTree {
    pub const fn origin(&self) -> TownId {
        self.origin
    }

    /// Gets the distance from the origin, None if the town has not been reached.
    pub fn distance(&self, town: TownId) -> Option<u64> {
        self.distances.get(&town).copied()
    }

    pub fn is_reached(&self, town: TownId) -> bool {
        self.distances.contains_key(&town)
    }

    /// Number of towns reached by the search, the origin included.
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// Unpacks the route from destination back to origin.
    /// If the destination has not been reached the route only contains the destination.
    pub fn unpack_route(&self, destination: TownId) -> Vec<TownId> {
        let mut towns = vec![destination];
        let mut next = destination;

        while let Some(&town) = self.predecessors.get(&next) {
            next = town;
            towns.push(town);
        }

        towns.reverse();
        towns
    }
}

/// Which part of the graph a search explores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchScope {
    /// Stop as soon as the shortest distance to this town is known.
    pub target: Option<TownId>,
    /// Behave as if this path was not part of the graph.
    pub excluded_path: Option<PathId>,
}

/// Runs Dijkstra from the origin weighting the paths by the given criterion.
/// Only scalar criteria (route and time) are accepted.
pub fn search_tree(
    graph: &Graph,
    origin: TownId,
    criterion: Criterion,
    scope: SearchScope,
) -> Result<SearchTree, GraphError> {
    if !criterion.is_scalar() {
        return Err(GraphError::InvalidCriterion(criterion));
    }

    if !graph.contains_town(origin) {
        return Err(GraphError::TownNotFound(origin));
    }

    debug!("Computing {criterion} search tree from {origin} with {scope:?}");

    let mut tree = SearchTree {
        origin,
        distances: FxHashMap::from_iter([(origin, 0)]),
        predecessors: FxHashMap::default(),
    };

    // priority queue of discovered towns that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: 0,
        town: origin,
    }]);

    while let Some(element) = frontier.pop() {
        // check if we already know a cheaper way to get to this town from the origin
        let shortest_distance = tree.distance(element.town).unwrap_or(u64::MAX);
        if element.distance > shortest_distance {
            continue;
        }

        if scope.target == Some(element.town) {
            break;
        }

        for (neighbor, path) in graph.neighbors(element.town) {
            if scope.excluded_path == Some(path) {
                continue;
            }

            let Some(path) = graph.path(path) else {
                continue;
            };

            let distance = element.distance + path.weight(criterion)?;
            let shortest_distance = tree.distance(neighbor).unwrap_or(u64::MAX);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                // Relax: we have now found a better way that we are going to explore
                tree.distances.insert(neighbor, distance);
                tree.predecessors.insert(neighbor, element.town);
                frontier.push(HeapElement {
                    distance,
                    town: neighbor,
                });
            }
        }
    }

    debug!(
        "Search tree from {origin} reached {} of {} towns",
        tree.reached_count(),
        graph.town_count()
    );

    Ok(tree)
}
