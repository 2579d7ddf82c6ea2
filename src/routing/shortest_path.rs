use tracing::debug;

use crate::graph::dijkstra::{SearchScope, search_tree};
use crate::{Criterion, Graph, GraphError, Route, TownId};

/// Outcome of a shortest path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestRoute {
    pub criterion: Criterion,
    /// Total weight of the route, 0 if the destination could not be reached.
    pub weight: u64,
    /// Towns from origin to destination.
    /// Only contains the destination if the destination could not be reached.
    pub route: Route,
}

/// Dijkstra shortest path between two towns of a graph.
#[derive(Debug, Clone)]
pub struct ShortestPath<'a> {
    graph: &'a Graph,
    origin: TownId,
    destination: TownId,
    result: Option<ShortestRoute>,
}

impl<'a> ShortestPath<'a> {
    pub fn new(graph: &'a Graph, origin: TownId, destination: TownId) -> Result<Self, GraphError> {
        for town in [origin, destination] {
            if !graph.contains_town(town) {
                return Err(GraphError::TownNotFound(town));
            }
        }

        Ok(Self {
            graph,
            origin,
            destination,
            result: None,
        })
    }

    pub const fn origin(&self) -> TownId {
        self.origin
    }

    pub const fn destination(&self) -> TownId {
        self.destination
    }

    /// Computes the shortest route weighting each path by its length ([`Criterion::Route`]) or
    /// by its time ([`Criterion::Time`]). Any previous result is replaced.
    pub fn calculate(&mut self, criterion: Criterion) -> Result<&ShortestRoute, GraphError> {
        let (origin, destination) = (self.origin, self.destination);
        debug!("Computing {criterion} shortest path {origin} -> {destination}");

        let scope = SearchScope {
            target: Some(destination),
            excluded_path: None,
        };

        let tree = search_tree(self.graph, origin, criterion, scope)?;
        let route = Route::from(tree.unpack_route(destination));

        let weight = if route.origin() == Some(origin) {
            tree.distance(destination).unwrap_or_default()
        } else {
            debug!("{destination} cannot be reached from {origin}");
            0
        };

        Ok(self.result.insert(ShortestRoute {
            criterion,
            weight,
            route,
        }))
    }

    /// Gets the result of the last calculation.
    pub fn result(&self) -> Result<&ShortestRoute, GraphError> {
        self.result.as_ref().ok_or(GraphError::NotCalculated)
    }

    pub fn route(&self) -> Result<&Route, GraphError> {
        self.result().map(|result| &result.route)
    }

    pub fn weight(&self) -> Result<u64, GraphError> {
        self.result().map(|result| result.weight)
    }

    /// Returns true if the last calculation found a route from origin to destination.
    pub fn is_reached(&self) -> Result<bool, GraphError> {
        self.route()
            .map(|route| route.origin() == Some(self.origin))
    }
}

/// Computes the shortest route between two towns for a scalar criterion.
pub fn shortest_path(
    graph: &Graph,
    origin: TownId,
    destination: TownId,
    criterion: Criterion,
) -> Result<ShortestRoute, GraphError> {
    let mut search = ShortestPath::new(graph, origin, destination)?;
    search.calculate(criterion).cloned()
}
