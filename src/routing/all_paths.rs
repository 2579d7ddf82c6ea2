use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{Graph, GraphError, Route, TownId};

/// The route with the minimal combined weight time² + length² among all the routes between two
/// towns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalRoute {
    pub route: Route,
    /// Total length in kilometers.
    pub length: u64,
    /// Total time in minutes.
    pub time: u64,
    /// time² + length²
    pub weight: u128,
}

/// Enumerates all the simple routes between two towns with a depth first search, and selects the
/// optimal one among them.
///
/// The number of routes grows exponentially with the size of the graph, the enumeration is meant
/// for small graphs.
#[derive(Debug, Clone)]
pub struct AllPaths<'a> {
    graph: &'a Graph,
    origin: TownId,
    destination: TownId,
    routes: Option<Vec<Route>>,
    optimal: Option<Option<OptimalRoute>>,
}

impl<'a> AllPaths<'a> {
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
            routes: None,
            optimal: None,
        })
    }

    pub const fn origin(&self) -> TownId {
        self.origin
    }

    pub const fn destination(&self) -> TownId {
        self.destination
    }

    /// Finds every route from origin to destination that doesn't visit a town twice.
    /// Routes are returned in discovery order, neighbors are explored in insertion order.
    /// The enumeration only runs once, later calls return the same routes.
    pub fn enumerate(&mut self) -> &[Route] {
        let (graph, origin, destination) = (self.graph, self.origin, self.destination);

        self.routes.get_or_insert_with(|| {
            debug!("Enumerating all routes {origin} -> {destination}");

            let mut explorer = Explorer {
                graph,
                destination,
                visited: FxHashSet::default(),
                branch: Vec::new(),
                routes: Vec::new(),
            };
            explorer.explore(origin);

            debug!("Found {} routes {origin} -> {destination}", explorer.routes.len());
            explorer.routes
        })
    }

    /// Gets the enumerated routes.
    pub fn routes(&self) -> Result<&[Route], GraphError> {
        self.routes.as_deref().ok_or(GraphError::NotCalculated)
    }

    /// Selects the route minimizing time² + length², enumerating the routes first if needed.
    /// Among routes with the same weight the first one found is kept.
    /// Returns None if there is no route between origin and destination.
    pub fn find_optimal_route(&mut self) -> Result<Option<&OptimalRoute>, GraphError> {
        if self.optimal.is_none() {
            let graph = self.graph;
            let mut optimal: Option<OptimalRoute> = None;

            for route in self.enumerate() {
                let length = route.length(graph)?;
                let time = route.time(graph)?;
                let weight = u128::from(time).pow(2) + u128::from(length).pow(2);

                if optimal.as_ref().is_none_or(|best| weight < best.weight) {
                    optimal = Some(OptimalRoute {
                        route: route.clone(),
                        length,
                        time,
                        weight,
                    });
                }
            }

            debug!("Optimal route {} -> {}: {optimal:?}", self.origin, self.destination);
            self.optimal = Some(optimal);
        }

        Ok(self.optimal.as_ref().and_then(Option::as_ref))
    }
}

/// Depth first search state of a single branch.
/// Towns are marked as visited on the way down and unmarked when backtracking, so that sibling
/// branches can go through the same towns.
struct Explorer<'a> {
    graph: &'a Graph,
    destination: TownId,
    visited: FxHashSet<TownId>,
    branch: Vec<TownId>,
    routes: Vec<Route>,
}

impl Explorer<'_> {
    fn explore(&mut self, town: TownId) {
        self.visited.insert(town);
        self.branch.push(town);

        let graph = self.graph;
        for (neighbor, _) in graph.neighbors(town) {
            if self.visited.contains(&neighbor) {
                continue;
            }

            if neighbor == self.destination {
                // a complete route: never continue past the destination
                let mut route = self.branch.clone();
                route.push(neighbor);
                self.routes.push(Route::from(route));
            } else {
                self.explore(neighbor);
            }
        }

        self.branch.pop();
        self.visited.remove(&town);
    }
}
