use std::ops::Deref;

use crate::{Criterion, Graph, GraphError, TownId, TownName};

/// Ordered sequence of towns where every two consecutive towns are connected by a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(Vec<TownId>);

impl From<Vec<TownId>> for Route {
    fn from(towns: Vec<TownId>) -> Self {
        Self(towns)
    }
}

impl Deref for Route {
    type Target = [TownId];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Route {
    pub fn origin(&self) -> Option<TownId> {
        self.0.first().copied()
    }

    pub fn destination(&self) -> Option<TownId> {
        self.0.last().copied()
    }

    /// Returns true if the route doesn't leave its first town.
    pub fn is_trivial(&self) -> bool {
        self.0.len() < 2
    }

    pub fn into_towns(self) -> Vec<TownId> {
        self.0
    }

    /// Sums up the weights of the paths along the route for a scalar criterion.
    pub fn weight(&self, graph: &Graph, criterion: Criterion) -> Result<u64, GraphError> {
        let mut weight = 0;

        for window in self.0.windows(2) {
            let [a, b] = [window[0], window[1]];
            let path = graph
                .find_path(a, b)
                .and_then(|path| graph.path(path))
                .ok_or(GraphError::NotAdjacent(a, b))?;
            weight += path.weight(criterion)?;
        }

        Ok(weight)
    }

    /// Total length of the route in kilometers.
    pub fn length(&self, graph: &Graph) -> Result<u64, GraphError> {
        self.weight(graph, Criterion::Route)
    }

    /// Total time of the route in minutes.
    pub fn time(&self, graph: &Graph) -> Result<u64, GraphError> {
        self.weight(graph, Criterion::Time)
    }

    /// The metric minimized by the optimal route: time² + length².
    pub fn combined_weight(&self, graph: &Graph) -> Result<u128, GraphError> {
        let length = u128::from(self.length(graph)?);
        let time = u128::from(self.time(graph)?);
        Ok(time * time + length * length)
    }

    /// Gets the names of the towns along the route.
    pub fn names<'a>(&'a self, graph: &'a Graph) -> Result<Vec<&'a TownName>, GraphError> {
        self.0
            .iter()
            .map(|&town| graph.town_name(town).ok_or(GraphError::TownNotFound(town)))
            .collect()
    }
}
