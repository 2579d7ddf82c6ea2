use crate::{PathId, TownId, TownName};

/// Vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Town {
    name: TownName,
    /// Neighboring towns and the paths leading to them, in insertion order.
    adjacency: Vec<(TownId, PathId)>,
}

impl Town {
    pub(crate) const fn new(name: TownName) -> Self {
        Self {
            name,
            adjacency: Vec::new(),
        }
    }

    pub const fn name(&self) -> &TownName {
        &self.name
    }

    /// Gets an iterator over the neighbors of this town.
    /// For each neighbor also returns the path that connects it to this town.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = (TownId, PathId)> + '_ {
        self.adjacency.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_neighbor(&self, town: TownId) -> bool {
        self.adjacency.iter().any(|&(t, _)| t == town)
    }

    pub(crate) fn add_neighbor(&mut self, town: TownId, path: PathId) {
        debug_assert!(!self.is_neighbor(town));
        self.adjacency.push((town, path));
    }

    pub(crate) fn remove_neighbor(&mut self, town: TownId) {
        self.adjacency.retain(|&(t, _)| t != town);
    }
}
