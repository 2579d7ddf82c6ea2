use crate::{Criterion, GraphError, TownId};

/// Undirected edge of the graph.
/// Start and destination only keep the order the path was inserted with, (a, b) and (b, a)
/// denote the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path {
    pub start: TownId,
    pub destination: TownId,
    /// Length in kilometers.
    pub length: u32,
    /// Travel time in minutes.
    pub time: u32,
}

impl Path {
    /// Gets the weight of the path for a scalar criterion: the length for [`Criterion::Route`]
    /// and the time for [`Criterion::Time`].
    pub fn weight(&self, criterion: Criterion) -> Result<u64, GraphError> {
        match criterion {
            Criterion::Route => Ok(self.length as u64),
            Criterion::Time => Ok(self.time as u64),
            Criterion::Optimal | Criterion::All => Err(GraphError::InvalidCriterion(criterion)),
        }
    }

    /// Returns true if the path connects the two towns, in any direction.
    pub fn connects(&self, a: TownId, b: TownId) -> bool {
        self.key() == PathKey::new(a, b)
    }

    /// Gets the other end of the path, None if the town is not one of its ends.
    pub fn opposite(&self, town: TownId) -> Option<TownId> {
        if town == self.start {
            Some(self.destination)
        } else if town == self.destination {
            Some(self.start)
        } else {
            None
        }
    }

    pub(crate) fn key(&self) -> PathKey {
        PathKey::new(self.start, self.destination)
    }
}

/// Unordered pair of towns, identifies a path regardless of its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PathKey(TownId, TownId);

impl PathKey {
    pub(crate) fn new(a: TownId, b: TownId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}
