use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::GraphError;

/// Name of a town, normalized to lowercase.
/// A valid name is non-empty and only contains the letters A-Z, a-z or a hyphen, so two names
/// that only differ in casing identify the same town.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TownName(String);

impl TownName {
    pub fn new(name: &str) -> Result<Self, GraphError> {
        if Self::is_valid(name) {
            Ok(Self(name.to_ascii_lowercase()))
        } else {
            Err(GraphError::InvalidTownName(name.to_owned()))
        }
    }

    /// Returns true if the name matches `[A-Za-z-]+`.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TownName {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::new(name)
    }
}

impl fmt::Display for TownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TownName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TownName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The weight dimension, or the algorithm mode, requested by a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Criterion {
    /// Find the route that needs the least amount of time.
    Time,
    /// Find the shortest route by length.
    Route,
    /// Find the route where length² + time² is minimal.
    Optimal,
    /// Find all the routes between two towns.
    All,
}

impl Criterion {
    /// Returns true if a path has a single weight for this criterion, that is the criterion can
    /// drive a shortest path search.
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Time | Self::Route)
    }
}
