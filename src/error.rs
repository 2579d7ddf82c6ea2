use std::io::ErrorKind;

use thiserror::Error;

use crate::{Criterion, PathId, TownId, TownName};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("the graph does not contain town {0}")]
    TownNotFound(TownId),
    #[error("the graph does not contain path {0}")]
    PathNotFound(PathId),
    #[error("at least one of the towns {0} and {1} has to exist so that a path can be added")]
    NoExistingTown(TownName, TownName),
    #[error("a path between {0} and {1} already exists")]
    DuplicatePath(TownName, TownName),
    #[error("a path from {0} to itself is not allowed")]
    SelfLoop(TownName),
    #[error("length and time must both be greater than zero, got {length} and {time}")]
    InvalidWeight { length: u32, time: u32 },
    #[error("name of town must only contain letters A-Z, a-z or a hyphen: {0:?}")]
    InvalidTownName(String),
    #[error(
        "graph would not be connected anymore, the path between {0} and {1} has not been removed"
    )]
    NotConnected(TownName, TownName),
    #[error("criterion {0} has no scalar weight, choose 'route' or 'time'")]
    InvalidCriterion(Criterion),
    #[error("towns {0} and {1} are not connected by a path")]
    NotAdjacent(TownId, TownId),
    #[error("the route has not been calculated yet")]
    NotCalculated,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DefinitionError {
    #[error("definition I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("a line containing exactly '--' has to separate the towns from the paths")]
    MissingSeparator,
    #[error("at least {expected} towns have to be listed before the '--' separator, found {found}")]
    TooFewTowns { expected: usize, found: usize },
    #[error("at least {expected} paths have to be listed after the '--' separator, found {found}")]
    TooFewPaths { expected: usize, found: usize },
    #[error("line {line}: name of town must only contain letters A-Z, a-z or a hyphen: {name:?}")]
    InvalidTownName { line: usize, name: String },
    #[error("line {line}: duplicate town {name}")]
    DuplicateTown { line: usize, name: String },
    #[error("line {line}: a path needs exactly 4 semicolon-separated fields, found {count}")]
    FieldCount { line: usize, count: usize },
    #[error("line {line}: town {name:?} is not listed in the first part of the file")]
    UnknownTown { line: usize, name: String },
    #[error("line {line}: {value:?} is not a valid positive integer")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: {source}")]
    Path { line: usize, source: GraphError },
    #[error("the graph is not connected")]
    NotConnected,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CommandError {
    #[error("please enter a command")]
    Empty,
    #[error(
        "unknown command {0:?}, only quit, info, vertices, search, route, remove, insert and nodes are allowed"
    )]
    UnknownCommand(String),
    #[error("{0} does not accept any parameter")]
    UnexpectedArgument(&'static str),
    #[error("{0} requires parameters, but none were provided")]
    MissingArgument(&'static str),
    #[error("{command} requires exactly {expected} semicolon-separated parameters, but {found} were provided")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid criterion {0:?}, choose 'time', 'route', 'optimal' or 'all'")]
    InvalidCriterion(String),
    #[error("criterion {criterion} is not supported by {command}")]
    UnsupportedCriterion {
        command: &'static str,
        criterion: Criterion,
    },
    #[error("{0:?} has to be an integer greater than 0 and smaller than 4294967296")]
    InvalidNumber(String),
    #[error("town {0} does not exist")]
    UnknownTown(String),
    #[error("there is no path between {0} and {1}")]
    PathNotFound(String, String),
    #[error("there is no route from {0} to {1}")]
    NoRoute(String, String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl From<std::io::Error> for DefinitionError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
