use std::str::FromStr;

use crate::format::FIELD_SEPARATOR;
use crate::{CommandError, Criterion, GraphError, TownName};

/// A single line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Prints the graph in its definition format.
    Info,
    /// Prints the town names.
    Vertices,
    /// Prints the weight of the best route.
    Search {
        start: String,
        destination: String,
        criterion: Criterion,
    },
    /// Prints the best route, or every route for [`Criterion::All`].
    Route {
        start: String,
        destination: String,
        criterion: Criterion,
    },
    Remove {
        start: String,
        destination: String,
    },
    Insert {
        start: TownName,
        destination: TownName,
        length: u32,
        time: u32,
    },
    /// Prints the neighbors of a town.
    Nodes { town: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, Some(argument)),
            None => (line, None),
        };

        match name {
            "quit" => no_argument("quit", argument).map(|_| Self::Quit),
            "info" => no_argument("info", argument).map(|_| Self::Info),
            "vertices" => no_argument("vertices", argument).map(|_| Self::Vertices),
            "search" => {
                let [start, destination, criterion] = arguments::<3>("search", argument)?;
                let criterion = parse_criterion(criterion)?;

                if criterion == Criterion::All {
                    return Err(CommandError::UnsupportedCriterion {
                        command: "search",
                        criterion,
                    });
                }

                Ok(Self::Search {
                    start: start.to_owned(),
                    destination: destination.to_owned(),
                    criterion,
                })
            }
            "route" => {
                let [start, destination, criterion] = arguments::<3>("route", argument)?;
                Ok(Self::Route {
                    start: start.to_owned(),
                    destination: destination.to_owned(),
                    criterion: parse_criterion(criterion)?,
                })
            }
            "remove" => {
                let [start, destination] = arguments::<2>("remove", argument)?;
                Ok(Self::Remove {
                    start: start.to_owned(),
                    destination: destination.to_owned(),
                })
            }
            "insert" => {
                let [start, destination, length, time] = arguments::<4>("insert", argument)?;
                let start = TownName::new(start)?;
                let destination = TownName::new(destination)?;

                if start == destination {
                    return Err(GraphError::SelfLoop(start).into());
                }

                let (length, time) = (parse_number(length)?, parse_number(time)?);
                if length == 0 || time == 0 {
                    return Err(GraphError::InvalidWeight { length, time }.into());
                }

                Ok(Self::Insert {
                    start,
                    destination,
                    length,
                    time,
                })
            }
            "nodes" => {
                let [town] = arguments::<1>("nodes", argument)?;
                Ok(Self::Nodes {
                    town: town.to_owned(),
                })
            }
            _ => Err(CommandError::UnknownCommand(name.to_owned())),
        }
    }
}

fn no_argument(command: &'static str, argument: Option<&str>) -> Result<(), CommandError> {
    match argument {
        Some(_) => Err(CommandError::UnexpectedArgument(command)),
        None => Ok(()),
    }
}

/// Splits the argument into exactly `N` fields.
fn arguments<'a, const N: usize>(
    command: &'static str,
    argument: Option<&'a str>,
) -> Result<[&'a str; N], CommandError> {
    let argument = argument.ok_or(CommandError::MissingArgument(command))?;
    let fields: Vec<&str> = argument.split(FIELD_SEPARATOR).collect();

    <[&str; N]>::try_from(fields).map_err(|fields| CommandError::ArgumentCount {
        command,
        expected: N,
        found: fields.len(),
    })
}

fn parse_criterion(value: &str) -> Result<Criterion, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidCriterion(value.to_owned()))
}

fn parse_number(value: &str) -> Result<u32, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_owned()))
}
