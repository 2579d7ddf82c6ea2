use std::path::Path;

use tracing::{debug, warn};

use crate::format::{FIELD_SEPARATOR, SEPARATOR};
use crate::{DefinitionError, Graph, TownName};

#[derive(Debug, Clone, Copy)]
pub struct DefinitionConfig {
    /// Minimum number of towns the first part of the definition has to list.
    pub min_towns: usize,
    /// Minimum number of paths the second part of the definition has to list.
    pub min_paths: usize,
}

impl Default for DefinitionConfig {
    fn default() -> Self {
        Self {
            min_towns: 2,
            min_paths: 1,
        }
    }
}

/// Reads a graph definition from a file.
pub fn read_definition_file(
    config: &DefinitionConfig,
    path: impl AsRef<Path>,
) -> Result<Graph, DefinitionError> {
    let path = path.as_ref();
    debug!("Reading graph definition from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    parse_definition(config, &text)
}

/// Parses a graph definition.
/// The resulting graph is always connected.
pub fn parse_definition(config: &DefinitionConfig, text: &str) -> Result<Graph, DefinitionError> {
    let lines: Vec<&str> = text.lines().collect();

    let separator = lines
        .iter()
        .position(|&line| line == SEPARATOR)
        .ok_or(DefinitionError::MissingSeparator)?;

    let (towns, paths) = (&lines[..separator], &lines[separator + 1..]);

    if towns.len() < config.min_towns {
        return Err(DefinitionError::TooFewTowns {
            expected: config.min_towns,
            found: towns.len(),
        });
    }

    let mut reader = DefinitionReader::default();
    reader.read_towns(towns)?;

    if paths.len() < config.min_paths {
        return Err(DefinitionError::TooFewPaths {
            expected: config.min_paths,
            found: paths.len(),
        });
    }

    // path lines come right after the separator
    reader.read_paths(paths, separator + 2)?;

    let graph = reader.graph;
    if !graph.check_connected() {
        warn!("Graph definition is not connected");
        return Err(DefinitionError::NotConnected);
    }

    debug!(
        "Read graph with {} towns and {} paths",
        graph.town_count(),
        graph.path_count()
    );

    Ok(graph)
}

#[derive(Debug, Default)]
struct DefinitionReader {
    graph: Graph,
}

impl DefinitionReader {
    fn read_towns(&mut self, lines: &[&str]) -> Result<(), DefinitionError> {
        for (index, &name) in lines.iter().enumerate() {
            let line = index + 1;

            let town = TownName::new(name).map_err(|_| DefinitionError::InvalidTownName {
                line,
                name: name.to_owned(),
            })?;

            if self.graph.find_town(town.as_str()).is_some() {
                return Err(DefinitionError::DuplicateTown {
                    line,
                    name: town.to_string(),
                });
            }

            self.graph.add_town(town);
        }

        Ok(())
    }

    fn read_paths(&mut self, lines: &[&str], first_line: usize) -> Result<(), DefinitionError> {
        for (index, &fields) in lines.iter().enumerate() {
            let line = first_line + index;

            let fields: Vec<&str> = fields.split(FIELD_SEPARATOR).collect();
            let &[start, destination, length, time] = fields.as_slice() else {
                return Err(DefinitionError::FieldCount {
                    line,
                    count: fields.len(),
                });
            };

            let find_town = |name: &str| {
                self.graph
                    .find_town(name)
                    .ok_or_else(|| DefinitionError::UnknownTown {
                        line,
                        name: name.to_owned(),
                    })
            };
            let (start, destination) = (find_town(start)?, find_town(destination)?);

            let parse_number = |value: &str| {
                value
                    .parse::<u32>()
                    .map_err(|_| DefinitionError::InvalidNumber {
                        line,
                        value: value.to_owned(),
                    })
            };
            let (length, time) = (parse_number(length)?, parse_number(time)?);

            self.graph
                .add_path(start, destination, length, time)
                .map_err(|source| DefinitionError::Path { line, source })?;
        }

        Ok(())
    }
}
