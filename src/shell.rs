//! Line based interactive session on top of a graph.
//!
//! Every input line is parsed into a [`Command`] and executed against the graph. Replies are
//! written one line at a time, failed commands are reported as a single `Error, <message>` line
//! and the session goes on until `quit` or the end of the input.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::format::writer::definition_lines;
use crate::{
    AllPaths, CommandError, Criterion, Graph, GraphError, OptimalRoute, Route, ShortestRoute,
    TownId, shortest_path,
};

pub mod command;

pub use command::Command;

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

impl Reply {
    fn line(line: impl ToString) -> Self {
        Self::Lines(vec![line.to_string()])
    }
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
    graph: Graph,
}

impl Shell {
    pub const fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Reads commands from the input until `quit` or the end of the input.
    /// Only I/O errors end the session early.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            match self.execute_line(&line?) {
                Ok(Reply::Lines(lines)) => {
                    for line in lines {
                        writeln!(output, "{line}")?;
                    }
                }
                Ok(Reply::Quit) => break,
                Err(error) => writeln!(output, "Error, {error}")?,
            }
            output.flush()?;
        }

        info!("Session ended");
        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Reply, CommandError> {
        let command = line.parse()?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        debug!("Executing {command:?}");

        match command {
            Command::Quit => Ok(Reply::Quit),
            Command::Info => Ok(Self::non_empty(definition_lines(&self.graph).collect())),
            Command::Vertices => Ok(Self::non_empty(
                self.graph
                    .towns()
                    .map(|(_, town)| town.name().to_string())
                    .collect(),
            )),
            Command::Search {
                start,
                destination,
                criterion,
            } => self.search(&start, &destination, criterion),
            Command::Route {
                start,
                destination,
                criterion,
            } => self.route(&start, &destination, criterion),
            Command::Remove { start, destination } => {
                let (a, b) = (self.find_town(&start)?, self.find_town(&destination)?);
                let path = self
                    .graph
                    .find_path(a, b)
                    .ok_or(CommandError::PathNotFound(start, destination))?;

                self.graph.remove_path(path)?;
                Ok(Reply::line("OK"))
            }
            Command::Insert {
                start,
                destination,
                length,
                time,
            } => {
                self.graph.insert_path(start, destination, length, time)?;
                Ok(Reply::line("OK"))
            }
            Command::Nodes { town } => {
                let town = self.find_town(&town)?;
                let neighbors = self
                    .graph
                    .neighbors(town)
                    .map(|(neighbor, _)| self.name_of(neighbor))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Reply::Lines(neighbors))
            }
        }
    }

    fn search(
        &self,
        start: &str,
        destination: &str,
        criterion: Criterion,
    ) -> Result<Reply, CommandError> {
        let (origin, target) = (self.find_town(start)?, self.find_town(destination)?);

        if criterion == Criterion::Optimal {
            let optimal = self.optimal_route(origin, target)?;
            Ok(Reply::line(optimal.weight))
        } else {
            let shortest = self.shortest_route(origin, target, criterion)?;
            Ok(Reply::line(shortest.weight))
        }
    }

    fn route(
        &self,
        start: &str,
        destination: &str,
        criterion: Criterion,
    ) -> Result<Reply, CommandError> {
        let (origin, target) = (self.find_town(start)?, self.find_town(destination)?);

        let route = match criterion {
            Criterion::Time | Criterion::Route => {
                self.shortest_route(origin, target, criterion)?.route
            }
            Criterion::Optimal => self.optimal_route(origin, target)?.route,
            Criterion::All => {
                let mut all_paths = AllPaths::new(&self.graph, origin, target)?;
                let routes = all_paths.enumerate();
                if routes.is_empty() {
                    return Err(self.no_route(origin, target));
                }

                let lines = routes
                    .iter()
                    .map(|route| self.route_line(route))
                    .collect::<Result<_, _>>()?;
                return Ok(Reply::Lines(lines));
            }
        };

        Ok(Reply::line(self.route_line(&route)?))
    }

    fn shortest_route(
        &self,
        origin: TownId,
        target: TownId,
        criterion: Criterion,
    ) -> Result<ShortestRoute, CommandError> {
        let shortest = shortest_path(&self.graph, origin, target, criterion)?;

        if origin != target && shortest.route.origin() != Some(origin) {
            return Err(self.no_route(origin, target));
        }
        Ok(shortest)
    }

    fn optimal_route(&self, origin: TownId, target: TownId) -> Result<OptimalRoute, CommandError> {
        let mut all_paths = AllPaths::new(&self.graph, origin, target)?;

        match all_paths.find_optimal_route()? {
            Some(optimal) => Ok(optimal.clone()),
            None => Err(self.no_route(origin, target)),
        }
    }

    /// Town names of the route, separated by a space.
    fn route_line(&self, route: &Route) -> Result<String, CommandError> {
        let names = route.names(&self.graph)?;
        Ok(names
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn find_town(&self, name: &str) -> Result<TownId, CommandError> {
        self.graph
            .find_town(name)
            .ok_or_else(|| CommandError::UnknownTown(name.to_owned()))
    }

    fn name_of(&self, town: TownId) -> Result<String, CommandError> {
        match self.graph.town_name(town) {
            Some(name) => Ok(name.to_string()),
            None => Err(GraphError::TownNotFound(town).into()),
        }
    }

    fn no_route(&self, origin: TownId, target: TownId) -> CommandError {
        let name = |town| {
            self.graph
                .town_name(town)
                .map_or_else(|| town.to_string(), ToString::to_string)
        };
        CommandError::NoRoute(name(origin), name(target))
    }

    // an empty reply still prints one empty line
    fn non_empty(lines: Vec<String>) -> Reply {
        if lines.is_empty() {
            Reply::line("")
        } else {
            Reply::Lines(lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::{chain_graph, diamond_graph, graph_from};
    use crate::TownName;

    /// Two triangles a-b-c and d-e-f joined by the bridge c-d.
    fn bridge_graph() -> Graph {
        graph_from(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b", 1, 1),
                ("b", "c", 1, 1),
                ("c", "a", 1, 1),
                ("c", "d", 2, 2),
                ("d", "e", 1, 1),
                ("e", "f", 1, 1),
                ("f", "d", 1, 1),
            ],
        )
    }

    fn lines(reply: Result<Reply, CommandError>) -> Vec<String> {
        match reply {
            Ok(Reply::Lines(lines)) => lines,
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn shell_execute_001() {
        let mut shell = Shell::new(chain_graph());

        assert_eq!(lines(shell.execute_line("search A;C;route")), ["2"]);
        assert_eq!(lines(shell.execute_line("search a;c;time")), ["2"]);
        assert_eq!(lines(shell.execute_line("search a;c;optimal")), ["8"]);
        assert_eq!(lines(shell.execute_line("route A;C;all")), ["a b c"]);
        assert_eq!(lines(shell.execute_line("route a;c;route")), ["a b c"]);
        assert_eq!(lines(shell.execute_line("route c;a;optimal")), ["c b a"]);
        assert_eq!(shell.execute_line("quit"), Ok(Reply::Quit));
    }

    #[test]
    fn shell_execute_002() {
        let mut shell = Shell::new(diamond_graph());

        assert_eq!(lines(shell.execute_line("route a;d;route")), ["a b d"]);
        assert_eq!(lines(shell.execute_line("route a;d;time")), ["a c d"]);
        assert_eq!(lines(shell.execute_line("search a;d;time")), ["4"]);
        assert_eq!(
            lines(shell.execute_line("route a;d;all")),
            ["a b d", "a c d"]
        );
        // a b d: 2² + 8², a c d: 9² + 4²
        assert_eq!(lines(shell.execute_line("search a;d;optimal")), ["68"]);
        assert_eq!(lines(shell.execute_line("nodes A")), ["b", "c"]);
        assert_eq!(lines(shell.execute_line("vertices")), ["a", "b", "c", "d"]);
        assert_eq!(
            lines(shell.execute_line("info")),
            ["a", "b", "c", "d", "--", "a;b;1;3", "a;c;5;1", "b;d;1;5", "c;d;4;3"]
        );
    }

    #[test]
    fn shell_execute_003() {
        let mut shell = Shell::new(chain_graph());

        assert_eq!(
            shell.execute_line("search x;y;optimal"),
            Err(CommandError::UnknownTown("x".into()))
        );
        assert_eq!(
            shell.execute_line("route a;y;time"),
            Err(CommandError::UnknownTown("y".into()))
        );
        assert_eq!(
            shell.execute_line("nodes x"),
            Err(CommandError::UnknownTown("x".into()))
        );
        assert_eq!(
            shell.execute_line("remove a;c"),
            Err(CommandError::PathNotFound("a".into(), "c".into()))
        );
    }

    #[test]
    fn shell_execute_004() {
        let mut shell = Shell::new(chain_graph());
        let before = shell.graph().clone();

        assert_eq!(
            shell.execute_line("insert a;b;5;5"),
            Err(GraphError::DuplicatePath(
                TownName::new("a").unwrap(),
                TownName::new("b").unwrap()
            )
            .into())
        );
        assert_eq!(
            shell.execute_line("insert x;y;5;5"),
            Err(GraphError::NoExistingTown(
                TownName::new("x").unwrap(),
                TownName::new("y").unwrap()
            )
            .into())
        );
        assert_eq!(shell.graph(), &before);

        assert_eq!(lines(shell.execute_line("insert c;Dorf;5;6")), ["OK"]);
        assert_eq!(lines(shell.execute_line("insert a;c;1;1")), ["OK"]);
        assert_eq!(lines(shell.execute_line("nodes c")), ["b", "dorf", "a"]);
        assert_eq!(shell.graph().town_count(), 4);
        assert!(shell.graph().check_connected());
    }

    #[test]
    fn shell_execute_005() {
        let mut shell = Shell::new(bridge_graph());
        let before = shell.graph().clone();

        assert_eq!(
            shell.execute_line("remove c;d"),
            Err(GraphError::NotConnected(
                TownName::new("c").unwrap(),
                TownName::new("d").unwrap()
            )
            .into())
        );
        assert_eq!(shell.graph(), &before);

        assert_eq!(lines(shell.execute_line("remove a;b")), ["OK"]);
        assert_eq!(lines(shell.execute_line("route a;b;route")), ["a c b"]);

        // b is left with a single neighbor, removing its path drops the town
        assert_eq!(lines(shell.execute_line("remove b;c")), ["OK"]);
        assert_eq!(
            lines(shell.execute_line("vertices")),
            ["a", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn shell_execute_006() {
        let mut shell = Shell::new(chain_graph());

        // a route to the origin itself
        assert_eq!(lines(shell.execute_line("search a;a;time")), ["0"]);
        assert_eq!(lines(shell.execute_line("route a;a;route")), ["a"]);
        assert_eq!(
            shell.execute_line("route a;a;all"),
            Err(CommandError::NoRoute("a".into(), "a".into()))
        );
        assert_eq!(
            shell.execute_line("search a;a;optimal"),
            Err(CommandError::NoRoute("a".into(), "a".into()))
        );
    }

    #[test]
    fn shell_execute_007() {
        let mut shell = Shell::new(Graph::new());

        assert_eq!(lines(shell.execute_line("info")), [""]);
        assert_eq!(lines(shell.execute_line("vertices")), [""]);
        assert_eq!(shell.execute_line(""), Err(CommandError::Empty));
    }

    #[test]
    fn shell_run_001() {
        let mut shell = Shell::new(chain_graph());
        let input = "search a;c;route\nfly a;c\nroute a;c;all\nquit\nvertices\n";
        let mut output = Vec::new();

        shell.run(input.as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "2\nError, unknown command \"fly\", only quit, info, vertices, search, route, remove, insert and nodes are allowed\na b c\n"
        );
    }

    #[test]
    fn shell_run_002() {
        let mut shell = Shell::new(chain_graph());
        let mut output = Vec::new();

        // the session also ends with the input
        shell.run("remove b;c\r\ninfo".as_bytes(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "OK\na\nb\n--\na;b;1;1\n"
        );
    }
}
