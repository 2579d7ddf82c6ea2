use std::io::Write;

use crate::format::{FIELD_SEPARATOR, SEPARATOR};
use crate::graph::path::Path;
use crate::Graph;

/// Gets the lines of the graph definition: town names, the separator, then one line per path.
/// Towns and paths follow their insertion order. An empty graph has no lines.
pub fn definition_lines(graph: &Graph) -> impl Iterator<Item = String> + '_ {
    let towns = graph.towns().map(|(_, town)| town.name().to_string());
    let separator = (!graph.is_empty()).then(|| SEPARATOR.to_owned());
    let paths = graph.paths().filter_map(|(_, path)| path_line(graph, path));

    towns.chain(separator).chain(paths)
}

/// Serializes the graph into its textual definition, each line terminated by a newline.
pub fn serialize_definition(graph: &Graph) -> String {
    definition_lines(graph).fold(String::new(), |mut text, line| {
        text.push_str(&line);
        text.push('\n');
        text
    })
}

/// Writes the textual definition of the graph.
pub fn write_definition(graph: &Graph, mut writer: impl Write) -> std::io::Result<()> {
    for line in definition_lines(graph) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

fn path_line(graph: &Graph, path: &Path) -> Option<String> {
    let start = graph.town_name(path.start)?;
    let destination = graph.town_name(path.destination)?;
    let s = FIELD_SEPARATOR;

    Some(format!(
        "{start}{s}{destination}{s}{}{s}{}",
        path.length, path.time
    ))
}
