use crate::{Graph, TownId, TownName};

/// Builds a graph from town names and `(start, destination, length, time)` paths.
pub fn graph_from(towns: &[&str], paths: &[(&str, &str, u32, u32)]) -> Graph {
    let mut graph = Graph::new();

    for &name in towns {
        graph.add_town(TownName::new(name).unwrap());
    }

    for &(start, destination, length, time) in paths {
        let start = town(&graph, start);
        let destination = town(&graph, destination);
        graph.add_path(start, destination, length, time).unwrap();
    }

    graph
}

pub fn town(graph: &Graph, name: &str) -> TownId {
    graph
        .find_town(name)
        .unwrap_or_else(|| panic!("town {name} not found"))
}

/// a - b - c
pub fn chain_graph() -> Graph {
    graph_from(&["a", "b", "c"], &[("a", "b", 1, 1), ("b", "c", 1, 1)])
}

/// a - b - c - a
pub fn triangle_graph() -> Graph {
    graph_from(
        &["a", "b", "c"],
        &[("a", "b", 1, 1), ("b", "c", 1, 1), ("c", "a", 1, 1)],
    )
}

/// ```text
///      (1, 3)  b  (1, 5)
///   a                   d
///      (5, 1)  c  (4, 3)
/// ```
/// Shortest by length: a b d (2). Shortest by time: a c d (4).
pub fn diamond_graph() -> Graph {
    graph_from(
        &["a", "b", "c", "d"],
        &[
            ("a", "b", 1, 3),
            ("a", "c", 5, 1),
            ("b", "d", 1, 5),
            ("c", "d", 4, 3),
        ],
    )
}
