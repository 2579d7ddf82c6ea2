use std::sync::LazyLock;

use townroute::{DefinitionConfig, Graph, TownId, parse_definition};

/// Towns around Stuttgart, lengths in kilometers and times in minutes.
pub const NETWORK_DEFINITION: &str = include_str!("../data/towns.txt");

pub static NETWORK_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    parse_definition(&DefinitionConfig::default(), NETWORK_DEFINITION)
        .expect("the network definition is valid")
});

pub fn town(graph: &Graph, name: &str) -> TownId {
    graph
        .find_town(name)
        .unwrap_or_else(|| panic!("{name} is not part of the graph"))
}
