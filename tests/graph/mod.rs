mod network;

pub use network::{NETWORK_DEFINITION, NETWORK_GRAPH, town};
