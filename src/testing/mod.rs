pub mod fixtures;
pub mod graph_enumerator;
pub mod grids;
pub mod oracle;
pub mod random_graphs;
