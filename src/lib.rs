// #![warn(missing_docs)]

//! # graph_algos
//!
//! A Rust library of classical graph algorithms working on one shared
//! graph representation:
//!
//! - minimum spanning trees (Kruskal, Prim, Borůvka),
//! - strongly connected components (Tarjan),
//! - topological ordering with cycle detection (Kahn, DFS),
//! - Eulerian circuits (Hierholzer),
//! - bipartiteness, connectivity and greedy coloring,
//! - Hamiltonian paths and circuits (backtracking).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph), which stores the vertex
//! and adjacency arenas.
//!
//! ```
//! use graph_algos::{Graph, mst::{Kruskal, MinimumSpanningForest, total_weight}};
//!
//! let g = Graph::from_edges(false, vec![("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)]);
//! let tree = Kruskal::new(&g).unwrap().mst();
//! assert_eq!(total_weight(&tree), 3.0);
//! ```

pub mod bipartite;
pub mod coloring;
pub mod connectivity;
pub mod euler;
pub mod graph;
pub mod hamiltonian;
pub mod input;
pub mod mst;
pub mod output;
pub mod scc;
pub mod toposort;
pub mod traversal;
pub mod types;
pub mod union_find;

#[cfg(test)]
pub(crate) mod testing;

pub use graph::Graph;
pub use types::{Edge, Neighbor, Side};
pub use union_find::DisjointSet;

/// Errors reported by graph algorithms.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The algorithm was constructed on a graph of the wrong kind.
    #[error("{algorithm} requires a {expected} graph")]
    WrongDirectedness {
        algorithm: &'static str,
        expected: &'static str,
    },

    /// Disjoint-set query with an element it was not built from.
    #[error("Element is not part of the disjoint set")]
    UnknownElement,

    /// Input exceeds a safety bound.
    #[error("{what} too large: {size} exceeds limit of {limit}")]
    TooLarge {
        what: &'static str,
        size: usize,
        limit: usize,
    },

    /// Malformed graph description.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

pub(crate) fn require_directed<V>(graph: &Graph<V>, algorithm: &'static str, directed: bool) -> Result<()>
where
    V: Clone + Eq + std::hash::Hash,
{
    if graph.is_directed() != directed {
        return Err(GraphError::WrongDirectedness {
            algorithm,
            expected: if directed { "directed" } else { "undirected" },
        });
    }
    Ok(())
}
