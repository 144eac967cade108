use super::MinimumSpanningForest;
use crate::{DisjointSet, Edge, Graph, Result, require_directed};
use std::hash::Hash;
use tracing::debug;

/// Kruskal's algorithm: global edge sort plus union-find.
pub struct Kruskal<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> Kruskal<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Kruskal", false)?;
        Ok(Kruskal { graph })
    }
}

impl<V: Clone + Eq + Hash> MinimumSpanningForest<V> for Kruskal<'_, V> {
    fn mst(&self) -> Vec<Edge<V>> {
        let n = self.graph.vertex_count();
        let mut edges = self.graph.edge_records().to_vec();
        // stable, so equal weights keep edge list order
        edges.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut components = DisjointSet::new(0..n);
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        for (u, v, w) in edges {
            if tree.len() == n.saturating_sub(1) {
                break;
            }
            if components.merge(u, v) {
                tree.push(self.graph.owned_edge(u, v, w));
            }
        }

        debug!(vertices = n, tree_edges = tree.len(), "kruskal finished");
        tree
    }
}
