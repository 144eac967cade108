use super::MinimumSpanningForest;
use crate::{DisjointSet, Edge, Graph, Result, require_directed};
use std::hash::Hash;
use tracing::{debug, trace};

/// Borůvka's algorithm: in every round each component picks its cheapest
/// leaving edge, then all picks are merged at once.
pub struct Boruvka<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> Boruvka<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Boruvka", false)?;
        Ok(Boruvka { graph })
    }
}

impl<V: Clone + Eq + Hash> MinimumSpanningForest<V> for Boruvka<'_, V> {
    fn mst(&self) -> Vec<Edge<V>> {
        let n = self.graph.vertex_count();
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        if n == 0 {
            return tree;
        }

        let edges = self.graph.edge_records();
        let mut components = DisjointSet::new(0..n);
        let mut rounds = 0;

        while components.component_count() > 1 && tree.len() < n - 1 {
            // cheapest[root] = index into `edges`; among equal weights the first one stays
            let mut cheapest: Vec<Option<usize>> = vec![None; n];
            for (i, &(u, v, w)) in edges.iter().enumerate() {
                let (ru, rv) = (components.root(u), components.root(v));
                if ru == rv {
                    continue;
                }
                for r in [ru, rv] {
                    match cheapest[r] {
                        Some(j) if edges[j].2 <= w => {}
                        _ => cheapest[r] = Some(i),
                    }
                }
            }

            let mut added = false;
            for i in cheapest.into_iter().flatten() {
                let (u, v, w) = edges[i];
                // two components may have picked the same edge
                if components.merge(u, v) {
                    tree.push(self.graph.owned_edge(u, v, w));
                    added = true;
                }
            }

            rounds += 1;
            trace!(round = rounds, components = components.component_count(), "boruvka round");
            if !added {
                break;
            }
        }

        debug!(vertices = n, tree_edges = tree.len(), rounds, "boruvka finished");
        tree
    }
}
