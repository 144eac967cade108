//! Eulerian circuits of undirected graphs.

use crate::connectivity::component_indices;
use crate::{Graph, Result, require_directed};
use fixedbitset::FixedBitSet;
use std::hash::Hash;
use tracing::{debug, warn};

/// Hierholzer's algorithm.
///
/// Works on the de-duplicated adjacency: an edge added twice with the same
/// weight is walked once.
pub struct Hierholzer<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> Hierholzer<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Hierholzer", false)?;
        Ok(Hierholzer { graph })
    }

    /// Every degree is even and all edges sit in a single component.
    pub fn has_circuit(&self) -> bool {
        let n = self.graph.vertex_count();
        if let Some(u) = (0..n).find(|&u| self.degree(u) % 2 != 0) {
            debug!(vertex = u, degree = self.degree(u), "odd degree");
            return false;
        }

        // isolated vertices do not matter
        let relevant = component_indices(self.graph)
            .iter()
            .filter(|c| c.iter().any(|&u| self.degree(u) > 0))
            .count();
        if relevant > 1 {
            debug!(components = relevant, "edges spread over several components");
            return false;
        }
        true
    }

    /// The circuit as a vertex sequence whose first and last entries are
    /// equal. Empty if no circuit exists or the graph has no edges.
    pub fn circuit(&self) -> Vec<V> {
        if !self.has_circuit() {
            warn!("graph has no Eulerian circuit");
            return Vec::new();
        }
        let n = self.graph.vertex_count();
        let Some(start) = (0..n).find(|&u| self.degree(u) > 0) else {
            return Vec::new();
        };

        // private copy of the adjacency, consumed through per-vertex cursors
        let adjacency: Vec<Vec<(usize, usize)>> = (0..n)
            .map(|u| self.graph.links(u).map(|(v, link)| (v, link.id)).collect())
            .collect();
        let mut cursor = vec![0; n];
        let mut used = FixedBitSet::with_capacity(self.graph.link_count());

        let mut path = vec![start];
        let mut circuit = Vec::new();
        while let Some(&u) = path.last() {
            // skip links already walked from the other side
            while cursor[u] < adjacency[u].len() && used.contains(adjacency[u][cursor[u]].1) {
                cursor[u] += 1;
            }
            match adjacency[u].get(cursor[u]) {
                Some(&(v, id)) => {
                    used.insert(id);
                    cursor[u] += 1;
                    path.push(v);
                }
                None => {
                    path.pop();
                    circuit.push(u);
                }
            }
        }
        circuit.reverse();

        debug!(length = circuit.len(), "hierholzer finished");
        circuit.into_iter().map(|u| self.graph.vertex(u).clone()).collect()
    }

    // a self-loop adds 2
    fn degree(&self, u: usize) -> usize {
        self.graph
            .links(u)
            .map(|(v, _)| if v == u { 2 } else { 1 })
            .sum()
    }
}
