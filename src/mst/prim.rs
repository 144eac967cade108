use super::MinimumSpanningForest;
use crate::{Edge, Graph, Result, require_directed};
use fixedbitset::FixedBitSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use tracing::debug;

/// Prim's algorithm: grows a tree from the first vertex using a priority queue
/// of frontier arcs, then from the first vertex not covered yet, and so on.
pub struct Prim<'a, V> {
    graph: &'a Graph<V>,
}

/// Arc leaving the current tree. Ordered so that `BinaryHeap` pops the lightest
/// one first, older arcs first among equal weights.
struct Candidate {
    weight: f64,
    seq: usize,
    from: usize,
    to: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<'a, V: Clone + Eq + Hash> Prim<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Prim", false)?;
        Ok(Prim { graph })
    }

    /// Minimum spanning forest: restarts the tree growth from every vertex
    /// not covered yet, so disconnected graphs get one tree per component.
    ///
    /// [`Prim::component_tree`] stops after the first component.
    pub fn forest(&self) -> Vec<Edge<V>> {
        let n = self.graph.vertex_count();
        let mut in_tree = FixedBitSet::with_capacity(n);
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        for root in 0..n {
            if !in_tree.contains(root) {
                self.grow(root, &mut in_tree, &mut tree);
            }
        }
        debug!(vertices = n, tree_edges = tree.len(), "prim forest finished");
        tree
    }

    /// Tree of the first vertex's component only.
    pub fn component_tree(&self) -> Vec<Edge<V>> {
        let n = self.graph.vertex_count();
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        if n == 0 {
            return tree;
        }
        let mut in_tree = FixedBitSet::with_capacity(n);
        self.grow(0, &mut in_tree, &mut tree);
        debug!(vertices = n, tree_edges = tree.len(), "prim finished");
        tree
    }

    fn grow(&self, root: usize, in_tree: &mut FixedBitSet, tree: &mut Vec<Edge<V>>) {
        let limit = self.graph.vertex_count().saturating_sub(1);
        let mut heap = BinaryHeap::new();
        let mut seq = 0;

        in_tree.insert(root);
        self.push_frontier(root, in_tree, &mut heap, &mut seq);

        while tree.len() < limit {
            let Some(candidate) = heap.pop() else {
                break;
            };
            if in_tree.contains(candidate.to) {
                continue;
            }
            in_tree.insert(candidate.to);
            tree.push(
                self.graph
                    .owned_edge(candidate.from, candidate.to, candidate.weight),
            );
            self.push_frontier(candidate.to, in_tree, &mut heap, &mut seq);
        }
    }

    fn push_frontier(&self, u: usize, in_tree: &FixedBitSet, heap: &mut BinaryHeap<Candidate>, seq: &mut usize) {
        for (v, link) in self.graph.links(u) {
            if !in_tree.contains(v) {
                heap.push(Candidate {
                    weight: link.weight,
                    seq: *seq,
                    from: u,
                    to: v,
                });
                *seq += 1;
            }
        }
    }
}

impl<V: Clone + Eq + Hash> MinimumSpanningForest<V> for Prim<'_, V> {
    /// Same as [`Prim::forest`].
    fn mst(&self) -> Vec<Edge<V>> {
        self.forest()
    }
}
