use crate::Graph;
use crate::traversal::bfs_indices;
use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Returns `true` if BFS from the first vertex reaches every vertex.
///
/// Graphs with at most one vertex are connected. For directed graphs this
/// follows outgoing arcs only, so it answers "is everything reachable from
/// the first vertex".
pub fn is_connected<V: Clone + Eq + Hash>(graph: &Graph<V>) -> bool {
    let n = graph.vertex_count();
    if n <= 1 {
        return true;
    }
    let mut visited = FixedBitSet::with_capacity(n);
    bfs_indices(graph, 0, &mut visited).len() == n
}

/// Connected components, one set per BFS run, in order of their first vertex.
pub fn connected_components<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Vec<HashSet<V>> {
    component_indices(graph)
        .into_iter()
        .map(|component| component.into_iter().map(|u| graph.vertex(u).clone()).collect())
        .collect()
}

pub(crate) fn component_indices<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut components = Vec::new();

    for u in 0..n {
        if !visited.contains(u) {
            components.push(bfs_indices(graph, u, &mut visited));
        }
    }

    debug!(vertices = n, components = components.len(), "connected components");
    components
}
