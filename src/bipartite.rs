//! Bipartiteness via BFS two-coloring.
//!
//! Every component is colored separately, so disconnected graphs are
//! handled. The first edge with both endpoints on the same side stops the
//! whole check.

use crate::{Graph, Side};
use hashbrown::{HashMap, HashSet};
use std::collections::VecDeque;
use std::hash::Hash;
use tracing::{debug, warn};

/// Returns `true` if the vertices can be split into two sides with no edge inside a side.
pub fn is_bipartite<V: Clone + Eq + Hash>(graph: &Graph<V>) -> bool {
    side_indices(graph).is_some()
}

/// Side of every vertex, or `None` if the graph is not bipartite.
///
/// The first vertex of each component is put on [`Side::Left`].
pub fn two_coloring<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Option<HashMap<V, Side>> {
    let sides = side_indices(graph)?;
    Some(
        sides
            .into_iter()
            .enumerate()
            .map(|(u, side)| (graph.vertex(u).clone(), side))
            .collect(),
    )
}

/// The two sides `(left, right)`, or `None` if the graph is not bipartite.
pub fn partitions<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Option<(HashSet<V>, HashSet<V>)> {
    let sides = side_indices(graph)?;
    let mut left = HashSet::new();
    let mut right = HashSet::new();
    for (u, side) in sides.into_iter().enumerate() {
        match side {
            Side::Left => left.insert(graph.vertex(u).clone()),
            Side::Right => right.insert(graph.vertex(u).clone()),
        };
    }
    Some((left, right))
}

fn side_indices<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Option<Vec<Side>> {
    if graph.is_directed() {
        warn!("bipartiteness is usually checked on undirected graphs, arcs are followed forward only");
    }

    let n = graph.vertex_count();
    let mut side: Vec<Option<Side>> = vec![None; n];
    let mut queue = VecDeque::new();

    for s in 0..n {
        if side[s].is_some() {
            continue;
        }
        side[s] = Some(Side::Left);
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            let current = side[u]?;
            for v in graph.successors(u) {
                match side[v] {
                    None => {
                        side[v] = Some(current.opposite());
                        queue.push_back(v);
                    }
                    Some(other) if other == current => {
                        debug!(u, v, "edge inside one side, graph is not bipartite");
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    side.into_iter().collect()
}
