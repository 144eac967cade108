//! Topological ordering of directed graphs.
//!
//! [`Kahn`] peels off vertices of in-degree zero, [`DfsTopologicalSort`]
//! reverses the DFS finishing order. A graph with a cycle has no ordering;
//! both then return an empty vector (and log a warning).

use crate::{Graph, Result, require_directed};
use std::collections::VecDeque;
use std::hash::Hash;
use tracing::{debug, warn};

/// Kahn's algorithm.
pub struct Kahn<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> Kahn<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Kahn topological sort", true)?;
        Ok(Kahn { graph })
    }

    /// Vertices in topological order, empty if the graph has a cycle.
    pub fn sort(&self) -> Vec<V> {
        match self.order() {
            Some(order) => order.into_iter().map(|u| self.graph.vertex(u).clone()).collect(),
            None => {
                warn!("graph contains a cycle, no topological order exists");
                Vec::new()
            }
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.order().is_none()
    }

    fn order(&self) -> Option<Vec<usize>> {
        let n = self.graph.vertex_count();

        // counted from adjacency (not the raw edge list) so that duplicate
        // input edges are decremented as often as they were counted
        let mut in_degree = vec![0usize; n];
        for u in 0..n {
            for v in self.graph.successors(u) {
                in_degree[v] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..n).filter(|&u| in_degree[u] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in self.graph.successors(u) {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        debug!(vertices = n, ordered = order.len(), "kahn finished");
        (order.len() == n).then_some(order)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Mark {
    White,
    Gray,
    Black,
}

/// DFS based topological sort with back-edge cycle detection.
///
/// Uses an explicit stack of `(vertex, remaining neighbors)` frames, so long
/// chains do not grow the call stack.
pub struct DfsTopologicalSort<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> DfsTopologicalSort<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "DFS topological sort", true)?;
        Ok(DfsTopologicalSort { graph })
    }

    /// Vertices in topological order, empty if the graph has a cycle.
    pub fn sort(&self) -> Vec<V> {
        match self.order() {
            Some(order) => order.into_iter().map(|u| self.graph.vertex(u).clone()).collect(),
            None => {
                warn!("graph contains a cycle, no topological order exists");
                Vec::new()
            }
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.order().is_none()
    }

    fn order(&self) -> Option<Vec<usize>> {
        let n = self.graph.vertex_count();
        let mut mark = vec![Mark::White; n];
        let mut finished = Vec::with_capacity(n);
        let mut stack = Vec::new();

        for s in 0..n {
            if mark[s] != Mark::White {
                continue;
            }
            mark[s] = Mark::Gray;
            stack.push((s, self.graph.successors(s)));

            while let Some((u, neighbors)) = stack.last_mut() {
                let u = *u;
                match neighbors.next() {
                    Some(v) => match mark[v] {
                        Mark::White => {
                            mark[v] = Mark::Gray;
                            stack.push((v, self.graph.successors(v)));
                        }
                        // back edge
                        Mark::Gray => {
                            debug!(from = u, to = v, "back edge found");
                            return None;
                        }
                        Mark::Black => {}
                    },
                    None => {
                        mark[u] = Mark::Black;
                        finished.push(u);
                        stack.pop();
                    }
                }
            }
        }

        // prepending on finish == reversing the finishing order
        finished.reverse();
        Some(finished)
    }
}
