//! Breadth-first and depth-first traversals.
//!
//! All traversals start from a single vertex and follow adjacency entries
//! (outgoing arcs in directed graphs). An unknown start vertex yields an
//! empty result.
//!
//! DFS comes in two flavours: [`dfs_recursive`] uses the call stack and is
//! guarded by [`TraversalConfig::max_depth`], [`dfs_iterative`] keeps its own
//! stack and has no depth limit.

use crate::{Graph, GraphError, Result};
use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use std::collections::VecDeque;
use std::hash::Hash;
use tracing::trace;

/// Default bound on the recursion depth of [`dfs_recursive`].
///
/// Fits a 2 MiB thread stack (the size test and spawned threads get) in
/// debug builds with room to spare.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Traversal configuration.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Deepest recursion level [`dfs_recursive`] may reach.
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TraversalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Progress reported by [`bfs_visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent<'a, V> {
    /// Vertex seen for the first time and put on the frontier.
    Discover(&'a V),
    /// Vertex taken off the frontier.
    Visit(&'a V),
}

/// Vertices reachable from `start`, including `start` itself.
pub fn bfs<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V) -> HashSet<V> {
    bfs_order(graph, start).into_iter().collect()
}

/// Vertices reachable from `start` in the order BFS dequeues them.
pub fn bfs_order<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut order = Vec::new();
    bfs_visit(graph, start, |event| {
        if let TraversalEvent::Visit(v) = event {
            order.push(v.clone());
        }
    });
    order
}

/// Runs BFS from `start` and reports every step to `visitor`.
pub fn bfs_visit<'a, V, F>(graph: &'a Graph<V>, start: &V, mut visitor: F)
where
    V: Clone + Eq + Hash,
    F: FnMut(TraversalEvent<'a, V>),
{
    let Some(s) = graph.index_of(start) else {
        return;
    };
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    trace!(start = s, "bfs started");
    bfs_walk(graph, s, &mut visited, |step| match step {
        Step::Discover(u) => visitor(TraversalEvent::Discover(graph.vertex(u))),
        Step::Visit(u) => {
            trace!(vertex = u, "bfs visit");
            visitor(TraversalEvent::Visit(graph.vertex(u)))
        }
    });
}

/// BFS over vertex indices returning the dequeue order.
///
/// Marks into a caller-owned `visited` set, so repeated calls can share it.
pub(crate) fn bfs_indices<V>(graph: &Graph<V>, s: usize, visited: &mut FixedBitSet) -> Vec<usize>
where
    V: Clone + Eq + Hash,
{
    let mut order = Vec::new();
    bfs_walk(graph, s, visited, |step| {
        if let Step::Visit(u) = step {
            order.push(u);
        }
    });
    order
}

enum Step {
    Discover(usize),
    Visit(usize),
}

fn bfs_walk<V, F>(graph: &Graph<V>, s: usize, visited: &mut FixedBitSet, mut on_step: F)
where
    V: Clone + Eq + Hash,
    F: FnMut(Step),
{
    // strict FIFO, otherwise the visit order is not level order
    let mut queue = VecDeque::new();
    visited.insert(s);
    on_step(Step::Discover(s));
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        on_step(Step::Visit(u));
        for v in graph.successors(u) {
            if !visited.contains(v) {
                visited.insert(v);
                on_step(Step::Discover(v));
                queue.push_back(v);
            }
        }
    }
}

/// Recursive DFS returning the discovery order.
///
/// Fails with [`GraphError::TooLarge`] once the recursion would go deeper
/// than `config.max_depth`.
pub fn dfs_recursive<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V, config: &TraversalConfig) -> Result<Vec<V>> {
    let Some(s) = graph.index_of(start) else {
        return Ok(Vec::new());
    };
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    dfs_visit(graph, s, 1, config.max_depth, &mut visited, &mut order)?;
    Ok(order.into_iter().map(|u| graph.vertex(u).clone()).collect())
}

fn dfs_visit<V: Clone + Eq + Hash>(
    graph: &Graph<V>,
    u: usize,
    depth: usize,
    limit: usize,
    visited: &mut FixedBitSet,
    order: &mut Vec<usize>,
) -> Result<()> {
    if depth > limit {
        return Err(GraphError::TooLarge {
            what: "DFS recursion depth",
            size: depth,
            limit,
        });
    }
    visited.insert(u);
    order.push(u);
    trace!(vertex = u, depth, "dfs visit");

    for v in graph.successors(u) {
        if !visited.contains(v) {
            dfs_visit(graph, v, depth + 1, limit, visited, order)?;
        }
    }
    Ok(())
}

/// DFS with an explicit stack, returning the discovery order.
///
/// Neighbors are pushed in reverse so that the first adjacency entry is
/// explored first.
pub fn dfs_iterative<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let Some(s) = graph.index_of(start) else {
        return Vec::new();
    };
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    let mut stack = vec![s];
    let mut pending = Vec::new();

    while let Some(u) = stack.pop() {
        if visited.contains(u) {
            continue;
        }
        visited.insert(u);
        order.push(graph.vertex(u).clone());
        trace!(vertex = u, "dfs visit");

        pending.extend(graph.successors(u).filter(|&v| !visited.contains(v)));
        while let Some(v) = pending.pop() {
            stack.push(v);
        }
    }

    order
}

/// Vertices reachable from `start` by DFS.
pub fn dfs_reachable<V: Clone + Eq + Hash>(graph: &Graph<V>, start: &V) -> HashSet<V> {
    dfs_iterative(graph, start).into_iter().collect()
}
