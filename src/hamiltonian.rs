//! Hamiltonian paths and circuits by exhaustive backtracking.
//!
//! The search is exponential, so it refuses graphs with more than
//! [`HamiltonianConfig::max_vertices`] vertices.

use crate::{Graph, GraphError, Result};
use fixedbitset::FixedBitSet;
use std::hash::Hash;
use tracing::{debug, warn};

/// Default vertex ceiling of the search.
pub const DEFAULT_MAX_VERTICES: usize = 20;

#[derive(Debug, Clone)]
pub struct HamiltonianConfig {
    /// Largest graph the search will run on.
    pub max_vertices: usize,
}

impl Default for HamiltonianConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl HamiltonianConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

/// Backtracking search over simple paths. Works on directed and
/// undirected graphs.
pub struct Backtracking<'a, V> {
    graph: &'a Graph<V>,
    config: HamiltonianConfig,
}

impl<'a, V: Clone + Eq + Hash> Backtracking<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self::with_config(graph, HamiltonianConfig::default())
    }

    pub fn with_config(graph: &'a Graph<V>, config: HamiltonianConfig) -> Self {
        Backtracking { graph, config }
    }

    /// A path visiting every vertex once, trying every start vertex in turn.
    ///
    /// `Ok(vec![])` if there is none.
    pub fn path(&self) -> Result<Vec<V>> {
        let adjacency = self.adjacency()?;
        let found = (0..adjacency.len()).find_map(|start| search(&adjacency, start, |_, _| true));
        if found.is_none() {
            debug!(vertices = adjacency.len(), "no hamiltonian path");
        }
        Ok(self.to_vertices(found.unwrap_or_default()))
    }

    /// A circuit visiting every vertex once, returned with the first vertex
    /// repeated at the end.
    ///
    /// Any circuit passes through the first vertex, so only that start is
    /// tried. The closing arc must not be the edge the circuit left on,
    /// otherwise a single undirected edge would count as a circuit.
    pub fn circuit(&self) -> Result<Vec<V>> {
        let adjacency = self.adjacency()?;
        if adjacency.is_empty() {
            return Ok(Vec::new());
        }

        let closes = |path: &[usize], links: &[usize]| {
            let (start, last) = (path[0], path[path.len() - 1]);
            adjacency[last]
                .iter()
                .any(|&(v, id)| v == start && links.first() != Some(&id))
        };
        let Some(mut circuit) = search(&adjacency, 0, closes) else {
            debug!(vertices = adjacency.len(), "no hamiltonian circuit");
            return Ok(Vec::new());
        };
        circuit.push(0);
        Ok(self.to_vertices(circuit))
    }

    fn adjacency(&self) -> Result<Vec<Vec<(usize, usize)>>> {
        let n = self.graph.vertex_count();
        if n > self.config.max_vertices {
            warn!(vertices = n, limit = self.config.max_vertices, "graph too large for backtracking");
            return Err(GraphError::TooLarge {
                what: "Hamiltonian search",
                size: n,
                limit: self.config.max_vertices,
            });
        }
        Ok((0..n)
            .map(|u| self.graph.links(u).map(|(v, link)| (v, link.id)).collect())
            .collect())
    }

    fn to_vertices(&self, indices: Vec<usize>) -> Vec<V> {
        indices.into_iter().map(|u| self.graph.vertex(u).clone()).collect()
    }
}

/// Depth-first search over simple paths from `start`, returning the first
/// path covering every vertex that `accept` agrees to.
///
/// `accept` gets the path and the link ids walked along it.
fn search<F>(adjacency: &[Vec<(usize, usize)>], start: usize, accept: F) -> Option<Vec<usize>>
where
    F: Fn(&[usize], &[usize]) -> bool,
{
    let n = adjacency.len();
    let mut on_path = FixedBitSet::with_capacity(n);
    let mut path = vec![start];
    let mut links: Vec<usize> = Vec::new();
    // cursors[i] = next adjacency entry of path[i] to try
    let mut cursors = vec![0];
    on_path.insert(start);

    while let Some(&u) = path.last() {
        if path.len() == n && accept(path.as_slice(), links.as_slice()) {
            return Some(path);
        }

        let depth = path.len() - 1;
        let mut next = None;
        if path.len() < n {
            while let Some(&(v, id)) = adjacency[u].get(cursors[depth]) {
                cursors[depth] += 1;
                if !on_path.contains(v) {
                    next = Some((v, id));
                    break;
                }
            }
        }

        match next {
            Some((v, id)) => {
                on_path.insert(v);
                path.push(v);
                links.push(id);
                cursors.push(0);
            }
            None => {
                on_path.set(u, false);
                path.pop();
                links.pop();
                cursors.pop();
            }
        }
    }
    None
}
