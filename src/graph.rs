use crate::types::{Edge, Neighbor};
use hashbrown::HashMap;
use petgraph::Directed;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::hash::Hash;

/// Payload stored on every adjacency entry (arc) of the arena.
///
/// Both arcs of one undirected edge carry the same `id`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Link {
    pub weight: f64,
    pub id: usize,
}

type Arena<V> = petgraph::graph::Graph<V, Link, Directed>;

/// Adjacency representation shared by every algorithm in the crate.
///
/// Vertices are values of any hashable type. Internally they live in a
/// petgraph arena and are addressed by index, so algorithms work on plain
/// `usize` handles and translate back to `V` only when building results.
///
/// <div class="warning">
///
/// > Neighbors are yielded most recently inserted first (petgraph keeps its
/// > adjacency lists that way). The order is stable for the life of the graph.
///
/// </div>
///
/// Adjacency entries are de-duplicated on `(neighbor, weight)`, while the
/// global edge list keeps every edge exactly as it was added.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    directed: bool,
    arena: Arena<V>,
    index: HashMap<V, NodeIndex>,
    // (origin, destination, weight) in insertion order, duplicates retained
    edge_list: Vec<(usize, usize, f64)>,
    link_count: usize,
}

impl<V: Clone + Eq + Hash> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            arena: Arena::default(),
            index: HashMap::new(),
            edge_list: Vec::new(),
            link_count: 0,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    /// Builds a graph from `(origin, destination, weight)` triples.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new(directed);
        for (u, v, w) in edges {
            graph.add_weighted_edge(u, v, w);
        }
        graph
    }

    /// Adds a vertex, returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.ensure_vertex(vertex);
        true
    }

    /// Adds an edge of weight 1.0.
    pub fn add_edge(&mut self, origin: V, destination: V) {
        self.add_weighted_edge(origin, destination, 1.0);
    }

    /// Adds an edge, creating missing endpoints on the way.
    ///
    /// In an undirected graph the reverse adjacency entry is added as well.
    pub fn add_weighted_edge(&mut self, origin: V, destination: V, weight: f64) {
        let a = self.ensure_vertex(origin);
        let b = self.ensure_vertex(destination);
        self.edge_list.push((a.index(), b.index(), weight));

        // arcs of undirected edges are always inserted in pairs, so checking
        // one direction is enough
        if self.has_arc(a, b, weight) {
            return;
        }

        let link = Link {
            weight,
            id: self.link_count,
        };
        self.link_count += 1;
        self.arena.add_edge(a, b, link);
        if !self.directed && a != b {
            self.arena.add_edge(b, a, link);
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Number of edges in the global edge list, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.arena.node_indices().map(move |n| &self.arena[n])
    }

    /// Adjacency list of `vertex`. Unknown vertices have no neighbors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = Neighbor<'a, V>> + use<'a, V> {
        let node = self.index.get(vertex).copied();
        node.into_iter()
            .flat_map(move |n| self.arena.edges(n))
            .map(move |e| Neighbor {
                vertex: &self.arena[e.target()],
                weight: e.weight().weight,
            })
    }

    /// Length of the adjacency list of `vertex`, 0 for unknown vertices.
    pub fn degree(&self, vertex: &V) -> usize {
        self.index
            .get(vertex)
            .map_or(0, |&n| self.arena.edges(n).count())
    }

    /// The global edge list in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<&V>> {
        self.edge_list
            .iter()
            .map(move |&(u, v, w)| Edge::new(self.vertex(u), self.vertex(v), w))
    }

    pub(crate) fn vertex(&self, u: usize) -> &V {
        &self.arena[NodeIndex::new(u)]
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).map(|n| n.index())
    }

    /// Adjacency entries of `u` as `(target, link)` pairs.
    pub(crate) fn links(&self, u: usize) -> impl Iterator<Item = (usize, Link)> {
        self.arena
            .edges(NodeIndex::new(u))
            .map(|e| (e.target().index(), *e.weight()))
    }

    pub(crate) fn successors(&self, u: usize) -> impl Iterator<Item = usize> {
        self.links(u).map(|(v, _)| v)
    }

    /// Number of distinct link ids handed out so far.
    pub(crate) fn link_count(&self) -> usize {
        self.link_count
    }

    pub(crate) fn edge_records(&self) -> &[(usize, usize, f64)] {
        &self.edge_list
    }

    pub(crate) fn owned_edge(&self, u: usize, v: usize, weight: f64) -> Edge<V> {
        Edge::new(self.vertex(u).clone(), self.vertex(v).clone(), weight)
    }

    fn ensure_vertex(&mut self, vertex: V) -> NodeIndex {
        let arena = &mut self.arena;
        *self
            .index
            .entry(vertex)
            .or_insert_with_key(|v| arena.add_node(v.clone()))
    }

    fn has_arc(&self, a: NodeIndex, b: NodeIndex, weight: f64) -> bool {
        self.arena
            .edges_connecting(a, b)
            .any(|e| e.weight().weight == weight)
    }
}
