//! Minimum spanning trees of undirected graphs.
//!
//! Three independent strategies build the same kind of result: a sequence of
//! edges forming a minimum-weight spanning forest. None of them fails on a
//! disconnected graph; they simply run out of eligible edges, leaving one
//! tree per component. [`Prim::component_tree`] is available when only the
//! first vertex's component is wanted.
//!
//! All constructors reject directed graphs.

mod boruvka;
mod kruskal;
mod prim;

pub use boruvka::Boruvka;
pub use kruskal::Kruskal;
pub use prim::Prim;

use crate::Edge;
use hashbrown::HashSet;
use std::hash::Hash;

/// A strategy computing a minimum spanning tree (forest).
pub trait MinimumSpanningForest<V> {
    /// Edges of the spanning forest (one tree per connected component), in
    /// the order they were chosen.
    fn mst(&self) -> Vec<Edge<V>>;
}

/// Sum of edge weights, counting every `{u, v}` pair with a given weight once.
///
/// Edge lists taken straight from input may repeat an edge, sometimes with
/// swapped endpoints. Trees built in this module never contain repeats, so
/// for them this is a plain sum.
pub fn total_weight<V: Eq + Hash>(edges: &[Edge<V>]) -> f64 {
    let mut seen: HashSet<(&V, &V, u64)> = HashSet::with_capacity(edges.len());
    let mut total = 0.0;
    for e in edges {
        let bits = e.weight.to_bits();
        if seen.contains(&(&e.destination, &e.origin, bits)) {
            continue;
        }
        if seen.insert((&e.origin, &e.destination, bits)) {
            total += e.weight;
        }
    }
    total
}
