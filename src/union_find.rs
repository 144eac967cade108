//! Disjoint-set (union-find) over arbitrary hashable elements.
//!
//! Uses full path compression and union by size.

use crate::{GraphError, Result};
use hashbrown::HashMap;
use std::hash::Hash;

/// Partition of a fixed element set into disjoint components.
///
/// Elements are numbered in the order they were given to [`DisjointSet::new`];
/// the numbering is what the parent/size arrays are indexed by.
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    elements: Vec<V>,
    index: HashMap<V, usize>,
    parent: Vec<usize>,
    // only meaningful for roots
    size: Vec<usize>,
    components: usize,
}

impl<V: Clone + Eq + Hash> DisjointSet<V> {
    /// Creates singleton components for every element. Repeated elements are ignored.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut set = DisjointSet {
            elements: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        };
        for element in elements {
            if set.index.contains_key(&element) {
                continue;
            }
            let id = set.elements.len();
            set.index.insert(element.clone(), id);
            set.elements.push(element);
            set.parent.push(id);
            set.size.push(1);
            set.components += 1;
        }
        set
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of `element`'s component.
    pub fn find(&mut self, element: &V) -> Result<V> {
        let id = self.id_of(element)?;
        let root = self.root(id);
        Ok(self.elements[root].clone())
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns `false` if they were already in the same component.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        Ok(self.merge(a, b))
    }

    pub fn connected(&mut self, a: &V, b: &V) -> Result<bool> {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        Ok(self.root(a) == self.root(b))
    }

    /// Size of the component containing `element`.
    pub fn component_size(&mut self, element: &V) -> Result<usize> {
        let id = self.id_of(element)?;
        let root = self.root(id);
        Ok(self.size[root])
    }

    fn id_of(&self, element: &V) -> Result<usize> {
        self.index.get(element).copied().ok_or(GraphError::UnknownElement)
    }
}

impl<V> DisjointSet<V> {
    /// Root of element number `x`, compressing the path on the way.
    pub(crate) fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Union of element numbers `a` and `b`, smaller component goes under the larger one.
    pub(crate) fn merge(&mut self, a: usize, b: usize) -> bool {
        let ra = self.root(a);
        let rb = self.root(b);
        if ra == rb {
            return false;
        }

        // ties keep `a`'s root on top
        let (big, small) = if self.size[ra] < self.size[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;
        true
    }
}
