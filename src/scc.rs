//! Strongly connected components of directed graphs.

use crate::{Graph, Result, require_directed};
use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use std::hash::Hash;
use tracing::debug;

const UNVISITED: usize = usize::MAX;

/// Tarjan's algorithm, run on an explicit stack.
///
/// Components come out in completion order: a component is emitted only
/// after every component reachable from it, so the sequence is a reverse
/// topological order of the condensation.
pub struct Tarjan<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> Tarjan<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Result<Self> {
        require_directed(graph, "Tarjan", true)?;
        Ok(Tarjan { graph })
    }

    pub fn components(&self) -> Vec<HashSet<V>> {
        self.component_indices()
            .into_iter()
            .map(|c| c.into_iter().map(|u| self.graph.vertex(u).clone()).collect())
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.component_indices().len()
    }

    fn component_indices(&self) -> Vec<Vec<usize>> {
        let n = self.graph.vertex_count();
        let mut index = vec![UNVISITED; n];
        let mut low = vec![0; n];
        let mut on_stack = FixedBitSet::with_capacity(n);
        let mut stack: Vec<usize> = Vec::new();
        let mut next_index = 0;
        let mut components = Vec::new();

        // (vertex, its not yet examined successors)
        let mut dfs = Vec::new();

        for s in 0..n {
            if index[s] != UNVISITED {
                continue;
            }
            index[s] = next_index;
            low[s] = next_index;
            next_index += 1;
            stack.push(s);
            on_stack.insert(s);
            dfs.push((s, self.graph.successors(s)));

            while let Some((v, successors)) = dfs.last_mut() {
                let v = *v;
                if let Some(w) = successors.next() {
                    if index[w] == UNVISITED {
                        index[w] = next_index;
                        low[w] = next_index;
                        next_index += 1;
                        stack.push(w);
                        on_stack.insert(w);
                        dfs.push((w, self.graph.successors(w)));
                    } else if on_stack.contains(w) {
                        low[v] = low[v].min(index[w]);
                    }
                    continue;
                }

                // v is finished, hand its low-link to the parent
                dfs.pop();
                if let Some((parent, _)) = dfs.last() {
                    let parent = *parent;
                    low[parent] = low[parent].min(low[v]);
                }

                if low[v] == index[v] {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack.set(w, false);
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }

        debug!(vertices = n, components = components.len(), "tarjan finished");
        components
    }
}
