use crate::Graph;
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Greedy vertex coloring.
///
/// Vertices are colored in insertion order, each with the smallest positive
/// color not used by an already colored neighbor. Colors start at 1.
pub fn greedy_coloring<V: Clone + Eq + Hash>(graph: &Graph<V>) -> HashMap<V, usize> {
    greedy_color_indices(graph)
        .into_iter()
        .enumerate()
        .map(|(u, color)| (graph.vertex(u).clone(), color))
        .collect()
}

/// Number of colors [`greedy_coloring`] uses, an upper bound on the chromatic number.
pub fn chromatic_upper_bound<V: Clone + Eq + Hash>(graph: &Graph<V>) -> usize {
    greedy_color_indices(graph).into_iter().max().unwrap_or(0)
}

fn greedy_color_indices<V: Clone + Eq + Hash>(graph: &Graph<V>) -> Vec<usize> {
    let n = graph.vertex_count();
    // 0 = uncolored
    let mut color = vec![0usize; n];
    let mut used = FixedBitSet::with_capacity(n + 2);

    for u in 0..n {
        used.clear();
        for v in graph.successors(u) {
            used.insert(color[v]);
        }
        // a vertex has at most n distinct neighbor colors, so 1..=n+1 always has a free one
        color[u] = (1..).find(|&c| !used.contains(c)).unwrap_or(1);
    }

    debug!(vertices = n, colors = color.iter().max().copied().unwrap_or(0), "greedy coloring");
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        fixtures::{complete, cycle, petersen},
        random_graphs::random_gnp,
    };

    fn assert_proper(g: &Graph<usize>, colors: &HashMap<usize, usize>) {
        for e in g.edges() {
            if e.origin != e.destination {
                assert_ne!(colors[e.origin], colors[e.destination]);
            }
        }
    }

    #[test]
    fn test_complete_graph_needs_n_colors() {
        let g = complete(5);
        let colors = greedy_coloring(&g);
        assert_proper(&g, &colors);
        assert_eq!(chromatic_upper_bound(&g), 5);
    }

    #[test]
    fn test_first_vertex_gets_color_one() {
        let g = cycle(4, false);
        let colors = greedy_coloring(&g);
        assert_eq!(colors[&0], 1);
        assert_eq!(colors[&1], 2);
        assert_eq!(colors[&2], 1);
        assert_eq!(colors[&3], 2);
    }

    #[test]
    fn test_odd_cycle_uses_three_colors() {
        assert_eq!(chromatic_upper_bound(&cycle(5, false)), 3);
    }

    #[test]
    fn test_random_colorings_are_proper() {
        for seed in 0..10 {
            let g = random_gnp(30, 0.2, seed, false);
            assert_proper(&g, &greedy_coloring(&g));
        }
        assert_proper(&petersen(), &greedy_coloring(&petersen()));
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<usize> = Graph::new_undirected();
        assert!(greedy_coloring(&g).is_empty());
        assert_eq!(chromatic_upper_bound(&g), 0);
    }
}
