use crate::Graph;

/// Enumerates every simple undirected graph on vertices `0..n`.
///
/// Bit `k` of the mask decides whether the `k`-th vertex pair is an edge,
/// pairs taken in lexicographic order. Edge weights are `1 + k % 3`.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        GraphEnumeratorState {
            n,
            mask: 0,
            last_mask: 1 << pairs,
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new_undirected();
        for i in 0..self.n {
            graph.add_vertex(i);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_weighted_edge(i, j, (1 + check % 3) as f64);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_graphs() {
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
    }

    #[test]
    fn test_last_graph_is_complete() {
        let last = GraphEnumeratorState::new(4).last().unwrap();
        assert_eq!(last.edge_count(), 6);
    }
}
