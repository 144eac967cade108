use crate::Graph;

/// Generates an undirected grid graph with the specified number of rows and columns.
///
/// Vertex `r * cols + c` sits in row `r`, column `c`.
pub fn generate_grid_graph(rows: usize, cols: usize) -> Graph<usize> {
    let mut graph = Graph::new_undirected();

    for r in 0..rows {
        for c in 0..cols {
            graph.add_vertex(r * cols + c);
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                graph.add_edge(r * cols + c, (r + 1) * cols + c);
            }
            if c + 1 < cols {
                graph.add_edge(r * cols + c, r * cols + c + 1);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let g = generate_grid_graph(3, 4);
        assert_eq!(g.vertex_count(), 12);
        // 2 * 4 vertical + 3 * 3 horizontal
        assert_eq!(g.edge_count(), 17);
        assert_eq!(g.degree(&0), 2);
        assert_eq!(g.degree(&5), 4);
    }
}
