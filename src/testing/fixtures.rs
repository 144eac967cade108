use crate::Graph;

/// Path `0 - 1 - ... - (n - 1)`.
pub fn chain(n: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::new(directed);
    graph.add_vertex(0);
    for i in 1..n {
        graph.add_edge(i - 1, i);
    }
    graph
}

/// Cycle `0 - 1 - ... - (n - 1) - 0`.
pub fn cycle(n: usize, directed: bool) -> Graph<usize> {
    let mut graph = chain(n, directed);
    graph.add_edge(n - 1, 0);
    graph
}

/// Directed diamond `0 -> {1, 2} -> 3`.
pub fn diamond() -> Graph<usize> {
    Graph::from_edges(true, vec![(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)])
}

pub fn complete(n: usize) -> Graph<usize> {
    let mut graph = Graph::new_undirected();
    for i in 0..n {
        graph.add_vertex(i);
        for j in 0..i {
            graph.add_edge(j, i);
        }
    }
    graph
}

/// The Petersen graph: has a Hamiltonian path but no Hamiltonian circuit.
pub fn petersen() -> Graph<usize> {
    let mut graph = Graph::new_undirected();
    for i in 0..5 {
        graph.add_edge(i, (i + 1) % 5);
        graph.add_edge(i, i + 5);
        graph.add_edge(i + 5, (i + 2) % 5 + 5);
    }
    graph
}

/// A-B(1), B-C(2), C-D(1), A-D(4), A-C(3). MST weight is 4.
pub fn square_with_diagonal() -> Graph<&'static str> {
    Graph::from_edges(
        false,
        vec![
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "D", 1.0),
            ("A", "D", 4.0),
            ("A", "C", 3.0),
        ],
    )
}

/// Directed triangle A -> B -> C -> A.
pub fn directed_triangle() -> Graph<&'static str> {
    Graph::from_edges(true, vec![("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)])
}
