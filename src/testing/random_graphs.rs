use crate::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Random graph on vertices `0..n` with `m` edges and integer weights in `1..=9`.
///
/// The first `n - 1` edges form a random spanning tree (oriented towards the
/// newer vertex in directed graphs), so undirected results are connected.
/// Small weights make ties common, which is what MST tests want.
pub fn random_graph(n: usize, m: usize, seed: usize, directed: bool) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new(directed);

    for i in 0..n {
        graph.add_vertex(i);
        if i > 0 {
            let j = rng.random_range(0..i);
            let w = rng.random_range(1..10) as f64;
            graph.add_weighted_edge(j, i, w);
        }
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let w = rng.random_range(1..10) as f64;
        graph.add_weighted_edge(s, t, w);
    }

    graph
}

/// Random graph where each of the `n * (n - 1)` ordered pairs (or `n * (n - 1) / 2`
/// unordered pairs) is an edge with probability `p`. Not necessarily connected.
pub fn random_gnp(n: usize, p: f64, seed: usize, directed: bool) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new(directed);

    for i in 0..n {
        graph.add_vertex(i);
    }
    for i in 0..n {
        for j in 0..n {
            if i == j || (!directed && j < i) {
                continue;
            }
            if rng.random_bool(p) {
                graph.add_edge(i, j);
            }
        }
    }

    graph
}

/// Random DAG: every edge goes from a smaller to a larger vertex.
pub fn random_dag(n: usize, m: usize, seed: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new_directed();

    for i in 0..n {
        graph.add_vertex(i);
    }
    if n < 2 {
        return graph;
    }
    for _ in 0..m {
        let s = rng.random_range(0..n - 1);
        let t = rng.random_range(s + 1..n);
        graph.add_edge(s, t);
    }

    graph
}

/// Undirected union of `cycles` random simple cycles on `0..n`, all through
/// vertex 0, so every degree is even and all edges share one component.
///
/// Cycle `c` has weight `c + 1`, so overlapping cycles give parallel edges
/// instead of collapsing into one adjacency entry. Needs `n >= 3`.
pub fn random_eulerian(n: usize, cycles: usize, seed: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new_undirected();

    for i in 0..n {
        graph.add_vertex(i);
    }
    let mut others: Vec<usize> = (1..n).collect();
    for c in 0..cycles {
        others.shuffle(&mut rng);
        let len = rng.random_range(2..n);
        let mut tour = vec![0];
        tour.extend_from_slice(&others[..len]);
        for k in 0..tour.len() {
            graph.add_weighted_edge(tour[k], tour[(k + 1) % tour.len()], (c + 1) as f64);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::is_connected;

    #[test]
    fn test_random_graph_is_connected() {
        for seed in 0..10 {
            let g = random_graph(20, 35, seed, false);
            assert_eq!(g.vertex_count(), 20);
            assert_eq!(g.edge_count(), 35);
            assert!(is_connected(&g));
        }
    }

    #[test]
    fn test_random_eulerian_degrees_are_even() {
        for seed in 0..10 {
            let g = random_eulerian(12, 4, seed);
            assert!(g.vertices().all(|v| g.degree(v) % 2 == 0));
            assert!(g.degree(&0) >= 8);
        }
    }

    #[test]
    fn test_random_dag_edges_point_forward() {
        let g = random_dag(15, 40, 3);
        assert!(g.edges().all(|e| e.origin < e.destination));
    }
}
