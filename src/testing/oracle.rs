//! Conversions into plain petgraph graphs so results can be checked
//! against `petgraph::algo`.

use crate::Graph;
use petgraph::graph::NodeIndex;

/// Same vertices (by index) and the same global edge list.
pub fn to_petgraph(graph: &Graph<usize>) -> petgraph::Graph<usize, f64> {
    let mut pg = petgraph::Graph::new();
    let nodes: Vec<NodeIndex> = graph.vertices().map(|&v| pg.add_node(v)).collect();
    for e in graph.edges() {
        let (u, v) = (index(graph, e.origin), index(graph, e.destination));
        pg.add_edge(nodes[u], nodes[v], e.weight);
    }
    pg
}

pub fn to_petgraph_undirected(graph: &Graph<usize>) -> petgraph::graph::UnGraph<usize, f64> {
    let mut pg = petgraph::graph::UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = graph.vertices().map(|&v| pg.add_node(v)).collect();
    for e in graph.edges() {
        let (u, v) = (index(graph, e.origin), index(graph, e.destination));
        pg.add_edge(nodes[u], nodes[v], e.weight);
    }
    pg
}

/// Total weight of petgraph's minimum spanning forest.
pub fn mst_weight(graph: &Graph<usize>) -> f64 {
    use petgraph::data::Element;

    let pg = to_petgraph_undirected(graph);
    petgraph::algo::min_spanning_tree(&pg)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

pub fn scc_count(graph: &Graph<usize>) -> usize {
    petgraph::algo::tarjan_scc(&to_petgraph(graph)).len()
}

pub fn is_cyclic(graph: &Graph<usize>) -> bool {
    petgraph::algo::is_cyclic_directed(&to_petgraph(graph))
}

pub fn component_count(graph: &Graph<usize>) -> usize {
    petgraph::algo::connected_components(&to_petgraph_undirected(graph))
}

fn index(graph: &Graph<usize>, v: &usize) -> usize {
    graph.index_of(v).expect("edge endpoints are vertices")
}
