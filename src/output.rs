use crate::{Edge, Graph, Result};
use dot::{Edges, GraphWalk, Labeller, Nodes};
use fixedbitset::FixedBitSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

type Node = usize;

#[derive(Debug, Clone)]
struct DrawnEdge {
    source: Node,
    target: Node,
    weight: f64,
    highlighted: bool,
}

struct Drawing {
    directed: bool,
    labels: Vec<String>,
    edges: Vec<DrawnEdge>,
}

impl<'a> Labeller<'a, Node, DrawnEdge> for Drawing {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").expect("static graph id is a valid identifier")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("N<index> is a valid identifier")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, e: &DrawnEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", e.weight))
    }

    fn edge_style(&self, e: &DrawnEdge) -> dot::Style {
        if e.highlighted {
            dot::Style::Bold
        } else {
            dot::Style::None
        }
    }

    fn kind(&self) -> dot::Kind {
        if self.directed {
            dot::Kind::Digraph
        } else {
            dot::Kind::Graph
        }
    }
}

impl<'a> GraphWalk<'a, Node, DrawnEdge> for Drawing {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> Edges<'_, DrawnEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &DrawnEdge) -> Node {
        e.source
    }

    fn target(&self, e: &DrawnEdge) -> Node {
        e.target
    }
}

/// Returns a graph in DOT format.
///
/// It shows your vertex values (via `Display`), not internal indices, and
/// puts the weight on every edge. Each adjacency entry is drawn once, so
/// duplicate input edges collapse and an undirected edge is one line.
pub fn draw_graph<V>(graph: &Graph<V>) -> Result<String>
where
    V: Clone + Eq + Hash + Display,
{
    draw_highlighted(graph, &[])
}

/// Same as [`draw_graph`], but edges present in `highlighted` (for example
/// a spanning tree) are drawn bold.
///
/// An edge matches on both endpoints and weight, in either orientation for
/// undirected graphs.
pub fn draw_highlighted<V>(graph: &Graph<V>, highlighted: &[Edge<V>]) -> Result<String>
where
    V: Clone + Eq + Hash + Display,
{
    let marked: Vec<(usize, usize, u64)> = highlighted
        .iter()
        .filter_map(|e| {
            let u = graph.index_of(&e.origin)?;
            let v = graph.index_of(&e.destination)?;
            Some((u, v, e.weight.to_bits()))
        })
        .collect();
    let is_marked = |u: usize, v: usize, w: f64| {
        let bits = w.to_bits();
        marked
            .iter()
            .any(|&m| m == (u, v, bits) || (!graph.is_directed() && m == (v, u, bits)))
    };

    let mut drawing = Drawing {
        directed: graph.is_directed(),
        labels: graph.vertices().map(|v| v.to_string()).collect(),
        edges: Vec::new(),
    };
    let mut drawn = FixedBitSet::with_capacity(graph.link_count());
    for u in 0..graph.vertex_count() {
        for (v, link) in graph.links(u) {
            if drawn.put(link.id) {
                continue;
            }
            drawing.edges.push(DrawnEdge {
                source: u,
                target: v,
                weight: link.weight,
                highlighted: is_marked(u, v, link.weight),
            });
        }
    }

    let mut buffer = Vec::new();
    dot::render(&drawing, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file<V, P>(graph: &Graph<V>, path: P) -> Result<()>
where
    V: Clone + Eq + Hash + Display,
    P: AsRef<Path>,
{
    let dot_str = draw_graph(graph)?;
    std::fs::write(path, dot_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::{Kruskal, MinimumSpanningForest};
    use crate::testing::fixtures::{diamond, square_with_diagonal};

    fn edge_lines(dot: &str, op: &str) -> usize {
        dot.lines().filter(|l| l.contains(op)).count()
    }

    #[test]
    fn test_undirected_drawing() {
        let g = square_with_diagonal();
        let dot = draw_graph(&g).unwrap();
        assert!(dot.trim_start().starts_with("graph"));
        for v in ["A", "B", "C", "D"] {
            assert!(dot.contains(&format!("label=\"{}\"", v)), "{v} missing");
        }
        assert_eq!(edge_lines(&dot, " -- "), 5);
        assert!(!dot.contains("bold"));
    }

    #[test]
    fn test_directed_drawing() {
        let dot = draw_graph(&diamond()).unwrap();
        assert!(dot.trim_start().starts_with("digraph"));
        assert_eq!(edge_lines(&dot, " -> "), 4);
    }

    #[test]
    fn test_duplicates_drawn_once() {
        let mut g = Graph::new_undirected();
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        g.add_edge(1, 2);
        assert_eq!(edge_lines(&draw_graph(&g).unwrap(), " -- "), 1);
    }

    #[test]
    fn test_highlighted_tree() {
        let g = square_with_diagonal();
        let tree = Kruskal::new(&g).unwrap().mst();
        let dot = draw_highlighted(&g, &tree).unwrap();
        let bold = dot.lines().filter(|l| l.contains("bold")).count();
        assert_eq!(bold, 3);
    }

    #[test]
    fn test_unknown_highlight_ignored() {
        let g = square_with_diagonal();
        let dot = draw_highlighted(&g, &[Edge::new("X", "Y", 1.0)]).unwrap();
        assert!(!dot.contains("bold"));
    }
}
