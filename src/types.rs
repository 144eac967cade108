/// An edge as stored in the global edge list of a [`Graph`](crate::Graph).
///
/// For undirected graphs `origin` and `destination` are just the order the
/// endpoints were given in.
#[derive(Clone, PartialEq, Debug)]
pub struct Edge<V> {
    pub origin: V,
    pub destination: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(origin: V, destination: V, weight: f64) -> Self {
        Edge {
            origin,
            destination,
            weight,
        }
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.origin, self.destination, self.weight)
    }
}

/// One entry of a vertex's adjacency list.
#[derive(Clone, PartialEq, Debug)]
pub struct Neighbor<'a, V> {
    pub vertex: &'a V,
    pub weight: f64,
}

/// Enum representing the side of a vertex in a two-coloring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}
