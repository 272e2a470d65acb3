use graphpath_core::{Graph, VertexId};

/// The zero heuristic.
#[inline]
pub fn zero(_graph: &Graph, _from: VertexId, _goal: VertexId) -> f64 {
    0.0
}

/// Straight-line (L2) distance between the coordinates of two vertices.
#[inline]
pub fn euclidean(graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
    graph.euclidean_distance(from, goal)
}

/// Manhattan (L1) distance between the coordinates of two vertices.
#[inline]
pub fn manhattan(graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
    graph.manhattan_distance(from, goal)
}
