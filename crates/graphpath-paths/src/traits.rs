use graphpath_core::{Graph, VertexId};

use crate::distance;
use crate::result::AlgorithmKind;

/// Estimate of the remaining cost from a vertex to the goal, used by A*.
///
/// For A* to return optimal paths the estimate must never exceed the true
/// remaining cost (admissible). Any `Fn(&Graph, VertexId, VertexId) -> f64`
/// is a heuristic.
pub trait Heuristic {
    fn estimate(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Graph, VertexId, VertexId) -> f64,
{
    #[inline]
    fn estimate(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
        self(graph, from, goal)
    }
}

/// The built-in heuristics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Always `0.0`; A* degenerates to Dijkstra.
    Zero,
    /// Straight-line distance between vertex coordinates.
    Euclidean,
    /// Manhattan distance between vertex coordinates.
    Manhattan,
}

impl HeuristicKind {
    /// Whether the heuristic reads vertex coordinates.
    pub fn requires_coordinates(self) -> bool {
        !matches!(self, Self::Zero)
    }

    /// The algorithm label an A* run with this heuristic reports.
    pub fn algorithm(self) -> AlgorithmKind {
        match self {
            Self::Zero => AlgorithmKind::AStarZero,
            Self::Euclidean => AlgorithmKind::AStarEuclidean,
            Self::Manhattan => AlgorithmKind::AStarManhattan,
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
        match self {
            Self::Zero => distance::zero(graph, from, goal),
            Self::Euclidean => distance::euclidean(graph, from, goal),
            Self::Manhattan => distance::manhattan(graph, from, goal),
        }
    }
}
