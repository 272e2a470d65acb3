//! Dispatch by [`AlgorithmKind`] and automatic algorithm choice.

use graphpath_core::{Graph, GraphError, VertexId};

use crate::result::{self, AlgorithmKind, PathResult};
use crate::traits::HeuristicKind;
use crate::{astar, bellman_ford, bfs, dfs, dijkstra};

/// Algorithms suited to `graph`: Dijkstra for weighted graphs, BFS and DFS
/// side by side for unweighted ones.
pub fn select_algorithms(graph: &Graph) -> Vec<AlgorithmKind> {
    if graph.is_weighted() {
        vec![AlgorithmKind::Dijkstra]
    } else {
        vec![AlgorithmKind::Bfs, AlgorithmKind::Dfs]
    }
}

/// Run the algorithm named by `kind`.
///
/// Invalid endpoints yield a not-found result; see [`try_find_path`] to
/// observe the error instead.
pub fn find_path(graph: &Graph, kind: AlgorithmKind, start: VertexId, end: VertexId) -> PathResult {
    result::settle(kind, try_find_path(graph, kind, start, end))
}

/// Run the algorithm named by `kind`, reporting invalid endpoints and
/// working-set allocation failures as errors.
///
/// A search that completes without a path is `Ok` with `found == false`.
pub fn try_find_path(
    graph: &Graph,
    kind: AlgorithmKind,
    start: VertexId,
    end: VertexId,
) -> Result<PathResult, GraphError> {
    match kind {
        AlgorithmKind::Bfs => bfs::try_bfs(graph, start, end),
        AlgorithmKind::Dfs => dfs::try_dfs(graph, start, end),
        AlgorithmKind::Dijkstra => dijkstra::try_dijkstra(graph, start, end),
        AlgorithmKind::BellmanFord => bellman_ford::try_bellman_ford(graph, start, end),
        AlgorithmKind::AStarEuclidean => astar::try_astar(graph, start, end, HeuristicKind::Euclidean),
        AlgorithmKind::AStarManhattan => astar::try_astar(graph, start, end, HeuristicKind::Manhattan),
        AlgorithmKind::AStarZero => astar::try_astar(graph, start, end, HeuristicKind::Zero),
    }
}

/// Run each of `kinds` in order on the same query.
pub fn find_paths(
    graph: &Graph,
    kinds: &[AlgorithmKind],
    start: VertexId,
    end: VertexId,
) -> Vec<PathResult> {
    kinds
        .iter()
        .map(|&kind| find_path(graph, kind, start, end))
        .collect()
}
