//! The outcome record shared by every algorithm, and the search protocol
//! that produces it.

use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use graphpath_core::{Graph, GraphError, VertexId};
use thiserror::Error;

/// Which algorithm (and heuristic) produced a [`PathResult`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    AStarEuclidean,
    AStarManhattan,
    AStarZero,
}

impl AlgorithmKind {
    /// Every algorithm, in report order.
    pub const ALL: [AlgorithmKind; 7] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::BellmanFord,
        Self::AStarEuclidean,
        Self::AStarManhattan,
        Self::AStarZero,
    ];

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS (Breadth-First Search)",
            Self::Dfs => "DFS (Depth-First Search)",
            Self::Dijkstra => "Dijkstra",
            Self::BellmanFord => "Bellman-Ford",
            Self::AStarEuclidean => "A* (Euclidean)",
            Self::AStarManhattan => "A* (Manhattan)",
            Self::AStarZero => "A* (Zero/Dijkstra-like)",
        }
    }

    /// Short machine name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
            Self::AStarEuclidean => "astar-euclidean",
            Self::AStarManhattan => "astar-manhattan",
            Self::AStarZero => "astar-zero",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Outcome of one search.
///
/// `found == false` covers both "no path exists" and rejected input; in that
/// case `path` is empty and `total_weight` is `0.0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub algorithm: AlgorithmKind,
    /// Set when an A* heuristic needed coordinates the graph lacks and the
    /// search ran with the zero heuristic instead.
    pub heuristic_fallback: bool,
    pub path: Vec<VertexId>,
    pub total_weight: f64,
    pub elapsed: Duration,
    pub found: bool,
}

impl PathResult {
    /// An empty, not-found result.
    pub fn not_found(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            heuristic_fallback: false,
            path: Vec::new(),
            total_weight: 0.0,
            elapsed: Duration::ZERO,
            found: false,
        }
    }

    /// Report label, marking degraded heuristics with `-fallback`.
    pub fn label(&self) -> &'static str {
        match (self.algorithm, self.heuristic_fallback) {
            (AlgorithmKind::AStarEuclidean, true) => "A* (Euclidean-fallback)",
            (AlgorithmKind::AStarManhattan, true) => "A* (Manhattan-fallback)",
            (kind, _) => kind.label(),
        }
    }

    /// Elapsed wall-clock time in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Algorithm: {}", self.label())?;
        writeln!(f, "  Time: {:.3} ms", self.time_ms())?;
        if self.found {
            write!(f, "  Path: ")?;
            for (i, v) in self.path.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
            writeln!(f, "  Total weight: {:.1}", self.total_weight)
        } else {
            writeln!(f, "  Path: Not found")
        }
    }
}

// ---------------------------------------------------------------------------
// Search protocol
// ---------------------------------------------------------------------------

/// A path discovered by an algorithm body.
pub(crate) struct Found {
    pub(crate) path: Vec<VertexId>,
    pub(crate) weight: f64,
}

/// Validate the endpoints, short-circuit `start == end`, run `search` and
/// stamp the elapsed time.
pub(crate) fn execute<F>(
    kind: AlgorithmKind,
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    search: F,
) -> Result<PathResult, GraphError>
where
    F: FnOnce(&Graph, VertexId, VertexId) -> Result<Option<Found>, GraphError>,
{
    for v in [start, end] {
        if !graph.is_valid_vertex(v) {
            return Err(GraphError::InvalidVertex {
                vertex: v,
                num_vertices: graph.num_vertices(),
            });
        }
    }

    let timer = Instant::now();
    let mut result = PathResult::not_found(kind);
    if start == end {
        result.found = true;
        result.path = vec![start];
    } else if let Some(found) = search(graph, start, end)? {
        result.found = true;
        result.path = found.path;
        result.total_weight = found.weight;
    }
    result.elapsed = timer.elapsed();

    log::debug!(
        "{kind} {start}->{end}: found={} hops={} weight={}",
        result.found,
        result.path.len().saturating_sub(1),
        result.total_weight,
    );
    Ok(result)
}

/// Collapse a structural error into a not-found result.
pub(crate) fn settle(kind: AlgorithmKind, outcome: Result<PathResult, GraphError>) -> PathResult {
    outcome.unwrap_or_else(|err| {
        log::warn!("{kind}: {err}");
        PathResult::not_found(kind)
    })
}

/// A per-call scratch array of `n` copies of `value`.
pub(crate) fn scratch<T: Clone>(n: usize, value: T) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(n)?;
    v.resize(n, value);
    Ok(v)
}

/// Walk `parent` back from `end` to `start`.
///
/// Returns `None` when `end` has no predecessor, or when the chain does not
/// terminate at `start` within `parent.len()` steps (a cycle in the parent
/// array).
pub(crate) fn reconstruct_path(
    parent: &[Option<VertexId>],
    start: VertexId,
    end: VertexId,
) -> Option<Vec<VertexId>> {
    if parent[end].is_none() && start != end {
        return None;
    }
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(v) = cur {
        if path.len() == parent.len() {
            return None;
        }
        path.push(v);
        cur = parent[v];
    }
    path.reverse();
    (path.first() == Some(&start)).then_some(path)
}

/// Sum of the first matching edge weight for each hop of `path`.
pub(crate) fn path_weight(graph: &Graph, path: &[VertexId]) -> f64 {
    path.windows(2)
        .filter_map(|hop| graph.edge_weight(hop[0], hop[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.name().parse::<AlgorithmKind>(), Ok(kind));
        }
        assert_eq!("Bellman_Ford".parse::<AlgorithmKind>(), Ok(AlgorithmKind::BellmanFord));
        assert_eq!(
            "floyd".parse::<AlgorithmKind>(),
            Err(UnknownAlgorithm("floyd".to_string()))
        );
    }

    #[test]
    fn fallback_changes_label_only_for_coordinate_heuristics() {
        let mut r = PathResult::not_found(AlgorithmKind::AStarEuclidean);
        r.heuristic_fallback = true;
        assert_eq!(r.label(), "A* (Euclidean-fallback)");
        r.algorithm = AlgorithmKind::AStarManhattan;
        assert_eq!(r.label(), "A* (Manhattan-fallback)");
        r.algorithm = AlgorithmKind::AStarZero;
        assert_eq!(r.label(), "A* (Zero/Dijkstra-like)");
    }

    #[test]
    fn reconstruct_follows_parents() {
        let parent = [None, Some(2), Some(0), Some(1)];
        assert_eq!(reconstruct_path(&parent, 0, 3), Some(vec![0, 2, 1, 3]));
        assert_eq!(reconstruct_path(&parent, 0, 0), Some(vec![0]));
    }

    #[test]
    fn reconstruct_rejects_missing_and_cyclic_chains() {
        let parent = [None, None, Some(0)];
        assert_eq!(reconstruct_path(&parent, 0, 1), None);

        let cyclic = [None, Some(2), Some(1), Some(1)];
        assert_eq!(reconstruct_path(&cyclic, 0, 3), None);
    }

    #[test]
    fn display_found_and_missing() {
        let mut r = PathResult::not_found(AlgorithmKind::Dijkstra);
        assert!(r.to_string().contains("Path: Not found"));

        r.found = true;
        r.path = vec![0, 2, 1, 3];
        r.total_weight = 4.0;
        let out = r.to_string();
        assert!(out.contains("Algorithm: Dijkstra"));
        assert!(out.contains("Path: 0 -> 2 -> 1 -> 3"));
        assert!(out.contains("Total weight: 4.0"));
    }

    #[test]
    fn execute_rejects_invalid_endpoints() {
        let g = Graph::new(2, false, true).unwrap();
        let err = execute(AlgorithmKind::Bfs, &g, 0, 2, |_, _, _| Ok(None)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertex { vertex: 2, .. }));
        let r = settle(AlgorithmKind::Bfs, Err(err));
        assert!(!r.found && r.path.is_empty());
    }

    #[test]
    fn execute_short_circuits_start_equals_end() {
        let g = Graph::new(2, false, true).unwrap();
        let r = execute(AlgorithmKind::Dfs, &g, 1, 1, |_, _, _| {
            panic!("search body must not run for start == end")
        })
        .unwrap();
        assert!(r.found);
        assert_eq!(r.path, vec![1]);
        assert_eq!(r.total_weight, 0.0);
    }
}
