use std::collections::BinaryHeap;

use graphpath_core::{Graph, GraphError, VertexId};

use crate::node::NodeRef;
use crate::result::{self, Found, PathResult};
use crate::traits::{Heuristic, HeuristicKind};

/// A* search with one of the built-in heuristics.
///
/// Coordinate-based heuristics on a graph without coordinates fall back to
/// the zero heuristic; the result then has
/// [`heuristic_fallback`](PathResult::heuristic_fallback) set and a
/// `-fallback` label.
pub fn astar(graph: &Graph, start: VertexId, end: VertexId, heuristic: HeuristicKind) -> PathResult {
    result::settle(heuristic.algorithm(), try_astar(graph, start, end, heuristic))
}

/// A* guided by straight-line distance.
pub fn astar_euclidean(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    astar(graph, start, end, HeuristicKind::Euclidean)
}

/// A* guided by Manhattan distance.
pub fn astar_manhattan(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    astar(graph, start, end, HeuristicKind::Manhattan)
}

/// A* with the zero heuristic, equivalent to Dijkstra.
pub fn astar_zero(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    astar(graph, start, end, HeuristicKind::Zero)
}

/// A* with a caller-supplied heuristic, reported under the A* label of
/// `label` (e.g. [`HeuristicKind::Manhattan`] reports `A* (Manhattan)`).
///
/// Optimality holds only if `heuristic` is admissible; this is not checked.
pub fn astar_with<H: Heuristic>(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    heuristic: &H,
    label: HeuristicKind,
) -> PathResult {
    let kind = label.algorithm();
    result::settle(
        kind,
        result::execute(kind, graph, start, end, |g, s, e| search(g, s, e, heuristic)),
    )
}

pub(crate) fn try_astar(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    heuristic: HeuristicKind,
) -> Result<PathResult, GraphError> {
    let kind = heuristic.algorithm();
    let fallback = heuristic.requires_coordinates() && !graph.has_coordinates();
    let effective = if fallback {
        log::warn!("{kind}: graph has no coordinates, using the zero heuristic");
        HeuristicKind::Zero
    } else {
        heuristic
    };

    let mut result = result::execute(kind, graph, start, end, |g, s, e| search(g, s, e, &effective))?;
    result.heuristic_fallback = fallback;
    Ok(result)
}

fn search<H: Heuristic>(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    heuristic: &H,
) -> Result<Option<Found>, GraphError> {
    let n = graph.num_vertices();
    let mut g_score = result::scratch(n, f64::INFINITY)?;
    let mut f_score = result::scratch(n, f64::INFINITY)?;
    let mut parent = result::scratch(n, None)?;
    let mut closed = result::scratch(n, false)?;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.try_reserve(n)?;

    g_score[start] = 0.0;
    f_score[start] = heuristic.estimate(graph, start, end);
    open.push(NodeRef {
        idx: start,
        f: f_score[start],
    });
    let mut expanded = 0usize;

    while let Some(current) = open.pop() {
        let u = current.idx;
        if closed[u] {
            continue;
        }
        closed[u] = true;
        if u == end {
            break;
        }
        expanded += 1;

        for e in graph.edges(u) {
            let v = e.dest;
            if closed[v] {
                continue;
            }
            let tentative_g = g_score[u] + e.weight;
            if tentative_g < g_score[v] {
                parent[v] = Some(u);
                g_score[v] = tentative_g;
                f_score[v] = tentative_g + heuristic.estimate(graph, v, end);
                open.push(NodeRef { idx: v, f: f_score[v] });
            }
        }
    }

    log::trace!("a* expanded {expanded} of {n} vertices");
    Ok(result::reconstruct_path(&parent, start, end).map(|path| Found {
        path,
        weight: g_score[end],
    }))
}
