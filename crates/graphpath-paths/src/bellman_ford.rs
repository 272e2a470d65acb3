use graphpath_core::{Graph, GraphError, VertexId};

use crate::result::{self, AlgorithmKind, Found, PathResult};

/// Flat edge used by the relaxation passes.
#[derive(Clone, Copy)]
struct FlatEdge {
    src: VertexId,
    dest: VertexId,
    weight: f64,
}

/// Shortest path from `start` to `end` by Bellman-Ford; negative weights
/// are allowed.
///
/// After at most `V - 1` relaxation passes, every vertex on the discovered
/// path gets one more relaxation attempt over its incoming edges. If any of
/// them still improves, the path runs through or behind a negative-weight
/// cycle and the result is reported as not found. Negative cycles that do
/// not touch the path are ignored.
pub fn bellman_ford(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    result::settle(AlgorithmKind::BellmanFord, try_bellman_ford(graph, start, end))
}

pub(crate) fn try_bellman_ford(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
) -> Result<PathResult, GraphError> {
    result::execute(AlgorithmKind::BellmanFord, graph, start, end, search)
}

fn search(graph: &Graph, start: VertexId, end: VertexId) -> Result<Option<Found>, GraphError> {
    let n = graph.num_vertices();

    let mut edges: Vec<FlatEdge> = Vec::new();
    edges.try_reserve_exact((0..n).map(|u| graph.edges(u).len()).sum())?;
    for src in 0..n {
        edges.extend(graph.edges(src).map(|e| FlatEdge {
            src,
            dest: e.dest,
            weight: e.weight,
        }));
    }

    let mut dist = result::scratch(n, f64::INFINITY)?;
    let mut parent = result::scratch(n, None)?;
    dist[start] = 0.0;

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        let mut updated = false;
        for e in &edges {
            if dist[e.src].is_finite() && dist[e.src] + e.weight < dist[e.dest] {
                dist[e.dest] = dist[e.src] + e.weight;
                parent[e.dest] = Some(e.src);
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }
    log::trace!("bellman-ford ran {passes} passes over {} edges", edges.len());

    let Some(path) = result::reconstruct_path(&parent, start, end) else {
        if dist[end].is_finite() {
            // Reached, but the parent chain loops.
            log::warn!("Bellman-Ford: path {start}->{end} is affected by a negative-weight cycle");
        }
        return Ok(None);
    };

    let improvable = |v: VertexId| {
        edges
            .iter()
            .any(|e| e.dest == v && dist[e.src].is_finite() && dist[e.src] + e.weight < dist[v])
    };
    if path.iter().any(|&v| improvable(v)) {
        log::warn!("Bellman-Ford: path {start}->{end} is affected by a negative-weight cycle");
        return Ok(None);
    }

    Ok(Some(Found {
        weight: dist[end],
        path,
    }))
}
