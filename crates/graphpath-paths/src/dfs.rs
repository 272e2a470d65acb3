use graphpath_core::{Graph, GraphError, VertexId};

use crate::result::{self, AlgorithmKind, Found, PathResult};

/// Iterative depth-first search from `start` to `end`.
///
/// Finds *a* path, not necessarily a shortest one. Vertices are marked
/// visited when popped, so a vertex may sit on the stack several times; its
/// parent is the first vertex that discovered it. The result is
/// deterministic for a given edge insertion order.
pub fn dfs(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    result::settle(AlgorithmKind::Dfs, try_dfs(graph, start, end))
}

pub(crate) fn try_dfs(graph: &Graph, start: VertexId, end: VertexId) -> Result<PathResult, GraphError> {
    result::execute(AlgorithmKind::Dfs, graph, start, end, search)
}

fn search(graph: &Graph, start: VertexId, end: VertexId) -> Result<Option<Found>, GraphError> {
    let n = graph.num_vertices();
    let mut visited = result::scratch(n, false)?;
    let mut parent = result::scratch(n, None)?;
    let mut stack: Vec<VertexId> = Vec::new();
    stack.try_reserve(n)?;

    stack.push(start);

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        if u == end {
            break;
        }
        for e in graph.edges(u) {
            let v = e.dest;
            if visited[v] {
                continue;
            }
            if parent[v].is_none() && v != start {
                parent[v] = Some(u);
            }
            stack.push(v);
        }
    }

    Ok(result::reconstruct_path(&parent, start, end).map(|path| Found {
        weight: result::path_weight(graph, &path),
        path,
    }))
}
