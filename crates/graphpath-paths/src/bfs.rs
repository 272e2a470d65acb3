use std::collections::VecDeque;

use graphpath_core::{Graph, GraphError, VertexId};

use crate::result::{self, AlgorithmKind, Found, PathResult};

/// Breadth-first search from `start` to `end`.
///
/// Returns the path with the fewest edges. Ties are broken by edge-list
/// order (most recently inserted first). The reported weight is recomputed
/// from the edges along the path.
pub fn bfs(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    result::settle(AlgorithmKind::Bfs, try_bfs(graph, start, end))
}

pub(crate) fn try_bfs(graph: &Graph, start: VertexId, end: VertexId) -> Result<PathResult, GraphError> {
    result::execute(AlgorithmKind::Bfs, graph, start, end, search)
}

fn search(graph: &Graph, start: VertexId, end: VertexId) -> Result<Option<Found>, GraphError> {
    let n = graph.num_vertices();
    let mut visited = result::scratch(n, false)?;
    let mut parent = result::scratch(n, None)?;
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    queue.try_reserve(n)?;

    visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        if u == end {
            break;
        }
        for e in graph.edges(u) {
            if !visited[e.dest] {
                visited[e.dest] = true;
                parent[e.dest] = Some(u);
                queue.push_back(e.dest);
            }
        }
    }

    Ok(result::reconstruct_path(&parent, start, end).map(|path| Found {
        weight: result::path_weight(graph, &path),
        path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_chain() {
        let mut g = Graph::new(4, false, false).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        let r = bfs(&g, 0, 3);
        assert!(r.found);
        assert_eq!(r.algorithm, AlgorithmKind::Bfs);
        assert_eq!(r.path, vec![0, 1, 2, 3]);
        assert_eq!(r.total_weight, 3.0);
    }

    #[test]
    fn disconnected_directed_graph_has_no_path() {
        let mut g = Graph::new(4, false, true).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        let r = bfs(&g, 0, 3);
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn fewest_edges_wins_over_lighter_path() {
        let mut g = Graph::new(4, true, true).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(0, 3, 10.0).unwrap();

        let r = bfs(&g, 0, 3);
        assert_eq!(r.path, vec![0, 3]);
        assert_eq!(r.total_weight, 10.0);
    }

    #[test]
    fn ties_follow_most_recent_edge() {
        let mut g = Graph::new(4, false, true).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        assert_eq!(bfs(&g, 0, 3).path, vec![0, 2, 3]);
    }

    #[test]
    fn self_loop_start_equals_end() {
        let mut g = Graph::new(3, false, false).unwrap();
        g.add_edge(0, 0, 1.0).unwrap();

        let r = bfs(&g, 0, 0);
        assert!(r.found);
        assert_eq!(r.path, vec![0]);
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn invalid_endpoint_is_not_found() {
        let g = Graph::new(2, false, true).unwrap();
        let r = bfs(&g, 0, 5);
        assert!(!r.found);
        assert!(r.path.is_empty());
    }
}
