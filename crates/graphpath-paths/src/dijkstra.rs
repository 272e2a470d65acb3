use std::collections::BinaryHeap;

use graphpath_core::{Graph, GraphError, VertexId};

use crate::node::NodeRef;
use crate::result::{self, AlgorithmKind, Found, PathResult};

/// Shortest path from `start` to `end` by Dijkstra's algorithm.
///
/// Weights must be non-negative. Negative weights are not rejected but the
/// result is then unspecified; use [`bellman_ford`](crate::bellman_ford)
/// for such graphs.
pub fn dijkstra(graph: &Graph, start: VertexId, end: VertexId) -> PathResult {
    result::settle(AlgorithmKind::Dijkstra, try_dijkstra(graph, start, end))
}

pub(crate) fn try_dijkstra(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
) -> Result<PathResult, GraphError> {
    result::execute(AlgorithmKind::Dijkstra, graph, start, end, search)
}

fn search(graph: &Graph, start: VertexId, end: VertexId) -> Result<Option<Found>, GraphError> {
    let n = graph.num_vertices();
    let mut dist = result::scratch(n, f64::INFINITY)?;
    let mut parent = result::scratch(n, None)?;
    let mut closed = result::scratch(n, false)?;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.try_reserve(n)?;

    dist[start] = 0.0;
    open.push(NodeRef { idx: start, f: 0.0 });
    let mut settled = 0usize;

    while let Some(current) = open.pop() {
        let u = current.idx;
        // Skip stale entries.
        if closed[u] {
            continue;
        }
        closed[u] = true;
        settled += 1;
        if u == end {
            break;
        }

        for e in graph.edges(u) {
            let v = e.dest;
            let tentative = dist[u] + e.weight;
            if !closed[v] && tentative < dist[v] {
                dist[v] = tentative;
                parent[v] = Some(u);
                open.push(NodeRef { idx: v, f: tentative });
            }
        }
    }

    log::trace!("dijkstra settled {settled} of {n} vertices");
    Ok(result::reconstruct_path(&parent, start, end).map(|path| Found {
        path,
        weight: dist[end],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        let mut g = Graph::new(4, true, true).unwrap();
        g.add_edge(0, 1, 4.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(2, 1, 2.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        g.add_edge(2, 3, 5.0).unwrap();
        g
    }

    #[test]
    fn weighted_shortest_path() {
        let r = dijkstra(&diamond(), 0, 3);
        assert!(r.found);
        assert_eq!(r.algorithm, AlgorithmKind::Dijkstra);
        assert_eq!(r.total_weight, 4.0);
        assert_eq!(r.path, vec![0, 2, 1, 3]);
    }

    #[test]
    fn unreachable_in_directed_graph() {
        let r = dijkstra(&diamond(), 3, 0);
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn undirected_edges_work_both_ways() {
        let mut g = Graph::new(3, true, false).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(1, 2, 3.0).unwrap();
        g.add_edge(0, 2, 10.0).unwrap();

        let r = dijkstra(&g, 2, 0);
        assert_eq!(r.path, vec![2, 1, 0]);
        assert_eq!(r.total_weight, 5.0);
    }

    #[test]
    fn self_loops_are_never_required() {
        let mut g = diamond();
        g.add_edge(0, 0, 1.0).unwrap();
        let r = dijkstra(&g, 0, 0);
        assert!(r.found);
        assert_eq!(r.path, vec![0]);
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = Graph::new(3, true, true).unwrap();
        g.add_edge(0, 1, 0.0).unwrap();
        g.add_edge(1, 2, 0.0).unwrap();
        g.add_edge(0, 2, 0.5).unwrap();
        let r = dijkstra(&g, 0, 2);
        assert_eq!(r.path, vec![0, 1, 2]);
        assert_eq!(r.total_weight, 0.0);
    }
}
