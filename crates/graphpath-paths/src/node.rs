use std::cmp::Ordering;

use graphpath_core::VertexId;

/// Open-set entry ordered by `f` for use in `BinaryHeap`.
///
/// Dijkstra keys on the tentative distance, A* on `g + h`. Stale entries are
/// left in the heap and skipped on pop once their vertex is closed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: VertexId,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}
