//! Side-by-side statistics for several results of the same query.

use std::fmt;

use graphpath_core::{Graph, VertexId};

use crate::result::PathResult;

/// Best results among those that found a path.
#[derive(Clone, Copy, Debug)]
pub struct Comparison<'a> {
    /// Lowest elapsed time. Earlier results win ties.
    pub fastest: Option<&'a PathResult>,
    /// Lowest total weight. Earlier results win ties.
    pub shortest: Option<&'a PathResult>,
}

impl<'a> Comparison<'a> {
    pub fn of(results: &'a [PathResult]) -> Self {
        let mut fastest: Option<&PathResult> = None;
        let mut shortest: Option<&PathResult> = None;
        for r in results.iter().filter(|r| r.found) {
            if fastest.is_none_or(|f| r.elapsed < f.elapsed) {
                fastest = Some(r);
            }
            if shortest.is_none_or(|s| r.total_weight < s.total_weight) {
                shortest = Some(r);
            }
        }
        Self { fastest, shortest }
    }
}

/// Printable statistics block for one `(start, end)` query.
pub struct Report<'a> {
    pub graph: &'a Graph,
    pub start: VertexId,
    pub end: VertexId,
    pub results: &'a [PathResult],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.graph;
        writeln!(f, "=== Pathfinding Statistics ===")?;
        writeln!(f)?;
        writeln!(f, "--- Graph Information ---")?;
        writeln!(
            f,
            "Type: {}, {}",
            if g.is_weighted() { "Weighted" } else { "Unweighted" },
            if g.is_directed() { "Directed" } else { "Undirected" },
        )?;
        writeln!(f, "Vertices: {}", g.num_vertices())?;
        writeln!(f, "Edges: {}", g.num_edges())?;
        writeln!(f, "Search: from vertex {} to vertex {}", self.start, self.end)?;

        writeln!(f)?;
        writeln!(f, "--- Algorithm Results ---")?;
        for (i, r) in self.results.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "[Result {}]", i + 1)?;
            write!(f, "{r}")?;
        }

        let cmp = Comparison::of(self.results);
        writeln!(f)?;
        writeln!(f, "--- Performance Comparison ---")?;
        match cmp.fastest {
            Some(r) => writeln!(f, "Fastest algorithm: {} ({:.3} ms)", r.label(), r.time_ms())?,
            None => writeln!(f, "No algorithm found a path")?,
        }
        if let (Some(r), true) = (cmp.shortest, g.is_weighted()) {
            writeln!(
                f,
                "Shortest path found by: {} (weight: {:.1})",
                r.label(),
                r.total_weight
            )?;
        }
        Ok(())
    }
}
