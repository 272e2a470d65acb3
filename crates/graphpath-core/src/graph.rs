//! Adjacency-list graph store.
//!
//! A [`Graph`] owns one edge list per vertex plus an optional coordinate
//! store. Vertex indices always form the dense range `[0, num_vertices)`;
//! removing a vertex renumbers every higher vertex down by one.

use std::fmt;

use crate::error::GraphError;
use crate::geom::Coordinates;

/// Index of a vertex inside a [`Graph`].
pub type VertexId = usize;

/// An outgoing edge stored in its source vertex's list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub dest: VertexId,
    pub weight: f64,
}

/// A directed or undirected, weighted or unweighted graph.
///
/// Undirected edges are stored twice (once per endpoint) except self-loops,
/// which are stored once. [`num_edges`](Self::num_edges) always counts each
/// logical edge once.
#[derive(Clone, Debug)]
pub struct Graph {
    num_edges: usize,
    weighted: bool,
    directed: bool,
    // Per-vertex lists in insertion order. Iteration is reversed so callers
    // observe the most recently inserted edge first.
    adj: Vec<Vec<Edge>>,
    coords: Option<Vec<Coordinates>>,
}

impl Graph {
    /// Create a graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize, weighted: bool, directed: bool) -> Result<Self, GraphError> {
        if num_vertices == 0 {
            return Err(GraphError::InvalidArgument(
                "number of vertices must be positive".to_string(),
            ));
        }
        let mut adj = Vec::new();
        adj.try_reserve_exact(num_vertices)?;
        adj.resize_with(num_vertices, Vec::new);
        Ok(Self {
            num_edges: 0,
            weighted,
            directed,
            adj,
            coords: None,
        })
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `v` is inside `[0, num_vertices)`.
    #[inline]
    pub fn is_valid_vertex(&self, v: VertexId) -> bool {
        v < self.adj.len()
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.is_valid_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                num_vertices: self.adj.len(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Insert an edge from `src` to `dest`.
    ///
    /// Unweighted graphs store every edge with weight `1.0`. Undirected
    /// graphs also insert the mirror edge unless `src == dest`.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;

        let weight = if self.weighted { weight } else { 1.0 };
        let mirrored = !self.directed && src != dest;

        // Reserve both slots up front so a failure leaves the graph untouched.
        self.adj[src].try_reserve(1)?;
        if mirrored {
            self.adj[dest].try_reserve(1)?;
        }

        self.adj[src].push(Edge { dest, weight });
        if mirrored {
            self.adj[dest].push(Edge { dest: src, weight });
        }
        self.num_edges += 1;
        Ok(())
    }

    /// Remove the first edge `src -> dest` in `src`'s list (most recent
    /// first), together with its mirror on undirected graphs.
    ///
    /// Returns `false` if no such edge exists or a vertex is out of range.
    pub fn remove_edge(&mut self, src: VertexId, dest: VertexId) -> bool {
        if !self.is_valid_vertex(src) || !self.is_valid_vertex(dest) {
            return false;
        }
        let Some(pos) = self.adj[src].iter().rposition(|e| e.dest == dest) else {
            return false;
        };
        let removed = self.adj[src].remove(pos);

        if !self.directed && src != dest {
            let mirror = &mut self.adj[dest];
            let pos = mirror
                .iter()
                .rposition(|e| e.dest == src && e.weight == removed.weight)
                .or_else(|| mirror.iter().rposition(|e| e.dest == src));
            if let Some(pos) = pos {
                mirror.remove(pos);
            }
        }

        self.num_edges -= 1;
        true
    }

    /// Iterate over the outgoing edges of `v`, most recently inserted first.
    ///
    /// Yields nothing for an invalid vertex.
    pub fn edges(&self, v: VertexId) -> std::iter::Rev<std::slice::Iter<'_, Edge>> {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[]).iter().rev()
    }

    /// Weight of the first `src -> dest` edge in list order, if any.
    pub fn edge_weight(&self, src: VertexId, dest: VertexId) -> Option<f64> {
        self.edges(src).find(|e| e.dest == dest).map(|e| e.weight)
    }

    /// Every logical edge once, as `(src, edge)`, in insertion order per
    /// source vertex.
    ///
    /// Undirected edges are reported from their lower-numbered endpoint.
    pub fn logical_edges(&self) -> impl Iterator<Item = (VertexId, Edge)> + '_ {
        let directed = self.directed;
        self.adj.iter().enumerate().flat_map(move |(src, list)| {
            list.iter()
                .filter(move |e| directed || src <= e.dest)
                .map(move |e| (src, *e))
        })
    }

    // -----------------------------------------------------------------------
    // Vertices
    // -----------------------------------------------------------------------

    /// Append an isolated vertex and return its index.
    pub fn add_vertex(&mut self) -> Result<VertexId, GraphError> {
        self.adj.try_reserve(1)?;
        if let Some(coords) = &mut self.coords {
            coords.try_reserve(1)?;
        }

        let v = self.adj.len();
        self.adj.push(Vec::new());
        if let Some(coords) = &mut self.coords {
            coords.push(Coordinates::ZERO);
        }
        Ok(v)
    }

    /// Delete `v` and every edge incident to it.
    ///
    /// Vertices above `v` shift down by one and edge destinations are
    /// rewritten to match. Runs in O(V + E).
    ///
    /// A graph always keeps at least one vertex: removing the only vertex
    /// fails with [`GraphError::InvalidArgument`].
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        if self.adj.len() == 1 {
            return Err(GraphError::InvalidArgument(
                "cannot remove the only vertex of a graph".to_string(),
            ));
        }

        // On undirected graphs v's own list already holds every incident
        // edge exactly once.
        let mut removed = self.adj.remove(v).len();
        let directed = self.directed;

        for list in &mut self.adj {
            let before = list.len();
            list.retain(|e| e.dest != v);
            if directed {
                removed += before - list.len();
            }
            for e in list.iter_mut().filter(|e| e.dest > v) {
                e.dest -= 1;
            }
        }

        self.num_edges -= removed;
        if let Some(coords) = &mut self.coords {
            coords.remove(v);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Coordinates
    // -----------------------------------------------------------------------

    /// Attach planar coordinates to `v`, allocating the store on first use.
    ///
    /// Vertices never assigned read back as `(0, 0)`.
    pub fn set_coordinates(&mut self, v: VertexId, x: f64, y: f64) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        if self.coords.is_none() {
            let n = self.adj.len();
            let mut coords = Vec::new();
            coords.try_reserve_exact(n)?;
            coords.resize(n, Coordinates::ZERO);
            self.coords = Some(coords);
        }
        if let Some(coords) = &mut self.coords {
            coords[v] = Coordinates::new(x, y);
        }
        Ok(())
    }

    /// Whether any vertex has ever been given coordinates.
    #[inline]
    pub fn has_coordinates(&self) -> bool {
        self.coords.is_some()
    }

    /// Coordinates of `v`, or `None` if the store is absent or `v` is invalid.
    pub fn coordinates(&self, v: VertexId) -> Option<Coordinates> {
        self.coords.as_ref()?.get(v).copied()
    }

    /// Straight-line distance between two vertices, `0.0` when unknown.
    pub fn euclidean_distance(&self, v1: VertexId, v2: VertexId) -> f64 {
        match (self.coordinates(v1), self.coordinates(v2)) {
            (Some(a), Some(b)) => a.euclidean(b),
            _ => 0.0,
        }
    }

    /// Manhattan distance between two vertices, `0.0` when unknown.
    pub fn manhattan_distance(&self, v1: VertexId, v2: VertexId) -> f64 {
        match (self.coordinates(v1), self.coordinates(v2)) {
            (Some(a), Some(b)) => a.manhattan(b),
            _ => 0.0,
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}", self.num_vertices())?;
        writeln!(f, "Edges: {}", self.num_edges)?;
        writeln!(
            f,
            "Type: {}, {}",
            if self.weighted { "Weighted" } else { "Unweighted" },
            if self.directed { "Directed" } else { "Undirected" },
        )?;
        writeln!(f)?;
        writeln!(f, "Adjacency List:")?;
        for v in 0..self.num_vertices() {
            write!(f, "Vertex {v}:")?;
            for e in self.edges(v) {
                if self.weighted {
                    write!(f, " -> {}({:.1})", e.dest, e.weight)?;
                } else {
                    write!(f, " -> {}", e.dest)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// serde: graphs travel as a flat snapshot and are rebuilt through the public
// mutators, so a deserialized graph satisfies the same invariants.
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphSnapshot {
    num_vertices: usize,
    weighted: bool,
    directed: bool,
    edges: Vec<(VertexId, VertexId, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinates: Option<Vec<Coordinates>>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let snap = GraphSnapshot {
            num_vertices: self.num_vertices(),
            weighted: self.weighted,
            directed: self.directed,
            edges: self
                .logical_edges()
                .map(|(src, e)| (src, e.dest, e.weight))
                .collect(),
            coordinates: self.coords.clone(),
        };
        serde::Serialize::serialize(&snap, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Graph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let snap = <GraphSnapshot as serde::Deserialize>::deserialize(deserializer)?;
        let mut graph =
            Graph::new(snap.num_vertices, snap.weighted, snap.directed).map_err(D::Error::custom)?;
        for (src, dest, weight) in snap.edges {
            graph.add_edge(src, dest, weight).map_err(D::Error::custom)?;
        }
        if let Some(coords) = snap.coordinates {
            if coords.len() != snap.num_vertices {
                return Err(D::Error::custom(format!(
                    "expected {} coordinates, found {}",
                    snap.num_vertices,
                    coords.len()
                )));
            }
            for (v, c) in coords.into_iter().enumerate() {
                graph.set_coordinates(v, c.x, c.y).map_err(D::Error::custom)?;
            }
        }
        Ok(graph)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_snapshot_rebuilds_mirrors() {
        let mut g = Graph::new(3, true, false).unwrap();
        g.add_edge(0, 1, 1.5).unwrap();
        g.add_edge(1, 2, 2.5).unwrap();
        g.set_coordinates(2, 4.0, 5.0).unwrap();

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_edges(), 2);
        assert_eq!(back.edge_weight(2, 1), Some(2.5));
        assert_eq!(back.coordinates(2), Some(Coordinates::new(4.0, 5.0)));
    }

    #[test]
    fn snapshot_after_shrinking_to_one_vertex() {
        let mut g = Graph::new(2, true, true).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(1, 1, 3.0).unwrap();
        g.remove_vertex(0).unwrap();
        assert!(g.remove_vertex(0).is_err());

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_vertices(), 1);
        assert_eq!(back.edge_weight(0, 0), Some(3.0));
    }

    #[test]
    fn snapshot_with_bad_vertex_is_rejected() {
        let json = r#"{"num_vertices":2,"weighted":false,"directed":true,"edges":[[0,5,1.0]]}"#;
        assert!(serde_json::from_str::<Graph>(json).is_err());
    }
}
