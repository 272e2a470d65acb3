//! **graphpath-core**: the graph store shared by every search algorithm.
//!
//! This crate provides an adjacency-list [`Graph`] with dynamic vertex and
//! edge mutation, optional per-vertex [`Coordinates`] for distance
//! heuristics, the [`GraphError`] taxonomy, and a plain-text load/save
//! format in [`io`].

pub mod error;
pub mod geom;
pub mod graph;
pub mod io;

pub use error::GraphError;
pub use geom::Coordinates;
pub use graph::{Edge, Graph, VertexId};
