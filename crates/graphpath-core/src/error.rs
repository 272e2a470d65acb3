use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::VertexId;

/// Structural errors reported by [`Graph`](crate::Graph) operations and the
/// text format.
///
/// A failed call never leaves the graph partially mutated.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An argument outside its allowed domain, e.g. a zero vertex count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A vertex index outside `[0, num_vertices)`.
    #[error("invalid vertex {vertex} (graph has {num_vertices} vertices)")]
    InvalidVertex {
        vertex: VertexId,
        num_vertices: usize,
    },
    /// Storage for vertices, edges or coordinates could not be reserved.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// Malformed input in the text format. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
