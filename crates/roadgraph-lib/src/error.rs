use thiserror::Error;

use crate::dimacs::VertexId;

/// Convenient result alias for the road-graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when no route could be found between two vertices.
    #[error("no route found between {src} and {dest}")]
    RouteNotFound { src: VertexId, dest: VertexId },

    /// Raised when a query is issued against a graph with no vertices,
    /// typically because the input files failed to load.
    #[error("graph contains no vertices; check that the input files were loaded")]
    EmptyGraph,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
