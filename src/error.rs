//! Error type shared by all graph constructors and algorithms.
//!
//! Only a handful of input defects are detected. Negative weights passed to
//! [dijkstra](crate::algorithms::ShortestPaths::dijkstra), cycles passed to
//! [topological_sort](crate::algorithms::StructuralProperties::topological_sort) and
//! disconnected graphs passed to the Eulerian checks are documented preconditions
//! and are *not* reported here.

use thiserror::Error;

use crate::graph::Vertex;

/// Result alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A vertex id outside of `[0, n)` was passed to a mutator or algorithm.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: Vertex, n: usize },

    /// Bellman-Ford found an edge that still relaxes after $n-1$ passes.
    #[error("graph contains a negative-weight cycle reachable from the start vertex")]
    NegativeCycle,

    /// A back edge was found while computing a checked topological order.
    #[error("graph contains a directed cycle through vertex {vertex}")]
    CycleDetected { vertex: Vertex },

    /// The requested capability is deliberately not provided.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
