//! Graph algorithms, implemented for every [WeightedGraph](crate::graph::WeightedGraph).
//!
//! Each trait is implemented for all types that implement [WeightedGraph](crate::graph::WeightedGraph),
//! so the algorithms can be called directly on an [AdjacencyList](crate::adjlist::AdjacencyList)
//! or an [AdjacencyMatrix](crate::adjmatrix::AdjacencyMatrix) once the trait is in scope.
//! None of them modify the graph.
pub mod mst;
pub mod properties;
pub mod shortest_path;
pub mod traversal;

pub use mst::{kruskal, total_weight, SpanningTrees};
pub use properties::StructuralProperties;
pub use shortest_path::{bellman_ford, PathTree, ShortestPaths};
pub use traversal::Traversal;
