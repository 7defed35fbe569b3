//! Weighted graphs on dense vertex ids and the classic algorithms over them.
//!
//! Graphs have a fixed vertex set $\\{0,\\ldots,n-1\\}$ and come in two flavours,
//! [adjacency lists](adjlist::AdjacencyList) (undirected or directed) and dense
//! [adjacency matrices](adjmatrix::AdjacencyMatrix). Both implement [graph::WeightedGraph],
//! and every algorithm in [algorithms] is available for both once its trait is imported.
//!
//! ```rust
//! use weightgraph::adjlist::AdjacencyList;
//! use weightgraph::algorithms::*;
//!
//! let mut graph = AdjacencyList::new(4);
//! graph.add_weighted_edge(0, 1, 1.0).unwrap();
//! graph.add_weighted_edge(1, 2, 2.0).unwrap();
//! graph.add_weighted_edge(0, 2, 4.0).unwrap();
//! graph.add_weighted_edge(2, 3, 1.0).unwrap();
//!
//! assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2, 3]);
//!
//! let tree = graph.dijkstra(0).unwrap();
//! assert_eq!(tree.distance, vec![0.0, 1.0, 3.0, 4.0]);
//! assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
//!
//! let mst = kruskal(graph.edges(), 4).unwrap();
//! assert_eq!(mst, vec![(0, 1, 1.0), (2, 3, 1.0), (1, 2, 2.0)]);
//! assert_eq!(total_weight(&mst), 4.0);
//! ```
#![allow(non_snake_case)]

pub mod adjlist;
pub mod adjmatrix;
pub mod algorithms;
pub mod datastructures;
pub mod error;
pub mod graph;
pub mod io;
pub mod iterators;

pub use error::{GraphError, GraphResult};
