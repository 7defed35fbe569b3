//! Weighted adjacency lists for sparse graphs.
//!
//! The vertex set is fixed at construction time to $\\{0,\\ldots,n-1\\}$. Edges can only be
//! added; repeated edges and self-loops are kept as they are. For undirected graphs every edge
//! $uv$ is stored in the lists of both endpoints with the same weight.
//!
//! ```rust
//! use weightgraph::graph::*;
//! use weightgraph::adjlist::AdjacencyList;
//!
//! let mut graph = AdjacencyList::new(4);
//! graph.add_weighted_edge(0, 1, 1.0).unwrap();
//! graph.add_weighted_edge(1, 2, 2.0).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! assert_eq!(graph.neighbours(1).collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
//! assert_eq!(graph.edges(), &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0)]);
//! assert!(graph.add_edge(3, 4).is_err());
//! ```
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList {
    adj: Vec<Vec<(Vertex, Weight)>>,
    edges: Vec<WeightedEdge>,
    directed: bool,
}

impl WeightedGraph for AdjacencyList {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn neighbours<'a>(&'a self, u:Vertex) -> Box<dyn Iterator<Item=(Vertex, Weight)> + 'a> {
        match self.adj.get(u as usize) {
            Some(N) => Box::new(N.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn degree(&self, u:Vertex) -> usize {
        self.adj.get(u as usize).map_or(0, |N| N.len())
    }
}

impl AdjacencyList {
    /// Creates an undirected graph on `n` vertices without edges.
    pub fn new(n:usize) -> Self {
        AdjacencyList { adj: vec![Vec::new(); n], edges: Vec::new(), directed: false }
    }

    /// Creates a directed graph on `n` vertices without arcs.
    pub fn directed(n:usize) -> Self {
        AdjacencyList { adj: vec![Vec::new(); n], edges: Vec::new(), directed: true }
    }

    /// Creates a graph on `n` vertices from a collection of weighted edges.
    pub fn with_edges<I>(n:usize, directed:bool, edges:I) -> GraphResult<Self>
        where I: IntoIterator<Item=WeightedEdge>
    {
        let mut res = if directed { AdjacencyList::directed(n) } else { AdjacencyList::new(n) };
        for (u, v, w) in edges {
            res.add_weighted_edge(u, v, w)?;
        }
        debug!(n, m = res.num_edges(), directed, "built adjacency list");
        Ok(res)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of calls to `add_edge`/`add_weighted_edge` that succeeded.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The edges in the order in which they were added, each listed once.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Adds the edge $uv$ with weight [DEFAULT_WEIGHT].
    pub fn add_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Appends `(v, weight)` to the list of `u` and, if the graph is undirected,
    /// `(u, weight)` to the list of `v`.
    pub fn add_weighted_edge(&mut self, u:Vertex, v:Vertex, weight:Weight) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.adj[u as usize].push((v, weight));
        if !self.directed {
            self.adj[v as usize].push((u, weight));
        }
        self.edges.push((u, v, weight));
        Ok(())
    }

    /// Generates an undirected path on `n` vertices with unit weights.
    pub fn path(n:u32) -> AdjacencyList {
        let mut res = AdjacencyList::new(n as usize);
        for u in 1..n {
            res.adj[(u-1) as usize].push((u, DEFAULT_WEIGHT));
            res.adj[u as usize].push((u-1, DEFAULT_WEIGHT));
            res.edges.push((u-1, u, DEFAULT_WEIGHT));
        }
        res
    }

    /// Generates an undirected cycle on `n` vertices with unit weights.
    pub fn cycle(n:u32) -> AdjacencyList {
        let mut res = AdjacencyList::path(n);
        if n > 1 {
            res.adj[(n-1) as usize].push((0, DEFAULT_WEIGHT));
            res.adj[0].push((n-1, DEFAULT_WEIGHT));
            res.edges.push((n-1, 0, DEFAULT_WEIGHT));
        }
        res
    }

    /// Generates an undirected complete graph on `n` vertices with unit weights.
    pub fn clique(n:u32) -> AdjacencyList {
        let mut res = AdjacencyList::new(n as usize);
        for u in 0..n {
            for v in (u+1)..n {
                res.adj[u as usize].push((v, DEFAULT_WEIGHT));
                res.adj[v as usize].push((u, DEFAULT_WEIGHT));
                res.edges.push((u, v, DEFAULT_WEIGHT));
            }
        }
        res
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
