use fxhash::{FxHashMap, FxHashSet};

use crate::error::{GraphError, GraphResult};

pub type Vertex = u32;
pub type Weight = f64;
pub type WeightedEdge = (Vertex, Vertex, Weight);
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// Weight used by `add_edge` when none is given.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Read-only view of a weighted graph whose vertices are the dense ids $0,\\ldots,n-1$.
///
/// Every algorithm in [crate::algorithms] is implemented for all types with this
/// trait and only ever takes `&self`, so one graph can be queried from several
/// places (or threads) at once.
pub trait WeightedGraph {
    fn num_vertices(&self) -> usize;

    /// Iterates over the stored `(neighbour, weight)` pairs of `u`. For adjacency
    /// lists this is insertion order and may contain repetitions.
    fn neighbours<'a>(&'a self, u:Vertex) -> Box<dyn Iterator<Item=(Vertex, Weight)> + 'a>;

    fn contains(&self, u:Vertex) -> bool {
        (u as usize) < self.num_vertices()
    }

    fn degree(&self, u:Vertex) -> usize {
        self.neighbours(u).count()
    }

    fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.num_vertices() as Vertex
    }

    /// Returns every stored adjacency entry as an arc `(u, v, w)`. An undirected
    /// edge therefore shows up once in each direction.
    fn arcs(&self) -> Vec<WeightedEdge> {
        let mut res = Vec::new();
        for u in self.vertices() {
            res.extend(self.neighbours(u).map(|(v, w)| (u, v, w)));
        }
        res
    }

    fn check_vertex(&self, u:Vertex) -> GraphResult<()> {
        check_vertex(u, self.num_vertices())
    }
}

pub(crate) fn check_vertex(u:Vertex, n:usize) -> GraphResult<()> {
    if (u as usize) < n {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange { vertex: u, n })
    }
}

/// Validates the endpoints of every edge in `edges` against the vertex count `n`.
pub(crate) fn check_edges(edges:&[WeightedEdge], n:usize) -> GraphResult<()> {
    for &(u, v, _) in edges {
        check_vertex(u, n)?;
        check_vertex(v, n)?;
    }
    Ok(())
}
