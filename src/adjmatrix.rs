//! Dense $n \\times n$ weight matrix for undirected graphs.
//!
//! An entry of `0` means that there is no edge. Consequently this representation
//! cannot hold edges of weight exactly zero; use [AdjacencyList](crate::adjlist::AdjacencyList)
//! for those. Adding an edge twice overwrites its weight.
use crate::adjlist::AdjacencyList;
use crate::error::GraphResult;
use crate::graph::*;
use crate::iterators::RowIterator;

#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<Weight>,
}

impl WeightedGraph for AdjacencyMatrix {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn neighbours<'a>(&'a self, u:Vertex) -> Box<dyn Iterator<Item=(Vertex, Weight)> + 'a> {
        match self.row(u) {
            Some(row) => Box::new(RowIterator::new(row)),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl AdjacencyMatrix {
    /// Creates a zero-filled matrix for `n` vertices.
    pub fn new(n:usize) -> Self {
        AdjacencyMatrix { n, weights: vec![0.0; n*n] }
    }

    fn row(&self, u:Vertex) -> Option<&[Weight]> {
        let u = u as usize;
        if u < self.n {
            Some(&self.weights[u*self.n..(u+1)*self.n])
        } else {
            None
        }
    }

    /// Adds the edge $uv$ with weight [DEFAULT_WEIGHT].
    pub fn add_edge(&mut self, u:Vertex, v:Vertex) -> GraphResult<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Sets both entries `[u][v]` and `[v][u]` to `weight`.
    pub fn add_weighted_edge(&mut self, u:Vertex, v:Vertex, weight:Weight) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let (u, v) = (u as usize, v as usize);
        self.weights[u*self.n + v] = weight;
        self.weights[v*self.n + u] = weight;
        Ok(())
    }

    /// Returns the weight of $uv$, or `None` if the entry is zero or out of range.
    pub fn weight(&self, u:Vertex, v:Vertex) -> Option<Weight> {
        let w = *self.row(u)?.get(v as usize)?;
        if w != 0.0 { Some(w) } else { None }
    }

    /// Converts into an undirected adjacency list. Each edge $uv$ with $u \\leq v$
    /// is added once, in row-major order.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let mut res = AdjacencyList::new(self.n);
        for u in self.vertices() {
            for (v, w) in self.neighbours(u).filter(|&(v, _)| u <= v) {
                // Both endpoints exist by construction.
                let _ = res.add_weighted_edge(u, v, w);
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn basic_operations() {
        let mut M = AdjacencyMatrix::new(3);
        assert_eq!(M.num_vertices(), 3);
        assert!(M.vertices().all(|u| M.degree(u) == 0));

        M.add_edge(0, 2).unwrap();
        M.add_weighted_edge(1, 2, 5.0).unwrap();

        assert_eq!(M.weight(0, 2), Some(1.0));
        assert_eq!(M.weight(2, 0), Some(1.0));
        assert_eq!(M.weight(2, 1), Some(5.0));
        assert_eq!(M.weight(0, 1), None);
        assert_eq!(M.neighbours(2).collect::<Vec<_>>(), vec![(0, 1.0), (1, 5.0)]);
        assert_eq!(M.degree(2), 2);

        // Re-adding overwrites
        M.add_weighted_edge(2, 1, 3.0).unwrap();
        assert_eq!(M.weight(1, 2), Some(3.0));
    }

    #[test]
    fn zero_weight_is_no_edge() {
        let mut M = AdjacencyMatrix::new(2);
        M.add_weighted_edge(0, 1, 0.0).unwrap();
        assert_eq!(M.weight(0, 1), None);
        assert_eq!(M.degree(0), 0);
    }

    #[test]
    fn out_of_range() {
        let mut M = AdjacencyMatrix::new(2);
        assert_eq!(M.add_edge(0, 2), Err(GraphError::VertexOutOfRange { vertex: 2, n: 2 }));
        assert_eq!(M.weight(5, 0), None);
        assert_eq!(M.neighbours(5).count(), 0);
    }

    #[test]
    fn conversion() {
        let mut M = AdjacencyMatrix::new(4);
        M.add_weighted_edge(0, 1, 1.0).unwrap();
        M.add_weighted_edge(2, 1, 2.0).unwrap();
        M.add_weighted_edge(3, 3, 4.0).unwrap();

        let L = M.to_adjacency_list();
        assert_eq!(L.edges(), &[(0, 1, 1.0), (1, 2, 2.0), (3, 3, 4.0)]);
        for u in M.vertices().take(3) {
            assert_eq!(L.neighbours(u).collect::<Vec<_>>(), M.neighbours(u).collect::<Vec<_>>());
        }
    }
}
