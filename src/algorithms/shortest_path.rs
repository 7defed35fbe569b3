use tracing::{debug, trace, warn};

use crate::datastructures::MinQueue;
use crate::error::{GraphError, GraphResult};
use crate::graph::*;

/// Single-source shortest path distances together with the predecessor of
/// every vertex on one shortest path. Both vectors are indexed by vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree {
    pub start: Vertex,
    /// Length of a shortest path from `start`, `f64::INFINITY` if there is none.
    pub distance: Vec<Weight>,
    /// Predecessor on a shortest path, `None` for `start` and unreachable vertices.
    pub previous: Vec<Option<Vertex>>,
}

impl PathTree {
    fn new(n:usize, start:Vertex) -> Self {
        let mut distance = vec![f64::INFINITY; n];
        distance[start as usize] = 0.0;
        PathTree { start, distance, previous: vec![None; n] }
    }

    pub fn distance_to(&self, v:Vertex) -> Option<Weight> {
        self.distance.get(v as usize).cloned().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, v:Vertex) -> bool {
        self.distance_to(v).is_some()
    }

    /// All vertices with a finite distance, in increasing order of their id.
    pub fn reachable(&self) -> Vec<Vertex> {
        (0..self.distance.len() as Vertex).filter(|&v| self.is_reachable(v)).collect()
    }

    /// Follows the predecessors back from `v` and returns the path `start, ..., v`.
    pub fn path_to(&self, v:Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(v) {
            return None
        }

        let mut path = vec![v];
        let mut curr = v;
        while let Some(p) = self.previous[curr as usize] {
            path.push(p);
            curr = p;
            // A predecessor chain never needs more than n vertices
            if path.len() > self.distance.len() {
                return None
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Bellman-Ford over an explicit list of arcs `(u, v, w)` on the vertices $0,\\ldots,n-1$.
///
/// Every arc is relaxed only in its stated direction, so an undirected graph must
/// list both directions (see [WeightedGraph::arcs]). After $n-1$ passes one more pass
/// is made; if any arc still relaxes a negative cycle is reachable from `start`
/// and [GraphError::NegativeCycle] is returned. Runs in $O(nm)$ time.
pub fn bellman_ford(edges:&[WeightedEdge], n:usize, start:Vertex) -> GraphResult<PathTree> {
    check_vertex(start, n)?;
    check_edges(edges, n)?;
    debug!(start, n, m = edges.len(), "bellman-ford");

    let mut res = PathTree::new(n, start);

    for pass in 1..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            let du = res.distance[u as usize];
            if du + w < res.distance[v as usize] {
                res.distance[v as usize] = du + w;
                res.previous[v as usize] = Some(u);
                changed = true;
            }
        }
        if !changed {
            break;
        }
        trace!(pass, "relaxation pass changed distances");
    }

    for &(u, v, w) in edges {
        if res.distance[u as usize] + w < res.distance[v as usize] {
            warn!(start, u, v, "negative cycle detected");
            return Err(GraphError::NegativeCycle)
        }
    }

    Ok(res)
}

pub trait ShortestPaths {
    /// Dijkstra's algorithm from `start`, runs in $O(m \\log n)$ time.
    ///
    /// All edge weights must be non-negative. This is not checked; with
    /// negative weights the returned distances are unspecified.
    fn dijkstra(&self, start:Vertex) -> GraphResult<PathTree>;

    /// Bellman-Ford from `start` over all stored arcs of the graph. Fails with
    /// [GraphError::NegativeCycle] if a negative cycle is reachable from `start`.
    /// Note that in an undirected graph any negative edge forms such a cycle.
    fn bellman_ford(&self, start:Vertex) -> GraphResult<PathTree>;
}

impl<G> ShortestPaths for G where G: WeightedGraph {
    fn dijkstra(&self, start:Vertex) -> GraphResult<PathTree> {
        self.check_vertex(start)?;
        debug!(start, n = self.num_vertices(), "dijkstra");

        let mut res = PathTree::new(self.num_vertices(), start);
        let mut queue = MinQueue::with_capacity(self.num_vertices());
        queue.push(start, 0.0);

        while let Some((u, dist)) = queue.pop() {
            let du = res.distance[u as usize];
            // Stale entry, u was settled with a smaller distance already
            if dist > du {
                continue;
            }

            for (v, w) in self.neighbours(u) {
                if du + w < res.distance[v as usize] {
                    res.distance[v as usize] = du + w;
                    res.previous[v as usize] = Some(u);
                    queue.push(v, du + w);
                }
            }
        }

        Ok(res)
    }

    fn bellman_ford(&self, start:Vertex) -> GraphResult<PathTree> {
        bellman_ford(&self.arcs(), self.num_vertices(), start)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
