use itertools::Itertools;
use tracing::debug;

use crate::datastructures::{DisjointSet, MinQueue};
use crate::error::GraphResult;
use crate::graph::*;

/// Kruskal's algorithm on an explicit edge list over the vertices $0,\\ldots,n-1$.
///
/// Edges are considered by ascending weight (ties keep their input order) and
/// accepted whenever they join two different components. Returns $n-1$ edges if
/// the graph is connected and a minimum spanning forest with fewer edges otherwise.
/// Runs in $O(m \\log m)$ time.
pub fn kruskal(edges:&[WeightedEdge], n:usize) -> GraphResult<Vec<WeightedEdge>> {
    check_edges(edges, n)?;
    debug!(n, m = edges.len(), "kruskal");

    let mut dsets = DisjointSet::new(n);
    let mut res = Vec::with_capacity(n.saturating_sub(1));
    for &(u, v, w) in edges.iter().sorted_by(|a, b| a.2.total_cmp(&b.2)) {
        if dsets.union(u, v) {
            res.push((u, v, w));
            if res.len() + 1 == n {
                break;
            }
        }
    }

    Ok(res)
}

/// Total weight of a collection of edges.
pub fn total_weight(edges:&[WeightedEdge]) -> Weight {
    edges.iter().map(|e| e.2).sum()
}

/// Minimum spanning trees of undirected graphs.
pub trait SpanningTrees {
    /// Kruskal's algorithm over all stored arcs, see [kruskal].
    fn kruskal(&self) -> GraphResult<Vec<WeightedEdge>>;

    /// Prim's algorithm grown from `start`. Returns the edges `(parent, v, w)` through
    /// which every other vertex of `start`'s component joined the tree, in the order
    /// in which the vertices joined. Runs in $O(m \\log n)$ time.
    fn prim(&self, start:Vertex) -> GraphResult<Vec<WeightedEdge>>;

    /// Runs the same frontier search as [prim](SpanningTrees::prim) but records, each
    /// time a vertex $u$ is added, *every* edge from $u$ to a neighbour that is not yet
    /// in the tree. The result contains the tree edges but in general also others and
    /// can have more than $n-1$ entries.
    fn prim_candidate_edges(&self, start:Vertex) -> GraphResult<Vec<WeightedEdge>>;
}

impl<G> SpanningTrees for G where G: WeightedGraph {
    fn kruskal(&self) -> GraphResult<Vec<WeightedEdge>> {
        kruskal(&self.arcs(), self.num_vertices())
    }

    fn prim(&self, start:Vertex) -> GraphResult<Vec<WeightedEdge>> {
        self.check_vertex(start)?;
        debug!(start, n = self.num_vertices(), "prim");

        let mut in_tree = vec![false; self.num_vertices()];
        let mut res = Vec::new();
        let mut frontier:MinQueue<(Vertex, Option<Vertex>)> = MinQueue::new();
        frontier.push((start, None), 0.0);

        while let Some(((u, parent), w)) = frontier.pop() {
            if in_tree[u as usize] {
                continue;
            }
            in_tree[u as usize] = true;
            if let Some(p) = parent {
                res.push((p, u, w));
            }

            for (v, w) in self.neighbours(u) {
                if !in_tree[v as usize] {
                    frontier.push((v, Some(u)), w);
                }
            }
        }

        Ok(res)
    }

    fn prim_candidate_edges(&self, start:Vertex) -> GraphResult<Vec<WeightedEdge>> {
        self.check_vertex(start)?;
        debug!(start, n = self.num_vertices(), "prim candidate edges");

        let mut visited = vec![false; self.num_vertices()];
        let mut res = Vec::new();
        let mut frontier = MinQueue::new();
        frontier.push(start, 0.0);

        while let Some((u, _)) = frontier.pop() {
            if visited[u as usize] {
                continue;
            }
            visited[u as usize] = true;

            for (v, w) in self.neighbours(u) {
                if !visited[v as usize] {
                    frontier.push(v, w);
                    res.push((u, v, w));
                }
            }
        }

        Ok(res)
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
    use crate::adjlist::AdjacencyList;
    use crate::adjmatrix::AdjacencyMatrix;
    use crate::error::GraphError;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn diamond_edges() -> Vec<WeightedEdge> {
        vec![(0,1,1.0), (1,2,2.0), (0,2,4.0), (2,3,1.0)]
    }

    fn is_forest(edges:&[WeightedEdge], n:usize) -> bool {
        let mut dsets = DisjointSet::new(n);
        edges.iter().all(|&(u, v, _)| dsets.union(u, v))
    }

    fn random_connected(rng:&mut ChaCha8Rng, n:u32, extra:usize) -> AdjacencyList {
        let mut G = AdjacencyList::new(n as usize);
        for v in 1..n {
            let u = rng.gen_range(0..v);
            G.add_weighted_edge(u, v, rng.gen_range(1..30) as Weight).unwrap();
        }
        for _ in 0..extra {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            G.add_weighted_edge(u, v, rng.gen_range(1..30) as Weight).unwrap();
        }
        G
    }

    #[test]
    fn kruskal_diamond() {
        let T = kruskal(&diamond_edges(), 4).unwrap();
        assert_eq!(T, vec![(0,1,1.0), (2,3,1.0), (1,2,2.0)]);
        assert_eq!(total_weight(&T), 4.0);

        let G = AdjacencyList::with_edges(4, false, diamond_edges()).unwrap();
        assert_eq!(total_weight(&G.kruskal().unwrap()), 4.0);
    }

    #[test]
    fn kruskal_forest() {
        let edges = vec![(0,1,3.0), (2,3,1.0), (3,4,2.0), (2,4,0.5)];
        let T = kruskal(&edges, 6).unwrap();
        assert_eq!(T, vec![(2,4,0.5), (2,3,1.0), (0,1,3.0)]);
        assert!(is_forest(&T, 6));

        assert!(kruskal(&[], 0).unwrap().is_empty());
        assert!(kruskal(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn kruskal_out_of_range() {
        assert_eq!(kruskal(&[(0,3,1.0)], 3), Err(GraphError::VertexOutOfRange { vertex: 3, n: 3 }));
    }

    #[test]
    fn prim_diamond() {
        let G = AdjacencyList::with_edges(4, false, diamond_edges()).unwrap();
        let T = G.prim(0).unwrap();
        assert_eq!(T, vec![(0,1,1.0), (1,2,2.0), (2,3,1.0)]);

        let mut M = AdjacencyMatrix::new(4);
        for (u, v, w) in diamond_edges() {
            M.add_weighted_edge(u, v, w).unwrap();
        }
        assert_eq!(M.prim(0).unwrap(), T);
        assert_eq!(total_weight(&M.kruskal().unwrap()), 4.0);
    }

    #[test]
    fn prim_component_only() {
        let G = AdjacencyList::with_edges(5, false, vec![(0,1,1.0), (3,4,1.0)]).unwrap();
        assert_eq!(G.prim(3).unwrap(), vec![(3,4,1.0)]);
        assert!(G.prim(2).unwrap().is_empty());
        assert!(G.prim(5).is_err());
    }

    #[test]
    fn prim_candidates() {
        let G = AdjacencyList::with_edges(4, false, diamond_edges()).unwrap();
        let C = G.prim_candidate_edges(0).unwrap();
        // 0 sees 1 and 2, 1 sees 2, 2 sees 3
        assert_eq!(C, vec![(0,1,1.0), (0,2,4.0), (1,2,2.0), (2,3,1.0)]);
        assert!(C.len() > G.num_vertices() - 1);

        let T = G.prim(0).unwrap();
        assert!(T.iter().all(|e| C.contains(e)));
    }

    #[test]
    fn spanning_tree_properties() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..30 {
            let n = rng.gen_range(2..30);
            let G = random_connected(&mut rng, n, 40);
            let K = G.kruskal().unwrap();
            let P = G.prim(0).unwrap();

            assert_eq!(K.len(), n as usize - 1);
            assert_eq!(P.len(), n as usize - 1);
            assert!(is_forest(&K, n as usize));
            assert!(is_forest(&P, n as usize));
            assert_eq!(total_weight(&K), total_weight(&P));
        }
    }

    #[test]
    fn kruskal_minimal() {
        // Compare against all spanning trees of small graphs
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..15 {
            let G = random_connected(&mut rng, 6, 5);
            let n = G.num_vertices();
            let best = total_weight(&kruskal(G.edges(), n).unwrap());

            for subset in G.edges().iter().cloned().combinations(n - 1) {
                if is_forest(&subset, n) {
                    assert!(best <= total_weight(&subset));
                }
            }
        }
    }
}
