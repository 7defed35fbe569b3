use std::collections::VecDeque;

use tracing::debug;

use crate::error::GraphResult;
use crate::graph::*;

/// Breadth- and depth-first search from a single start vertex.
pub trait Traversal {
    /// Returns the vertices reachable from `start` in the order in which they are
    /// first dequeued from a FIFO frontier, i.e. by non-decreasing hop distance.
    ///
    /// A vertex is marked visited when it is dequeued, so the frontier may hold
    /// a vertex several times; it is reported only once. Runs in $O(n+m)$ time.
    fn bfs(&self, start:Vertex) -> GraphResult<Vec<Vertex>>;

    /// Returns the preorder of a depth-first search from `start`, exploring
    /// neighbours in the order in which the graph stores them.
    fn dfs(&self, start:Vertex) -> GraphResult<Vec<Vertex>>;

    /// Like [dfs](Traversal::dfs) but treats every vertex in `visited` as already
    /// seen and adds the vertices it visits to `visited`. Returns an empty
    /// sequence if `start` itself is in `visited`.
    fn dfs_with_visited(&self, start:Vertex, visited:&mut VertexSet) -> GraphResult<Vec<Vertex>>;
}

impl<G> Traversal for G where G: WeightedGraph {
    fn bfs(&self, start:Vertex) -> GraphResult<Vec<Vertex>> {
        self.check_vertex(start)?;
        debug!(start, n = self.num_vertices(), "bfs");

        let mut visited = vec![false; self.num_vertices()];
        let mut order = Vec::new();
        let mut frontier = VecDeque::new();
        frontier.push_back(start);

        while let Some(u) = frontier.pop_front() {
            if visited[u as usize] {
                continue;
            }
            visited[u as usize] = true;
            order.push(u);

            for (v, _) in self.neighbours(u) {
                if !visited[v as usize] {
                    frontier.push_back(v);
                }
            }
        }

        Ok(order)
    }

    fn dfs(&self, start:Vertex) -> GraphResult<Vec<Vertex>> {
        self.dfs_with_visited(start, &mut VertexSet::default())
    }

    fn dfs_with_visited(&self, start:Vertex, visited:&mut VertexSet) -> GraphResult<Vec<Vertex>> {
        self.check_vertex(start)?;
        debug!(start, n = self.num_vertices(), seen = visited.len(), "dfs");

        let mut order = Vec::new();
        if !visited.insert(start) {
            return Ok(order)
        }
        order.push(start);

        // Each stack frame keeps its own position in the neighbourhood of its vertex,
        // which yields the same preorder as the recursive formulation.
        let mut stack = vec![self.neighbours(start)];
        while let Some(N) = stack.last_mut() {
            match N.find(|(v, _)| !visited.contains(v)) {
                Some((v, _)) => {
                    visited.insert(v);
                    order.push(v);
                    stack.push(self.neighbours(v));
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(order)
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

    fn tree() -> AdjacencyList {
        //      0
        //    /   \
        //   1     2
        //  / \     \
        // 3   4     5
        AdjacencyList::with_edges(6, false,
            vec![(0,1,1.0), (0,2,1.0), (1,3,1.0), (1,4,1.0), (2,5,1.0)]).unwrap()
    }

    fn random_graph(rng:&mut ChaCha8Rng, n:usize, m:usize) -> AdjacencyList {
        let edges:Vec<_> = (0..m).map(|_| {
            let u = rng.gen_range(0..n) as Vertex;
            let v = rng.gen_range(0..n) as Vertex;
            (u, v, 1.0)
        }).collect();
        AdjacencyList::with_edges(n, false, edges).unwrap()
    }

    #[test]
    fn bfs_order() {
        let G = tree();
        assert_eq!(G.bfs(0).unwrap(), vec![0,1,2,3,4,5]);
        assert_eq!(G.bfs(3).unwrap(), vec![3,1,0,4,2,5]);
    }

    #[test]
    fn dfs_order() {
        let G = tree();
        assert_eq!(G.dfs(0).unwrap(), vec![0,1,3,4,2,5]);
        assert_eq!(G.dfs(5).unwrap(), vec![5,2,0,1,3,4]);
    }

    #[test]
    fn dfs_visited() {
        let G = tree();
        let mut visited:VertexSet = [1].iter().cloned().collect();
        assert_eq!(G.dfs_with_visited(0, &mut visited).unwrap(), vec![0,2,5]);
        assert_eq!(visited, [0,1,2,5].iter().cloned().collect());

        assert!(G.dfs_with_visited(2, &mut visited).unwrap().is_empty());
        assert_eq!(G.dfs_with_visited(3, &mut visited).unwrap(), vec![3]);
    }

    #[test]
    fn disconnected() {
        let G = AdjacencyList::with_edges(5, false, vec![(0,1,1.0), (3,4,1.0)]).unwrap();
        assert_eq!(G.bfs(0).unwrap(), vec![0,1]);
        assert_eq!(G.dfs(4).unwrap(), vec![4,3]);
        assert_eq!(G.bfs(2).unwrap(), vec![2]);
    }

    #[test]
    fn directed() {
        let G = AdjacencyList::with_edges(3, true, vec![(0,1,1.0), (2,1,1.0)]).unwrap();
        assert_eq!(G.bfs(0).unwrap(), vec![0,1]);
        assert_eq!(G.dfs(1).unwrap(), vec![1]);
        assert_eq!(G.dfs(2).unwrap(), vec![2,1]);
    }

    #[test]
    fn matrix() {
        let mut M = AdjacencyMatrix::new(4);
        M.add_edge(0, 3).unwrap();
        M.add_edge(0, 1).unwrap();
        M.add_edge(3, 2).unwrap();
        assert_eq!(M.bfs(0).unwrap(), vec![0,1,3,2]);
        assert_eq!(M.dfs(0).unwrap(), vec![0,1,3,2]);
    }

    #[test]
    fn deep_path() {
        // Deep enough to overflow the call stack with a recursive search
        let G = AdjacencyList::path(200_000);
        let order = G.dfs(0).unwrap();
        assert_eq!(order.len(), 200_000);
        assert!(order.iter().cloned().eq(0..200_000));
    }

    #[test]
    fn out_of_range() {
        let G = tree();
        assert_eq!(G.bfs(6), Err(GraphError::VertexOutOfRange { vertex: 6, n: 6 }));
        assert!(G.dfs(10).is_err());
    }

    #[test]
    fn visit_reachable_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..30 {
            let G = random_graph(&mut rng, 40, 45);
            let start = rng.gen_range(0..40);
            let bfs = G.bfs(start).unwrap();
            let dfs = G.dfs(start).unwrap();

            let bfs_set:VertexSet = bfs.iter().cloned().collect();
            let dfs_set:VertexSet = dfs.iter().cloned().collect();
            assert_eq!(bfs_set.len(), bfs.len());
            assert_eq!(dfs_set.len(), dfs.len());
            assert_eq!(bfs_set, dfs_set);
            assert_eq!(bfs[0], start);
            assert_eq!(dfs[0], start);

            // Everything adjacent to a reached vertex is reached
            for &u in &bfs {
                assert!(G.neighbours(u).all(|(v, _)| bfs_set.contains(&v)));
            }
        }
    }
}
