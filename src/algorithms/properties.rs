use tracing::{debug, warn};

use crate::datastructures::DisjointSet;
use crate::error::{GraphError, GraphResult};
use crate::graph::*;
use crate::iterators::NeighbourhoodIterable;

pub trait StructuralProperties {
    /// Vertices with odd degree. A self-loop of an adjacency list contributes two
    /// to the degree of its vertex.
    fn odd_vertices(&self) -> VertexSet;

    /// Returns whether every vertex has even degree.
    ///
    /// This is the degree condition for an Eulerian circuit only: connectivity of
    /// the edge set is *not* checked, so a disjoint union of two cycles passes.
    fn has_eulerian_circuit(&self) -> bool;

    /// Returns whether zero or exactly two vertices have odd degree. As with
    /// [has_eulerian_circuit](StructuralProperties::has_eulerian_circuit),
    /// connectivity is not checked.
    fn has_eulerian_path(&self) -> bool;

    /// Orders the vertices of a directed graph by decreasing DFS finishing time,
    /// starting a search at every unvisited vertex in order of their id.
    ///
    /// For acyclic graphs every arc $uv$ has $u$ before $v$ in the result. Cycles are
    /// not detected; on cyclic input the returned sequence still contains every
    /// vertex once but is not a topological order.
    fn topological_sort(&self) -> Vec<Vertex>;

    /// Same order as [topological_sort](StructuralProperties::topological_sort) but fails
    /// with [GraphError::CycleDetected] if the graph contains a directed cycle.
    fn checked_topological_sort(&self) -> GraphResult<Vec<Vertex>>;

    /// Not provided: deciding whether a Hamiltonian path exists is NP-complete.
    /// Always returns [GraphError::NotImplemented].
    fn has_hamiltonian_path(&self) -> GraphResult<bool>;

    /// Connected components, each given as a vertex set and ordered by their
    /// smallest vertex. Arcs are treated as undirected.
    fn components(&self) -> Vec<VertexSet>;
}

impl<G> StructuralProperties for G where G: WeightedGraph {
    fn odd_vertices(&self) -> VertexSet {
        self.neighbourhoods()
            .filter_map(|(v, N)| if N.count() % 2 == 1 { Some(v) } else { None })
            .collect()
    }

    fn has_eulerian_circuit(&self) -> bool {
        self.odd_vertices().is_empty()
    }

    fn has_eulerian_path(&self) -> bool {
        let odd = self.odd_vertices().len();
        odd == 0 || odd == 2
    }

    fn topological_sort(&self) -> Vec<Vertex> {
        debug!(n = self.num_vertices(), "topological sort");
        finishing_order(self).0
    }

    fn checked_topological_sort(&self) -> GraphResult<Vec<Vertex>> {
        debug!(n = self.num_vertices(), "checked topological sort");
        match finishing_order(self) {
            (order, None) => Ok(order),
            (_, Some(vertex)) => {
                warn!(vertex, "directed cycle found");
                Err(GraphError::CycleDetected { vertex })
            }
        }
    }

    fn has_hamiltonian_path(&self) -> GraphResult<bool> {
        Err(GraphError::NotImplemented("Hamiltonian path search"))
    }

    fn components(&self) -> Vec<VertexSet> {
        let mut dsets = DisjointSet::new(self.num_vertices());
        for (u, v, _) in self.arcs() {
            dsets.union(u, v);
        }
        dsets.sets()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    New,
    Active,
    Done,
}

/// Returns the vertices by decreasing finishing time of a DFS over the whole graph,
/// together with the target of the first back edge that was encountered, if any.
fn finishing_order<G>(graph:&G) -> (Vec<Vertex>, Option<Vertex>) where G: WeightedGraph {
    let n = graph.num_vertices();
    let mut mark = vec![Mark::New; n];
    let mut finished = Vec::with_capacity(n);
    let mut back_edge = None;

    for root in graph.vertices() {
        if mark[root as usize] != Mark::New {
            continue;
        }
        mark[root as usize] = Mark::Active;
        let mut stack = vec![(root, graph.neighbours(root))];

        while let Some((u, N)) = stack.last_mut() {
            let u = *u;
            let mut next = None;
            for (v, _) in N {
                match mark[v as usize] {
                    Mark::New => {
                        next = Some(v);
                        break;
                    }
                    Mark::Active => {
                        back_edge.get_or_insert(v);
                    }
                    Mark::Done => {}
                }
            }

            match next {
                Some(v) => {
                    mark[v as usize] = Mark::Active;
                    stack.push((v, graph.neighbours(v)));
                }
                None => {
                    mark[u as usize] = Mark::Done;
                    finished.push(u);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    (finished, back_edge)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
