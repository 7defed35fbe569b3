use crate::graph::{Vertex, Weight, WeightedGraph};

/// Iterates over the non-zero entries of one adjacency matrix row,
/// yielding `(column, weight)` pairs in column order.
pub struct RowIterator<'a> {
    row: std::iter::Enumerate<std::slice::Iter<'a, Weight>>,
}

impl<'a> RowIterator<'a> {
    pub fn new(row: &'a [Weight]) -> RowIterator<'a> {
        RowIterator { row: row.iter().enumerate() }
    }
}

impl<'a> Iterator for RowIterator<'a> {
    type Item = (Vertex, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        for (v, &w) in self.row.by_ref() {
            if w != 0.0 {
                return Some((v as Vertex, w));
            }
        }
        None
    }
}

/*
    Neighbourhood iterator for weighted graphs. At each step,
    the iterator returns a pair (v,N(v)).
*/
pub struct NIterator<'a, G> where G: WeightedGraph {
    G: &'a G,
    v_it: std::ops::Range<Vertex>,
}

impl<'a, G> NIterator<'a, G> where G: WeightedGraph {
    pub fn new(G: &'a G) -> NIterator<'a, G> {
        NIterator { G, v_it: G.vertices() }
    }
}

impl<'a, G> Iterator for NIterator<'a, G> where G: WeightedGraph {
    type Item = (Vertex, Box<dyn Iterator<Item=(Vertex, Weight)> + 'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let N = self.G.neighbours(v);

        Some((v, N))
    }
}

/// Allows iteration over the neighbourhoods of all vertices.
pub trait NeighbourhoodIterable: WeightedGraph + Sized {
    fn neighbourhoods(&self) -> NIterator<'_, Self> {
        NIterator::new(self)
    }
}

impl<G> NeighbourhoodIterable for G where G: WeightedGraph {}
