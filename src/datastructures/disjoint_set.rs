use crate::graph::{Vertex, VertexMap, VertexSet};

/// Union-find over the vertices $0,\\ldots,n-1$ with path compression and union by rank.
///
/// Parents and ranks live in flat arrays indexed by vertex id, which gives amortised
/// $O(\\alpha(n))$ time per operation. Both `find` and `union` panic if handed a
/// vertex outside of the structure; callers validate their input beforehand.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Every vertex starts out as its own root with rank zero.
    pub fn new(n:usize) -> Self {
        DisjointSet { parent: (0..n as Vertex).collect(), rank: vec![0; n], sets: n }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently held.
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `v` and points every
    /// vertex on the way directly at it.
    pub fn find(&mut self, v:Vertex) -> Vertex {
        let mut root = v;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut curr = v;
        while curr != root {
            let next = self.parent[curr as usize];
            self.parent[curr as usize] = root;
            curr = next;
        }
        root
    }

    /// Merges the sets of `u` and `v`. Returns `false` if they already were
    /// the same set, in which case nothing changes.
    pub fn union(&mut self, u:Vertex, v:Vertex) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false
        }

        let (iu, iv) = (ru as usize, rv as usize);
        if self.rank[iu] < self.rank[iv] {
            self.parent[iu] = rv;
        } else if self.rank[iu] > self.rank[iv] {
            self.parent[iv] = ru;
        } else {
            self.parent[iv] = ru;
            self.rank[iu] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, u:Vertex, v:Vertex) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns the partition, ordered by the smallest member of each set.
    pub fn sets(&mut self) -> Vec<VertexSet> {
        let mut index:VertexMap<usize> = VertexMap::default();
        let mut res:Vec<VertexSet> = Vec::with_capacity(self.sets);
        for v in 0..self.len() as Vertex {
            let root = self.find(v);
            let i = *index.entry(root).or_insert_with(|| {
                res.push(VertexSet::default());
                res.len() - 1
            });
            res[i].insert(v);
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
