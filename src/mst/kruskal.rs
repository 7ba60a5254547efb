use super::{AdjacencyMatrix, Edge, Weight};

/// Disjoint sets over `0..n` with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[v] != root {
            let next = self.parent[v];
            self.parent[v] = root;
            v = next;
        }
        root
    }

    /// Merge the sets of `v` and `w`; false when they were already one set.
    fn union(&mut self, v: usize, w: usize) -> bool {
        let (v, w) = (self.find(v), self.find(w));
        if v == w {
            return false;
        }
        match self.rank[v].cmp(&self.rank[w]) {
            std::cmp::Ordering::Less => self.parent[v] = w,
            std::cmp::Ordering::Greater => self.parent[w] = v,
            std::cmp::Ordering::Equal => {
                self.parent[w] = v;
                self.rank[v] += 1;
            }
        }
        true
    }
}

/// Kruskal's minimum spanning forest. Edges of equal weight are taken in
/// row-major order.
pub fn kruskal(matrix: &AdjacencyMatrix) -> Vec<Edge> {
    let n = matrix.len();
    let mut edges = matrix.edges();
    edges.sort_by_key(|e| Weight(e.weight));

    let mut sets = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for edge in edges {
        if tree.len() == n.saturating_sub(1) {
            break;
        }
        if sets.union(edge.v, edge.w) {
            tree.push(edge);
        }
    }
    tree
}
