use std::{cmp::Reverse, collections::BinaryHeap};

use super::{AdjacencyMatrix, Edge, Weight};

/// Eager Prim grown from vertex 0. Returns the edges in the order their far
/// vertex joined the tree; fewer than `n - 1` edges means the graph is not
/// connected.
pub fn prim(matrix: &AdjacencyMatrix) -> Vec<Edge> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }
    let mut best: Vec<Option<Edge>> = vec![None; n];
    let mut marked = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut tree = Vec::with_capacity(n - 1);

    // Stale entries are left in the heap and skipped once their vertex is
    // marked.
    heap.push(Reverse((Weight(0.0), 0)));
    while let Some(Reverse((_, v))) = heap.pop() {
        if marked[v] {
            continue;
        }
        marked[v] = true;
        if let Some(edge) = best[v] {
            tree.push(edge);
        }
        for (w, weight) in matrix.neighbors(v) {
            if marked[w] {
                continue;
            }
            if best[w].is_none_or(|edge| weight < edge.weight) {
                best[w] = Some(Edge::new(v, w, weight));
                heap.push(Reverse((Weight(weight), w)));
            }
        }
    }
    tree
}
