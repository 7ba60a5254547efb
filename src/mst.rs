//! Prim versus Kruskal on a weighted adjacency matrix.
//!
//! Unrelated to the tree; both minimum spanning trees are computed and
//! compared edge for edge.
mod kruskal;
mod matrix;
mod prim;

use std::{cmp::Ordering, collections::HashSet, fmt};

use log::debug;
use thiserror::Error;

pub use kruskal::kruskal;
pub use matrix::AdjacencyMatrix;
pub use prim::prim;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("adjacency matrix is empty")]
    MissingSize,
    #[error("a graph with {0} vertices is too large")]
    TooLarge(usize),
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error("adjacency matrix is not square")]
    NotSquare,
    #[error("adjacency matrix contains self-loops (vertex {vertex})")]
    SelfLoop { vertex: usize },
    #[error("adjacency matrix contains negative values (at {row}, {col})")]
    NegativeWeight { row: usize, col: usize },
    #[error("adjacency matrix is not symmetric (at {row}, {col})")]
    Asymmetric { row: usize, col: usize },
    #[error("adjacency matrix for the graph contains too few values ({found} of {expected})")]
    TooFewValues { expected: usize, found: usize },
    #[error("graph is not connected")]
    Disconnected,
}

/// An undirected weighted edge, stored with `v < w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v: usize,
    pub w: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        Edge {
            v: a.min(b),
            w: a.max(b),
            weight,
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// Weights ordered by `f64::total_cmp`, for sorting and heaps.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Weight(pub f64);

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Whether Prim's and Kruskal's minimum spanning trees of `matrix` contain
/// the same edges.
///
/// # Errors
///
/// [`MatrixError::Disconnected`] when no spanning tree exists.
pub fn prim_equals_kruskal(matrix: &AdjacencyMatrix) -> Result<bool, MatrixError> {
    let n = matrix.len();
    if n < 2 {
        return Ok(true);
    }

    let prim_tree = prim(matrix);
    if prim_tree.len() != n - 1 {
        return Err(MatrixError::Disconnected);
    }

    // Distinct weights mean there is only one minimum spanning tree.
    let edges = matrix.edges();
    let mut weights: Vec<Weight> = edges.iter().map(|e| Weight(e.weight)).collect();
    weights.sort_unstable();
    if weights.windows(2).all(|pair| pair[0] != pair[1]) {
        debug!("all {} edge weights are distinct", edges.len());
        return Ok(true);
    }

    let kruskal_tree = kruskal(matrix);
    log_tree("Kruskal", &kruskal_tree);
    log_tree("Prim", &prim_tree);

    let prim_edges: HashSet<(usize, usize)> = prim_tree.iter().map(Edge::endpoints).collect();
    Ok(kruskal_tree
        .iter()
        .all(|edge| prim_edges.contains(&edge.endpoints())))
}

fn log_tree(name: &str, edges: &[Edge]) {
    let total: f64 = edges.iter().map(|e| e.weight).sum();
    for edge in edges {
        debug!("{name}: {edge}");
    }
    debug!("{name}: total weight {total}");
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matrix(rows: &[&[f64]]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn trivial_graphs_agree() {
        assert_eq!(Ok(true), prim_equals_kruskal(&matrix(&[])));
        assert_eq!(Ok(true), prim_equals_kruskal(&matrix(&[&[0.0]])));
    }

    #[test]
    fn distinct_weights_agree() {
        let m = matrix(&[
            &[0.0, 1.0, 3.0, 0.0],
            &[1.0, 0.0, 2.0, 5.0],
            &[3.0, 2.0, 0.0, 4.0],
            &[0.0, 5.0, 4.0, 0.0],
        ]);
        assert_eq!(Ok(true), prim_equals_kruskal(&m));
    }

    #[test]
    fn equal_weights_on_a_triangle_agree() {
        let m = matrix(&[&[0.0, 1.0, 1.0], &[1.0, 0.0, 1.0], &[1.0, 1.0, 0.0]]);
        assert_eq!(Ok(true), prim_equals_kruskal(&m));
    }

    #[test]
    fn ties_can_split_the_trees() {
        // Kruskal takes 0-1, 2-3 then 0-3; Prim grows 0-1, 1-2 then 2-3.
        let m = matrix(&[
            &[0.0, 1.0, 0.0, 5.0],
            &[1.0, 0.0, 5.0, 0.0],
            &[0.0, 5.0, 0.0, 1.0],
            &[5.0, 0.0, 1.0, 0.0],
        ]);
        let kruskal_edges: Vec<_> = kruskal(&m).iter().map(Edge::endpoints).collect();
        assert_eq!(vec![(0, 1), (2, 3), (0, 3)], kruskal_edges);
        let mut prim_edges: Vec<_> = prim(&m).iter().map(Edge::endpoints).collect();
        prim_edges.sort_unstable();
        assert_eq!(vec![(0, 1), (1, 2), (2, 3)], prim_edges);
        assert_eq!(Ok(false), prim_equals_kruskal(&m));
    }

    #[test]
    fn disconnected_graph_fails() {
        let m = matrix(&[
            &[0.0, 1.0, 0.0, 0.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(Err(MatrixError::Disconnected), prim_equals_kruskal(&m));
    }

    #[test]
    fn edge_normalizes_endpoints() {
        let edge = Edge::new(3, 1, 2.5);
        assert_eq!((1, 3), edge.endpoints());
        assert_eq!("1-3 2.50000", edge.to_string());
    }
}
