use super::{Edge, MatrixError};

/// A validated, symmetric, non-negative adjacency matrix. A weight of zero
/// means there is no edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Parse the vertex count followed by the matrix rows, separated by any
    /// whitespace.
    ///
    /// # Errors
    ///
    /// The first problem found in reading order.
    pub fn parse(input: &str) -> Result<Self, MatrixError> {
        let mut tokens = input.split_whitespace();
        let first = tokens.next().ok_or(MatrixError::MissingSize)?;
        let n: usize = first
            .parse()
            .map_err(|_| MatrixError::InvalidNumber(first.to_string()))?;

        let expected = n.checked_mul(n).ok_or(MatrixError::TooLarge(n))?;

        // The buffer grows with the input; `n` alone is not trusted.
        let mut matrix = AdjacencyMatrix {
            n,
            weights: Vec::new(),
        };
        for token in tokens.take(expected) {
            let weight: f64 = token
                .parse()
                .map_err(|_| MatrixError::InvalidNumber(token.to_string()))?;
            matrix.push(weight)?;
        }
        if matrix.weights.len() < expected {
            return Err(MatrixError::TooFewValues {
                expected,
                found: matrix.weights.len(),
            });
        }
        Ok(matrix)
    }

    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] when a row's length differs from the number
    /// of rows, otherwise as [`AdjacencyMatrix::parse`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return Err(MatrixError::NotSquare);
        }
        let mut matrix = AdjacencyMatrix {
            n,
            weights: Vec::with_capacity(n * n),
        };
        for weight in rows.into_iter().flatten() {
            matrix.push(weight)?;
        }
        Ok(matrix)
    }

    // Appends the next weight in row-major order, checking it against what
    // has been read so far.
    fn push(&mut self, weight: f64) -> Result<(), MatrixError> {
        let (row, col) = (self.weights.len() / self.n, self.weights.len() % self.n);
        if weight.is_nan() {
            return Err(MatrixError::InvalidNumber(weight.to_string()));
        }
        if row == col && weight != 0.0 {
            return Err(MatrixError::SelfLoop { vertex: row });
        }
        if weight < 0.0 {
            return Err(MatrixError::NegativeWeight { row, col });
        }
        if col < row && weight != self.weight(col, row) {
            return Err(MatrixError::Asymmetric { row, col });
        }
        self.weights.push(weight);
        Ok(())
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn weight(&self, v: usize, w: usize) -> f64 {
        self.weights[v * self.n + w]
    }

    /// Vertices adjacent to `v` with the weight of the connecting edge.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.n)
            .map(move |w| (w, self.weight(v, w)))
            .filter(|&(_, weight)| weight != 0.0)
    }

    /// Every edge once, `v < w`, in row-major order.
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.n)
            .flat_map(|v| {
                self.neighbors(v)
                    .filter(move |&(w, _)| v < w)
                    .map(move |(w, weight)| Edge::new(v, w, weight))
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_reads_rows() {
        let m = AdjacencyMatrix::parse("3\n0 1 2\n1 0 0.5\n2 0.5 0\n").unwrap();
        assert_eq!(3, m.len());
        assert_eq!(0.5, m.weight(2, 1));
        let edges: Vec<_> = m.edges().iter().map(Edge::endpoints).collect();
        assert_eq!(vec![(0, 1), (0, 2), (1, 2)], edges);
    }

    #[test]
    fn parse_ignores_trailing_values() {
        let m = AdjacencyMatrix::parse("1 0 9 9").unwrap();
        assert_eq!(1, m.len());
        assert!(m.edges().is_empty());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Err(MatrixError::MissingSize), AdjacencyMatrix::parse("  "));
        assert_eq!(
            Err(MatrixError::InvalidNumber("x".to_string())),
            AdjacencyMatrix::parse("2 0 x 1 0")
        );
        assert_eq!(
            Err(MatrixError::SelfLoop { vertex: 1 }),
            AdjacencyMatrix::parse("2 0 1 1 3")
        );
        assert_eq!(
            Err(MatrixError::NegativeWeight { row: 0, col: 1 }),
            AdjacencyMatrix::parse("2 0 -1 -1 0")
        );
        assert_eq!(
            Err(MatrixError::Asymmetric { row: 1, col: 0 }),
            AdjacencyMatrix::parse("2 0 1 2 0")
        );
        assert_eq!(
            Err(MatrixError::TooFewValues {
                expected: 4,
                found: 3
            }),
            AdjacencyMatrix::parse("2 0 1 1")
        );
    }

    #[test]
    fn parse_rejects_a_vertex_count_that_overflows() {
        assert_eq!(
            Err(MatrixError::TooLarge(usize::MAX)),
            AdjacencyMatrix::parse(&usize::MAX.to_string())
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn parse_rejects_two_to_the_thirty_two_vertices() {
        assert_eq!(
            Err(MatrixError::TooLarge(4294967296)),
            AdjacencyMatrix::parse("4294967296 0")
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn parse_does_not_trust_a_huge_vertex_count() {
        assert_eq!(
            Err(MatrixError::TooFewValues {
                expected: 10_000_000_000,
                found: 1
            }),
            AdjacencyMatrix::parse("100000 0")
        );
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        assert_eq!(
            Err(MatrixError::NotSquare),
            AdjacencyMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]])
        );
    }

    #[test]
    fn neighbors_skip_missing_edges() {
        let m = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 3.0],
            vec![0.0, 3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(vec![(0, 2.0), (2, 3.0)], m.neighbors(1).collect::<Vec<_>>());
        assert!(!m.is_empty());
    }
}
