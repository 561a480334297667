use serde::{Deserialize, Serialize};

/// Immutable, symmetric distance matrix over `0..dim` node indices.
///
/// Node `0` is always the depot. Instance files address nodes `1..=n`;
/// callers are expected to translate externally-facing 1-based ids to the
/// 0-based indices this type stores, as spec.md §3 requires.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceMatrix {
    dim: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let dim = rows.len();
        let mut values = Vec::with_capacity(dim * dim);
        for row in &rows {
            assert_eq!(row.len(), dim, "distance matrix must be square");
            values.extend_from_slice(row);
        }
        Self { dim, values }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, u: usize, v: usize) -> f64 {
        self.values[u * self.dim + v]
    }

    /// A matrix is well-formed for MLP when square, zero on the diagonal and
    /// symmetric. Checked once at load time; not re-checked during search.
    pub fn is_valid(&self) -> bool {
        for u in 0..self.dim {
            if self.get(u, u) != 0.0 {
                return false;
            }
            for v in 0..self.dim {
                if self.get(u, v) < 0.0 || self.get(u, v) != self.get(v, u) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
    }

    #[test]
    fn get_reads_row_major() {
        let d = sample();
        assert_eq!(2.0, d.get(0, 2));
        assert_eq!(2.0, d.get(2, 0));
    }

    #[test]
    fn valid_instance_is_accepted() {
        assert_eq!(true, sample().is_valid());
    }

    #[test]
    fn asymmetric_matrix_is_rejected() {
        let bad = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert_eq!(false, bad.is_valid());
    }

    #[test]
    fn nonzero_diagonal_is_rejected() {
        let bad = DistanceMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(false, bad.is_valid());
    }
}
