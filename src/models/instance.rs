use crate::models::DistanceMatrix;

/// A loaded MLP instance: dimension plus the distance oracle.
///
/// `n` is the total number of locations including the depot (spec.md §3),
/// so a route has `n+1` positions and the depot (external id `1`) bookends
/// it. Internally nodes are addressed `0..n` with the depot at index `0`;
/// `to_internal`/`to_external` translate between the 1-based ids instance
/// files and output use and the 0-based indices the distance matrix and
/// subsequence algebra use.
#[derive(Clone, Debug)]
pub struct Instance {
    pub n: usize,
    pub distances: DistanceMatrix,
}

impl Instance {
    pub fn new(distances: DistanceMatrix) -> anyhow::Result<Self> {
        let dim = distances.dim();
        anyhow::ensure!(dim >= 3, "instance must have at least 3 locations (n >= 3), found {}", dim);
        anyhow::ensure!(
            distances.is_valid(),
            "distance matrix must be square, symmetric and zero on the diagonal"
        );
        Ok(Self { n: dim, distances })
    }

    #[inline]
    pub fn to_internal(&self, external: usize) -> usize {
        external - 1
    }

    #[inline]
    pub fn to_external(&self, internal: usize) -> usize {
        internal + 1
    }
}
