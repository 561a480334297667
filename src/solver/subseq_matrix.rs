use crate::models::{DistanceMatrix, Instance, Route, Subsequence};

/// The triangular cache `M` from spec.md §3/§4.2.
///
/// For positions `i <= j`, `M[i][j]` summarises `route[i..=j]` read forward.
/// For `i > j`, `M[i][j]` summarises the same span read *backward* — this
/// lower-triangular half is what 2-opt consults (spec.md §4.4, §9). The
/// matrix is square with side `route.len()` and is fully recomputed by
/// `refresh`; partial maintenance is not attempted, matching spec.md §4.2.
pub struct SubsequenceMatrix {
    side: usize,
    cells: Vec<Subsequence>,
}

impl SubsequenceMatrix {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Subsequence::identity(); side * side],
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.side + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Subsequence {
        self.cells[self.index(i, j)]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: Subsequence) {
        let idx = self.index(i, j);
        self.cells[idx] = value;
    }

    /// The whole-route latency, `M[0][n].C` in spec.md's notation.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.get(0, self.side - 1).c
    }

    /// Recomputes every cell from scratch for the current `route`, per the
    /// three-pass procedure of spec.md §4.2.
    pub fn refresh(&mut self, route: &Route, instance: &Instance) {
        debug_assert_eq!(route.len(), self.side);
        let distances = &instance.distances;

        for i in 0..self.side {
            let node = instance.to_internal(route.get(i));
            self.set(i, i, Subsequence::singleton(i, node));
        }

        for i in 0..self.side {
            for j in (i + 1)..self.side {
                let left = self.get(i, j - 1);
                let right = self.get(j, j);
                self.set(i, j, left.concat(&right, distances));
            }
        }

        for i in (0..self.side).rev() {
            for j in (0..i).rev() {
                let left = self.get(i, j + 1);
                let right = self.get(j, j);
                self.set(i, j, left.concat(&right, distances));
            }
        }
    }

    #[inline]
    pub fn concat(&self, a: (usize, usize), b: (usize, usize), distances: &DistanceMatrix) -> Subsequence {
        self.get(a.0, a.1).concat(&self.get(b.0, b.1), distances)
    }
}
