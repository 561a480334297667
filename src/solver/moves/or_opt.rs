use crate::models::{Instance, Route};
use crate::solver::SubsequenceMatrix;
use crate::solver::moves::Move;

/// Relocates a contiguous segment of `k` nodes to sit immediately after
/// position `j` (spec.md §4.4, `Or-opt-k`). `k` is fixed per instance:
/// RVND runs `OrOpt::new(1)`, `OrOpt::new(2)` and `OrOpt::new(3)` as three
/// separate neighbourhoods.
pub struct OrOpt {
    k: usize,
}

impl OrOpt {
    pub fn new(k: usize) -> Self {
        debug_assert!(k >= 1 && k <= 3, "or-opt segment length must be 1, 2 or 3");
        Self { k }
    }
}

impl Move for OrOpt {
    fn name(&self) -> &'static str {
        match self.k {
            1 => "or_opt_1",
            2 => "or_opt_2",
            3 => "or_opt_3",
            _ => "or_opt",
        }
    }

    fn apply_best(&self, route: &mut Route, matrix: &mut SubsequenceMatrix, instance: &Instance) -> bool {
        let n = route.n();
        let k = self.k;
        if n < k + 1 {
            return false;
        }
        let distances = &instance.distances;
        let current_cost = matrix.total_cost();

        let mut best_cost = f64::INFINITY;
        let mut best_pair = None;

        for i in 1..=(n - k) {
            for j in 1..=(n - 1) {
                if i == j {
                    continue;
                }

                let cost = if i < j {
                    let s1 = matrix.get(0, i - 1).concat(&matrix.get(i + k, j), distances);
                    let s2 = s1.concat(&matrix.get(i, i + k - 1), distances);
                    let s3 = s2.concat(&matrix.get(j + 1, n), distances);
                    s3.c
                } else {
                    let s1 = matrix.get(0, j - 1).concat(&matrix.get(i, i + k - 1), distances);
                    let s2 = s1.concat(&matrix.get(j, i - 1), distances);
                    let s3 = s2.concat(&matrix.get(i + k, n), distances);
                    s3.c
                };

                if cost < best_cost {
                    best_cost = cost;
                    best_pair = Some((i, j));
                }
            }
        }

        if best_cost < current_cost {
            if let Some((i, j)) = best_pair {
                route.relocate_segment(i, k, j);
                matrix.refresh(route, instance);
                return true;
            }
        }
        false
    }
}
