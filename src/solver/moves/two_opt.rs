use crate::models::{Instance, Route};
use crate::solver::SubsequenceMatrix;
use crate::solver::moves::Move;

/// Reverses `route[i..=j]` for `1 <= i <= n-3`, `j >= i+2`, `j <= n-1`
/// (spec.md §4.4, `2-opt(i, j)`).
///
/// Evaluation consumes the reverse (lower-triangular) half of the
/// subsequence matrix: `M[j][i]` with `j > i` is `route[i..=j]` read
/// backward, which is exactly the orientation the reversed segment has
/// once the move is applied.
pub struct TwoOpt;

impl Move for TwoOpt {
    fn name(&self) -> &'static str {
        "two_opt"
    }

    fn apply_best(&self, route: &mut Route, matrix: &mut SubsequenceMatrix, instance: &Instance) -> bool {
        let n = route.n();
        if n < 4 {
            return false;
        }
        let distances = &instance.distances;
        let current_cost = matrix.total_cost();

        let mut best_cost = f64::INFINITY;
        let mut best_pair = None;

        for i in 1..=(n - 3) {
            for j in (i + 2)..=(n - 1) {
                let s1 = matrix.get(0, i - 1).concat(&matrix.get(j, i), distances);
                let s2 = s1.concat(&matrix.get(j + 1, n), distances);

                if s2.c < best_cost {
                    best_cost = s2.c;
                    best_pair = Some((i, j));
                }
            }
        }

        if best_cost < current_cost {
            if let Some((i, j)) = best_pair {
                route.reverse(i, j);
                matrix.refresh(route, instance);
                return true;
            }
        }
        false
    }
}
