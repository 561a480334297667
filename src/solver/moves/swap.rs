use crate::models::{Instance, Route};
use crate::solver::SubsequenceMatrix;
use crate::solver::moves::Move;

/// Exchanges the nodes at two non-adjacent-or-adjacent positions
/// `1 <= i < j <= n-1` (spec.md §4.4, `Swap(i, j)`).
pub struct Swap;

impl Move for Swap {
    fn name(&self) -> &'static str {
        "swap"
    }

    fn apply_best(&self, route: &mut Route, matrix: &mut SubsequenceMatrix, instance: &Instance) -> bool {
        let n = route.n();
        if n < 3 {
            return false;
        }
        let distances = &instance.distances;
        let current_cost = matrix.total_cost();

        let mut best_cost = f64::INFINITY;
        let mut best_pair = None;

        for i in 1..=(n - 2) {
            for j in (i + 1)..=(n - 1) {
                let s1 = matrix.get(0, i - 1).concat(&matrix.get(j, j), distances);
                let s4 = if j == i + 1 {
                    let s2 = s1.concat(&matrix.get(i, i), distances);
                    s2.concat(&matrix.get(j + 1, n), distances)
                } else {
                    let s2 = s1.concat(&matrix.get(i + 1, j - 1), distances);
                    let s3 = s2.concat(&matrix.get(i, i), distances);
                    s3.concat(&matrix.get(j + 1, n), distances)
                };

                if s4.c < best_cost {
                    best_cost = s4.c;
                    best_pair = Some((i, j));
                }
            }
        }

        if best_cost < current_cost {
            if let Some((i, j)) = best_pair {
                route.swap(i, j);
                matrix.refresh(route, instance);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistanceMatrix;

    #[test]
    fn swaps_two_nodes_when_it_lowers_latency() {
        let distances = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0, 5.0],
            vec![1.0, 0.0, 5.0, 1.0],
            vec![1.0, 5.0, 0.0, 1.0],
            vec![5.0, 1.0, 1.0, 0.0],
        ]);
        let instance = Instance::new(distances).unwrap();
        let mut route = Route::new(vec![1, 2, 3, 4, 1]);
        let mut matrix = SubsequenceMatrix::new(route.len());
        matrix.refresh(&route, &instance);
        assert_eq!(14.0, matrix.total_cost());

        let improved = Swap.apply_best(&mut route, &mut matrix, &instance);

        assert_eq!(true, improved);
        assert_eq!(&[1, 2, 4, 3, 1], route.as_slice());
        assert_eq!(6.0, matrix.total_cost());
    }

    #[test]
    fn reports_no_improvement_on_an_already_optimal_pair() {
        let distances = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ]);
        let instance = Instance::new(distances).unwrap();
        let mut route = Route::new(vec![1, 2, 3, 1]);
        let mut matrix = SubsequenceMatrix::new(route.len());
        matrix.refresh(&route, &instance);

        let improved = Swap.apply_best(&mut route, &mut matrix, &instance);

        assert_eq!(false, improved);
    }
}
