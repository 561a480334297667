use crate::models::{Instance, Route};
use crate::solver::moves::neighbourhood;
use crate::solver::SubsequenceMatrix;
use crate::utils::Random;

/// Randomised Variable Neighbourhood Descent (spec.md §4.5).
///
/// Repeatedly picks a random surviving neighbourhood, runs its
/// best-improvement scan, resets the neighbourhood list on success and
/// drops the neighbourhood on failure, until the list empties. Terminates
/// because every failure shrinks `NL` by one and every success strictly
/// decreases `matrix.total_cost()`, which is bounded below.
pub fn run(route: &mut Route, matrix: &mut SubsequenceMatrix, instance: &Instance, random: &Random) {
    let moves = neighbourhood();
    let mut remaining: Vec<usize> = (0..moves.len()).collect();

    while !remaining.is_empty() {
        let slot = random.below(remaining.len());
        let move_index = remaining[slot];
        let operator = &moves[move_index];

        if operator.apply_best(route, matrix, instance) {
            log::debug!("rvnd: {} improved, cost = {}", operator.name(), matrix.total_cost());
            remaining = (0..moves.len()).collect();
        } else {
            remaining.remove(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DistanceMatrix;

    #[test]
    fn never_leaves_the_route_worse_than_it_started() {
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
        let before = matrix.total_cost();

        let random = Random::from_seed(7);
        run(&mut route, &mut matrix, &instance, &random);

        assert_eq!(true, matrix.total_cost() <= before);
        assert_eq!(true, route.is_valid());
    }

    #[test]
    fn converges_on_an_already_optimal_route() {
        let distances = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ]);
        let instance = Instance::new(distances).unwrap();
        let mut route = Route::new(vec![1, 2, 3, 1]);
        let mut matrix = SubsequenceMatrix::new(route.len());
        matrix.refresh(&route, &instance);

        let random = Random::from_seed(3);
        run(&mut route, &mut matrix, &instance, &random);

        assert_eq!(3.0, matrix.total_cost());
        assert_eq!(&[1, 2, 3, 1], route.as_slice());
    }
}
