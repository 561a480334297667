use crate::models::{Instance, Route, DEPOT};
use crate::utils::Random;

/// Greedy-randomised construction (spec.md §4.3): repeatedly appends the
/// cheapest-or-near-cheapest unvisited node to the growing route, with
/// `alpha` controlling how far into the sorted candidate list the choice
/// may land.
///
/// `alpha_max` is the configured ceiling (spec.md's GRASP greediness
/// parameter, default `0.25`); `alpha` itself is drawn fresh per call from
/// `{0.00, 0.01, ..., alpha_max}`.
pub fn construct(instance: &Instance, random: &Random, alpha_max: f64) -> Route {
    let n = instance.n;
    let alpha_steps = (alpha_max * 100.0).round() as usize + 1;
    let alpha = random.below(alpha_steps) as f64 / 100.0;

    let mut candidates: Vec<usize> = (2..=n).collect();
    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(DEPOT);
    let mut origin = DEPOT;

    while !candidates.is_empty() {
        let mut scored: Vec<(usize, f64)> = candidates
            .iter()
            .map(|&v| {
                let cost = instance
                    .distances
                    .get(instance.to_internal(origin), instance.to_internal(v));
                (v, cost)
            })
            .collect();
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("distances are never NaN"));

        let k = (alpha * scored.len() as f64).floor() as usize;
        let pick = if k == 0 { 0 } else { random.below(k) };
        let (chosen, _) = scored[pick];

        nodes.push(chosen);
        candidates.retain(|&v| v != chosen);
        origin = chosen;
    }

    nodes.push(DEPOT);
    Route::new(nodes)
}
