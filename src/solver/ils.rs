use crate::models::Route;
use crate::solver::{construction, local_search, perturbation};
use crate::solver::{Context, Metaheuristic, SubsequenceMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

/// GRASP-construction + ILS/RVND driver (spec.md §4.7).
///
/// Each `iterate` call runs one full restart: construct, then locally
/// search and perturb in a loop bounded by `max_iterations_without_improvement`,
/// tracking a restart-local best. A restart that beats the global best
/// replaces it. `Solver::run` calls `iterate` until `max_start` restarts
/// have completed or the configured time limit passes.
pub struct IteratedLocalSearch {
    state: State,
    restarts_completed: u64,
    max_start: u64,
    max_iterations_without_improvement: u64,
    best_route: Option<Route>,
    best_cost: f64,
}

impl IteratedLocalSearch {
    pub fn new(ctx: &Context) -> Self {
        let config = ctx.config.borrow();
        let max_iterations_without_improvement = config
            .max_iterations_without_improvement
            .unwrap_or_else(|| default_max_iterations(ctx.instance.n));
        Self {
            state: State::Running,
            restarts_completed: 0,
            max_start: config.max_start,
            max_iterations_without_improvement,
            best_route: None,
            best_cost: f64::INFINITY,
        }
    }

    pub fn best(&self) -> (f64, &Route) {
        (
            self.best_cost,
            self.best_route.as_ref().expect("iterate must run before best() is read"),
        )
    }

    fn restart(&mut self, ctx: &Context) {
        let alpha_max = ctx.config.borrow().alpha_max;
        let mut route = construction::construct(&ctx.instance, &ctx.random, alpha_max);
        let mut matrix = SubsequenceMatrix::new(route.len());
        matrix.refresh(&route, &ctx.instance);

        let mut restart_best_route = route.clone();
        let mut restart_best_cost = matrix.total_cost();

        let mut no_improve = 0u64;
        while no_improve < self.max_iterations_without_improvement {
            local_search::run(&mut route, &mut matrix, &ctx.instance, &ctx.random);
            let cost = matrix.total_cost();

            if cost < restart_best_cost {
                restart_best_cost = cost;
                restart_best_route = route.clone();
                no_improve = 0;
            } else {
                no_improve += 1;
            }

            route = perturbation::perturb(&restart_best_route, &mut matrix, &ctx.instance, &ctx.random);
        }

        log::debug!(
            "restart {} finished: best = {}",
            self.restarts_completed,
            restart_best_cost
        );

        if restart_best_cost < self.best_cost {
            self.best_cost = restart_best_cost;
            self.best_route = Some(restart_best_route);
            log::info!("new global best: {}", self.best_cost);
        }
    }
}

impl Metaheuristic for IteratedLocalSearch {
    fn iterate(&mut self, ctx: &Context) {
        if self.restarts_completed >= self.max_start || ctx.time_limit_reached() {
            self.state = State::Terminated;
            return;
        }
        self.restart(ctx);
        self.restarts_completed += 1;
        if self.restarts_completed >= self.max_start {
            self.state = State::Terminated;
        }
    }

    fn terminated(&self) -> bool {
        self.state == State::Terminated
    }
}

/// `maxIter = n if n <= 100 else 100` (spec.md §4.7), where `n` is
/// spec.md's node count (`Instance::n`, depot included).
fn default_max_iterations(n: usize) -> u64 {
    if n <= 100 {
        n as u64
    } else {
        100
    }
}
