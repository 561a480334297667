use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mlp_solver::config::Config;
use mlp_solver::models::{DistanceMatrix, Instance};
use mlp_solver::solver::{Context, IteratedLocalSearch, Solver};

fn synthetic_instance(n: usize) -> Instance {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
        .collect();
    Instance::new(DistanceMatrix::from_rows(rows)).unwrap()
}

fn run_solver(n: usize) {
    let mut config = Config::default();
    config.deterministic = true;
    config.seed = 1;
    config.max_start = 3;
    config.max_iterations_without_improvement = Some(30);

    let ctx = Context::new(synthetic_instance(n), config);
    let metaheuristic = IteratedLocalSearch::new(&ctx);
    let mut solver = Solver::new(ctx, metaheuristic);
    solver.run();
}

pub fn bench(c: &mut Criterion) {
    c.bench_function("ils_50_nodes", |b| b.iter(|| run_solver(black_box(50))));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
}
criterion_main!(benches);
