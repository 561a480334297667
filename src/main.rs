use anyhow::Context as _;

use mlp_solver::cli::Args;
use mlp_solver::config::Config;
use mlp_solver::solver::{Context, IteratedLocalSearch, Solver};
use mlp_solver::utils;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_module_path(false)
        .init();

    let mut config = Config::default();
    if std::path::Path::new("config.yml").exists() {
        log::info!("loading config.yml");
        config.patch_from_yaml_file("config.yml");
    }

    let args = Args::parse();
    config.update_from_args(&args);

    log::info!("loading instance: {}", config.instance_path);
    let instance = utils::parse_instance_file(&config.instance_path)
        .with_context(|| format!("failed to load instance: {}", config.instance_path))?;

    let solution_path = config.solution_path.clone();
    let ctx = Context::new(instance, config);
    let metaheuristic = IteratedLocalSearch::new(&ctx);
    let mut solver = Solver::new(ctx, metaheuristic);
    solver.run();

    let (cost, route) = solver.metaheuristic.best();
    utils::print_solution(cost, route);
    if let Some(path) = solution_path {
        utils::write_solution_file(&path, cost, route)?;
    }

    Ok(())
}
