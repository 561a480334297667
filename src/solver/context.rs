use std::cell::RefCell;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::models::Instance;
use crate::utils::Random;

/// Everything a metaheuristic needs to run: the read-only problem instance,
/// the mutable run configuration and the shared RNG.
pub struct Context {
    pub instance: Instance,
    pub config: RefCell<Config>,
    pub random: Random,
    start_time: Instant,
}

impl Context {
    pub fn new(instance: Instance, config: Config) -> Self {
        let random = if config.deterministic {
            log::info!("Deterministic with seed: {}", config.seed);
            Random::from_seed(config.seed)
        } else {
            Random::new()
        };
        Self {
            instance,
            config: RefCell::new(config),
            random,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn elapsed_as_secs_f64(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// True once the configured time limit has passed.
    pub fn time_limit_reached(&self) -> bool {
        self.elapsed_as_secs_f64() >= self.config.borrow().time_limit as f64
    }
}
