use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::Args;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    // General
    pub instance_path: String,
    pub solution_path: Option<String>,
    pub time_limit: u64,
    pub log_interval: u64,

    // Randomization
    pub deterministic: bool,
    pub seed: u64,

    // GRASP+ILS (spec.md §4.3, §4.7)
    pub max_start: u64,
    pub max_iterations_without_improvement: Option<u64>,
    /// Ceiling of the GRASP greediness parameter alpha, sampled uniformly
    /// from `{0.00, 0.01, ..., alpha_max}` during construction.
    pub alpha_max: f64,
}

impl Config {
    pub fn default() -> Self {
        Self {
            instance_path: String::new(),
            solution_path: None,
            time_limit: 60,
            log_interval: 1,

            deterministic: false,
            seed: 1,

            max_start: 10,
            max_iterations_without_improvement: None,
            alpha_max: 0.25,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn read_yaml_file(filepath: &str) -> Value {
        let file = File::open(filepath).unwrap_or_else(|_| panic!("Cannot open file {}", filepath));
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).unwrap_or_else(|_| panic!("Failed to read file {}", filepath))
    }

    pub fn load_yaml_file(filepath: &str) -> Self {
        let mut config = Self::default();
        config.patch(&Self::read_yaml_file(filepath));
        config
    }

    pub fn patch_from_yaml_file(&mut self, filepath: &str) {
        self.patch(&Self::read_yaml_file(filepath));
    }

    pub fn patch(&mut self, values: &Value) {
        let mut config: Value = serde_json::to_value(&self).expect("Failed to serialize config");
        match values {
            Value::Object(values_map) => {
                for (key, value) in values_map.iter() {
                    let root_key = format!("/{}", key);
                    if let Some(config_value) = config.pointer_mut(&root_key) {
                        *config_value = value.clone();
                    }
                }
            }
            _ => panic!("Cannot patch Config as JSON is not an Object"),
        }
        *self = serde_json::from_value(config).expect("Failed to deserialize patched config");
    }

    /// Applies command-line overrides on top of whatever the config file
    /// loaded, matching the teacher's `Config::update_from_args`.
    pub fn update_from_args(&mut self, args: &Args) {
        self.instance_path = args.instance_path.clone();
        if let Some(solution_path) = &args.solution_path {
            self.solution_path = Some(solution_path.clone());
        }
        if let Some(time_limit) = args.time_limit {
            self.time_limit = time_limit;
        }
        if let Some(max_iterations) = args.max_iterations {
            self.max_iterations_without_improvement = Some(max_iterations);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
            self.deterministic = true;
        }
        if args.deterministic {
            self.deterministic = true;
        }
    }
}
