use clap::{App, Arg};

/// Representing the resulting command line arguments
pub struct Args {
    pub instance_path: String,
    pub solution_path: Option<String>,
    pub time_limit: Option<u64>,
    pub max_iterations: Option<u64>,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Args {
    /// Setup the clap app and parse the command line arguments
    pub fn parse() -> Self {
        let matches = App::new("mlp-solver")
            .version("0.1")
            .author("Martin Simensen")
            .about("GRASP+ILS solver for the Minimum Latency Problem")
            .arg(
                Arg::with_name("instance_path")
                    .required(true)
                    .help("Path to problem instance"),
            )
            .arg(
                Arg::with_name("solution_path")
                    .short("o")
                    .long("output")
                    .takes_value(true)
                    .help("Path to solution output"),
            )
            .arg(
                Arg::with_name("iterations")
                    .short("i")
                    .long("iterations")
                    .takes_value(true)
                    .help("Maximum number of iterations without improvement per restart"),
            )
            .arg(
                Arg::with_name("time_limit")
                    .short("t")
                    .long("time-limit")
                    .takes_value(true)
                    .help("Time limit in seconds"),
            )
            .arg(
                Arg::with_name("seed")
                    .short("s")
                    .long("seed")
                    .takes_value(true)
                    .help("Seed the RNG for a reproducible run"),
            )
            .arg(
                Arg::with_name("deterministic")
                    .long("deterministic")
                    .help("Use a fixed seed even without --seed"),
            )
            .get_matches();

        let instance_path = matches
            .value_of("instance_path")
            .expect("Instance path is not provided")
            .to_owned();

        let solution_path = matches.value_of("solution_path").map(String::from);

        let max_iterations = matches
            .value_of("iterations")
            .map(|value| value.parse::<u64>().expect("Invalid iterations argument!"));

        let time_limit = matches
            .value_of("time_limit")
            .map(|value| value.parse::<u64>().expect("Invalid time limit argument!"));

        let seed = matches
            .value_of("seed")
            .map(|value| value.parse::<u64>().expect("Invalid seed argument!"));

        let deterministic = matches.is_present("deterministic");

        Self {
            instance_path,
            solution_path,
            time_limit,
            max_iterations,
            seed,
            deterministic,
        }
    }
}
