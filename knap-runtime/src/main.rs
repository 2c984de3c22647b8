use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, Command};
use knap_algorithms::knapsack::{self as algorithms, ALGORITHMS};
use knap_challenges::knapsack::{Challenge, Solution, Track};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::{Map, Value};
use std::{cell::RefCell, fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Solves, verifies or generates 0/1 knapsack instances")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "One of off, error, warn, info, debug, trace")
                .global(true)
                .default_value("warn")
                .value_parser(clap::value_parser!(LevelFilter)),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<INPUT> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--algorithm [ALGORITHM] "Algorithm to run")
                        .default_value("best")
                        .value_parser(ALGORITHMS),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the solution will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Print the solution as json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<INPUT> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Generates a random instance")
                .arg(
                    arg!(<TRACK> "Track string, e.g. n_items=100,budget=25")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random generator")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<LevelFilter>("log-level")
        .copied()
        .unwrap_or(LevelFilter::Warn);
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<PathBuf>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("algorithm").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<PathBuf>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("generate_instance", sub_m)) => generate_instance(
            sub_m.get_one::<String>("TRACK").unwrap().clone(),
            *sub_m.get_one::<u64>("seed").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

pub fn compute_solution(
    input_path: PathBuf,
    algorithm: String,
    hyperparameters: Option<String>,
    output_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let challenge = load_challenge(&input_path)?;
    let hyperparameters = hyperparameters
        .map(|h| load_hyperparameters(&h))
        .transpose()?;
    info!(
        "Solving {} items with capacity {} using {}",
        challenge.num_items(),
        challenge.capacity,
        algorithm
    );

    let solution = RefCell::new(Option::<Solution>::None);
    let save_solution_fn = |s: &Solution| -> Result<()> {
        *solution.borrow_mut() = Some(s.clone());
        Ok(())
    };
    algorithms::solve(&algorithm, &challenge, &save_solution_fn, &hyperparameters)?;
    let solution = solution
        .into_inner()
        .ok_or_else(|| anyhow!("No solution found"))?;

    let output = if json {
        serde_json::to_string(&solution)?
    } else {
        solution.render(challenge.num_items())
    };
    if let Some(path) = output_file {
        fs::write(&path, &output)
            .with_context(|| format!("Failed to write solution file: {:?}", path))?;
        println!("solution written to: {:?}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}

pub fn verify_solution(input_path: PathBuf, solution: String) -> Result<()> {
    let challenge = load_challenge(&input_path)?;
    let solution = load_solution(&solution)?;
    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

pub fn generate_instance(track: String, seed: u64, output_file: Option<PathBuf>) -> Result<()> {
    let track: Track = track.parse()?;
    let seed: [u8; 32] = StdRng::seed_from_u64(seed).gen();
    let challenge = Challenge::generate_instance(&seed, &track)?;
    if let Some(path) = output_file {
        fs::write(&path, challenge.to_string())
            .with_context(|| format!("Failed to write instance file: {:?}", path))?;
        println!("instance written to: {:?}", path);
    } else {
        print!("{}", challenge);
    }
    Ok(())
}

fn load_challenge(path: &PathBuf) -> Result<Challenge> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read instance file: {:?}", path))?;
    content
        .parse()
        .with_context(|| format!("Failed to parse instance file: {:?}", path))
}

fn load_hyperparameters(hyperparameters: &str) -> Result<Map<String, Value>> {
    let hyperparameters = if hyperparameters.ends_with(".json") {
        fs::read_to_string(hyperparameters)
            .with_context(|| format!("Failed to read hyperparameters file: {}", hyperparameters))?
    } else {
        hyperparameters.to_string()
    };
    serde_json::from_str(&hyperparameters).context("Failed to parse hyperparameters")
}

fn load_solution(solution: &str) -> Result<Solution> {
    let solution = if solution == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read solution from stdin")?;
        buffer
    } else if solution.ends_with(".json") {
        fs::read_to_string(solution)
            .with_context(|| format!("Failed to read solution file: {}", solution))?
    } else {
        solution.to_string()
    };
    serde_json::from_str(&solution).context("Failed to parse solution")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli() {
        cli().debug_assert();
    }

    #[test]
    fn test_load_hyperparameters_from_string() {
        let h = load_hyperparameters(r#"{"max_table_size": 5000}"#).unwrap();
        assert_eq!(h.get("max_table_size").and_then(|v| v.as_u64()), Some(5000));
        assert!(load_hyperparameters("max_table_size=5000").is_err());
    }

    #[test]
    fn test_load_solution_from_string() {
        let solution =
            load_solution(r#"{"total_value":70,"is_optimal":true,"items":[1,2]}"#).unwrap();
        assert_eq!(solution.items, vec![1, 2]);
        assert!(load_solution("missing.json").is_err());
    }
}
