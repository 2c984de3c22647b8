use anyhow::{anyhow, Result};
use knap_challenges::knapsack::{Challenge, Solution};
use serde_json::{Map, Value};

mod error;
pub use error::SolveError;

pub mod best;
pub mod dynamic_programming;
pub mod greedy;
pub mod greedy_best;

/// Algorithms reachable through [`solve`].
pub const ALGORITHMS: [&str; 4] = ["greedy", "greedy_best", "dynamic_programming", "best"];

/// Common capability of every strategy.
pub trait Solver {
    fn name(&self) -> &str;

    fn solve(&self, challenge: &Challenge) -> Result<Solution, SolveError>;
}

fn rank(solution: &Solution) -> (u64, bool) {
    (solution.total_value, solution.is_optimal)
}

/// Picks the candidate with the highest total value. A proven optimum wins a tie against a
/// heuristic result; otherwise the first candidate seen wins.
pub fn select_best<I>(candidates: I) -> Result<Solution, SolveError>
where
    I: IntoIterator<Item = Solution>,
{
    candidates
        .into_iter()
        .fold(None, |best: Option<Solution>, candidate| match best {
            Some(b) if rank(&candidate) <= rank(&b) => Some(b),
            _ => Some(candidate),
        })
        .ok_or(SolveError::NoCandidate)
}

/// Dispatches to the `solve_challenge` entry point of the named algorithm.
pub fn solve(
    algorithm: &str,
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    macro_rules! dispatch_algorithms {
        ( $( $a:ident ),+ $(,)? ) => {{
            match algorithm {
                $(
                    stringify!($a) => $a::solve_challenge(challenge, save_solution, hyperparameters),
                )+
                _ => Err(anyhow!(
                    "Unknown algorithm '{}', expected one of {:?}",
                    algorithm,
                    ALGORITHMS
                )),
            }
        }};
    }
    dispatch_algorithms!(greedy, greedy_best, dynamic_programming, best)
}
