use super::{
    dynamic_programming::{self, DynamicProgramming},
    greedy_best::GreedyBest,
    select_best, SolveError, Solver,
};
use anyhow::Result;
use knap_challenges::knapsack::*;
use log::{info, warn};
use serde_json::{Map, Value};

/// Runs every strategy it holds and returns the most valuable successful solution.
pub struct Best {
    pub solvers: Vec<Box<dyn Solver>>,
}

impl Best {
    pub fn new(params: dynamic_programming::Params) -> Self {
        Self {
            solvers: vec![
                Box::new(GreedyBest::default()),
                Box::new(DynamicProgramming::new(params)),
            ],
        }
    }
}

impl Default for Best {
    fn default() -> Self {
        Self::new(dynamic_programming::Params::default())
    }
}

impl Solver for Best {
    fn name(&self) -> &str {
        "best"
    }

    fn solve(&self, challenge: &Challenge) -> Result<Solution, SolveError> {
        let candidates: Vec<Solution> = self
            .solvers
            .iter()
            .filter_map(|solver| match solver.solve(challenge) {
                Ok(solution) => {
                    info!("{}: value {}", solver.name(), solution.total_value);
                    Some(solution)
                }
                Err(e) => {
                    warn!("{} skipped: {}", solver.name(), e);
                    None
                }
            })
            .collect();
        select_best(candidates)
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let solver = Best::new(dynamic_programming::Params::initialize(hyperparameters));
    let solution = solver.solve(challenge)?;
    save_solution(&solution)
}
