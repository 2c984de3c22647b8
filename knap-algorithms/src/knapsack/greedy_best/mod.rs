use super::{greedy::GreedyHeuristic, select_best, SolveError, Solver};
use anyhow::Result;
use knap_challenges::knapsack::*;
use log::{info, warn};
use serde_json::{Map, Value};

/// Runs several greedy heuristics and keeps the most valuable fill.
#[derive(Debug, Clone)]
pub struct GreedyBest {
    pub heuristics: Vec<GreedyHeuristic>,
}

impl Default for GreedyBest {
    fn default() -> Self {
        Self {
            heuristics: GreedyHeuristic::ALL.to_vec(),
        }
    }
}

impl Solver for GreedyBest {
    fn name(&self) -> &str {
        "greedy_best"
    }

    fn solve(&self, challenge: &Challenge) -> Result<Solution, SolveError> {
        let mut candidates = Vec::with_capacity(self.heuristics.len());
        for heuristic in &self.heuristics {
            match heuristic.solve(challenge) {
                Ok(solution) => {
                    info!(
                        "{}: value {} with {} items",
                        heuristic.name(),
                        solution.total_value,
                        solution.items.len()
                    );
                    candidates.push(solution);
                }
                Err(e) => warn!("{}: {}", heuristic.name(), e),
            }
        }
        select_best(candidates)
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let solution = GreedyBest::default().solve(challenge)?;
    save_solution(&solution)
}
