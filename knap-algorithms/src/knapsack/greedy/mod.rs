use super::{SolveError, Solver};
use anyhow::Result;
use knap_challenges::knapsack::*;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
mod params;
pub use params::Params;

/// Single-pass greedy fill over a variant-specific item order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GreedyHeuristic {
    /// Most valuable items first
    ByValue,
    /// Lightest items first
    BySmallestWeight,
    /// Highest value per unit of weight first
    ByValueDensity,
}

impl GreedyHeuristic {
    pub const ALL: [GreedyHeuristic; 3] = [
        GreedyHeuristic::ByValue,
        GreedyHeuristic::BySmallestWeight,
        GreedyHeuristic::ByValueDensity,
    ];

    fn sort_items<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut sorted: Vec<&Item> = items.iter().collect();
        match self {
            GreedyHeuristic::ByValue => sorted.sort_by(|a, b| b.value.cmp(&a.value)),
            GreedyHeuristic::BySmallestWeight => sorted.sort_by(|a, b| a.weight.cmp(&b.weight)),
            GreedyHeuristic::ByValueDensity => {
                let mut keyed: Vec<(Density, &Item)> = sorted
                    .into_iter()
                    .map(|item| {
                        let density = value_density(item).unwrap_or_else(|e| {
                            debug!("{}, taking it first", e);
                            Density::Unbounded
                        });
                        (density, item)
                    })
                    .collect();
                keyed.sort_by(|a, b| b.0.cmp(&a.0));
                sorted = keyed.into_iter().map(|(_, item)| item).collect();
            }
        }
        sorted
    }
}

/// Value per unit of weight, compared exactly without floating point.
#[derive(Debug, Clone, Copy)]
enum Density {
    Finite { value: u32, weight: u32 },
    Unbounded,
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Density::Unbounded, Density::Unbounded) => Ordering::Equal,
            (Density::Unbounded, Density::Finite { .. }) => Ordering::Greater,
            (Density::Finite { .. }, Density::Unbounded) => Ordering::Less,
            (
                Density::Finite { value: v1, weight: w1 },
                Density::Finite { value: v2, weight: w2 },
            ) => (*v1 as u64 * *w2 as u64).cmp(&(*v2 as u64 * *w1 as u64)),
        }
    }
}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

fn value_density(item: &Item) -> Result<Density, SolveError> {
    if item.weight == 0 {
        return Err(SolveError::DegenerateWeight { index: item.index });
    }
    Ok(Density::Finite {
        value: item.value,
        weight: item.weight,
    })
}

impl Solver for GreedyHeuristic {
    fn name(&self) -> &str {
        match self {
            GreedyHeuristic::ByValue => "by_value",
            GreedyHeuristic::BySmallestWeight => "by_smallest_weight",
            GreedyHeuristic::ByValueDensity => "by_value_density",
        }
    }

    fn solve(&self, challenge: &Challenge) -> Result<Solution, SolveError> {
        let capacity = challenge.capacity as u64;
        let mut weight_used = 0u64;
        let mut value_acc = 0u64;
        let mut items = Vec::new();

        for item in self.sort_items(&challenge.items) {
            if weight_used + item.weight as u64 <= capacity {
                weight_used += item.weight as u64;
                value_acc += item.value as u64;
                items.push(item.index);
            }
        }
        items.sort_unstable();

        Ok(Solution {
            total_value: value_acc,
            is_optimal: false,
            items,
        })
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let params = Params::initialize(hyperparameters)?;
    let solution = params.heuristic.solve(challenge)?;
    save_solution(&solution)
}
