use super::{SolveError, Solver};
use anyhow::Result;
use knap_challenges::knapsack::*;
use log::debug;
use serde_json::{Map, Value};
mod params;
mod table;
pub use params::{Params, DEFAULT_MAX_TABLE_SIZE};
use table::Table;

/// Exact solver over the `(remaining capacity, item prefix)` recurrence.
#[derive(Debug, Clone, Default)]
pub struct DynamicProgramming {
    pub params: Params,
}

impl DynamicProgramming {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Solver for DynamicProgramming {
    fn name(&self) -> &str {
        "dynamic_programming"
    }

    fn solve(&self, challenge: &Challenge) -> Result<Solution, SolveError> {
        let num_items = challenge.num_items();
        let size = challenge.capacity as u64 * num_items as u64;
        if size > self.params.max_table_size {
            return Err(SolveError::ProblemTooLarge {
                size,
                limit: self.params.max_table_size,
            });
        }
        if num_items == 0 {
            return Ok(Solution {
                total_value: 0,
                is_optimal: true,
                items: Vec::new(),
            });
        }
        debug!(
            "DP table of {} x {} cells",
            challenge.capacity as usize + 1,
            num_items + 1
        );

        let capacity = challenge.capacity as usize;
        let mut table = Table::new(&challenge.items, capacity);
        let total_value = table.optimal_value(capacity, num_items);

        // Walk the prefixes backwards; a value change at j means item j was taken
        let mut k = capacity;
        let mut items = Vec::new();
        for j in (1..=num_items).rev() {
            if table.optimal_value(k, j) != table.optimal_value(k, j - 1) {
                let item = &challenge.items[j - 1];
                debug_assert!(item.weight as usize <= k);
                k -= item.weight as usize;
                items.push(item.index);
            }
        }
        items.sort_unstable();

        Ok(Solution {
            total_value,
            is_optimal: true,
            items,
        })
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let solver = DynamicProgramming::new(Params::initialize(hyperparameters));
    let solution = solver.solve(challenge)?;
    save_solution(&solution)
}
