mod format;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, str::FromStr};

/// Parameters controlling random instance generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub n_items: usize,
    /// Capacity as a percentage of the total item weight
    pub budget: u32,
}

impl FromStr for Track {
    type Err = anyhow::Error;

    /// Parses `n_items=<n>,budget=<pct>`
    fn from_str(s: &str) -> Result<Self> {
        let mut n_items = None;
        let mut budget = None;
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
            match key.trim() {
                "n_items" => n_items = Some(value.trim().parse::<usize>()?),
                "budget" => budget = Some(value.trim().parse::<u32>()?),
                other => return Err(anyhow!("Unknown track key '{}'", other)),
            }
        }
        Ok(Track {
            n_items: n_items.ok_or_else(|| anyhow!("Track is missing n_items"))?,
            budget: budget.ok_or_else(|| anyhow!("Track is missing budget"))?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Position of the item in the original input
    pub index: usize,
    pub value: u32,
    pub weight: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub total_value: u64,
    pub is_optimal: bool,
    /// Original indices of the taken items, ascending
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0/1 selection vector of length `num_items` in original item order.
    pub fn taken(&self, num_items: usize) -> Vec<u8> {
        let mut taken = vec![0u8; num_items];
        for &i in &self.items {
            if let Some(t) = taken.get_mut(i) {
                *t = 1;
            }
        }
        taken
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub capacity: u32,
    pub items: Vec<Item>,
}

impl Challenge {
    /// Builds a challenge from `(value, weight)` pairs given in original order.
    pub fn new(capacity: u32, pairs: &[(u32, u32)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(index, &(value, weight))| Item {
                index,
                value,
                weight,
            })
            .collect();
        Challenge { capacity, items }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be a percentage in 0..=100",
                track.budget
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        // Generate weights w_i in the range [1, 50]
        let weights: Vec<u32> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();
        // Generate values v_i in the range [1, 100]
        let values: Vec<u32> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=100))
            .collect();

        let total_weight: u64 = weights.iter().map(|&w| w as u64).sum();
        let capacity = (total_weight * track.budget as u64 / 100) as u32;

        let pairs: Vec<(u32, u32)> = values.into_iter().zip(weights).collect();
        Ok(Challenge::new(capacity, &pairs))
    }

    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<u64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let selected = selected_items
            .iter()
            .map(|&item| {
                self.items
                    .get(item)
                    .ok_or_else(|| anyhow!("Item ({}) is out of bounds", item))
            })
            .collect::<Result<Vec<_>>>()?;

        let total_weight: u64 = selected.iter().map(|item| item.weight as u64).sum();
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }

        Ok(selected.iter().map(|item| item.value as u64).sum())
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let total_value = self.evaluate_total_value(solution)?;
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Reported total value ({}) does not match selected items ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(())
    }
}
