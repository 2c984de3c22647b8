use super::GreedyHeuristic;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Params {
    /// Sort order used by the single-pass fill
    pub heuristic: GreedyHeuristic,
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Result<Self> {
        let mut p = Self {
            heuristic: GreedyHeuristic::ByValueDensity,
        };
        if let Some(m) = h {
            if let Some(v) = m.get("heuristic") {
                p.heuristic = serde_json::from_value(v.clone())
                    .map_err(|e| anyhow!("Invalid heuristic {}: {}", v, e))?;
            }
        }
        Ok(p)
    }
}
