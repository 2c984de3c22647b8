use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MAX_TABLE_SIZE: u64 = 100;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Largest `capacity * num_items` the DP table is allowed to cover
    pub max_table_size: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
        }
    }
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Self {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = m.get("max_table_size").and_then(|v| v.as_u64()) { p.max_table_size = v; }
        }
        p
    }
}
