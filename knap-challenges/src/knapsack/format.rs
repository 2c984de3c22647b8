use super::{Challenge, Solution};
use anyhow::{anyhow, Context, Result};
use std::{fmt, str::FromStr};

fn parse_pair(line: &str, line_no: usize) -> Result<(u32, u32)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(anyhow!(
            "Line {}: expected 2 fields, found {}",
            line_no,
            fields.len()
        ));
    }
    let first = fields[0]
        .parse::<u32>()
        .with_context(|| format!("Line {}: invalid integer '{}'", line_no, fields[0]))?;
    let second = fields[1]
        .parse::<u32>()
        .with_context(|| format!("Line {}: invalid integer '{}'", line_no, fields[1]))?;
    Ok((first, second))
}

impl FromStr for Challenge {
    type Err = anyhow::Error;

    /// Parses a header line `<n_items> <capacity>` followed by `n_items` lines of
    /// `<value> <weight>`.
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_no, header) = lines.next().ok_or_else(|| anyhow!("Empty input"))?;
        let (num_items, capacity) = parse_pair(header, header_no)?;

        let pairs = lines
            .map(|(line_no, line)| parse_pair(line, line_no))
            .collect::<Result<Vec<_>>>()?;
        if pairs.len() != num_items as usize {
            return Err(anyhow!(
                "Header declares {} items but {} were given",
                num_items,
                pairs.len()
            ));
        }

        Ok(Challenge::new(capacity, &pairs))
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.num_items(), self.capacity)?;
        for item in &self.items {
            writeln!(f, "{} {}", item.value, item.weight)?;
        }
        Ok(())
    }
}

impl Solution {
    /// Renders `<value> <0|1>` followed by the selection vector on a second line.
    pub fn render(&self, num_items: usize) -> String {
        let taken = self
            .taken(num_items)
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}\n{}", self.total_value, self.is_optimal as u8, taken)
    }
}
