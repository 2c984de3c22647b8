use knap_challenges::knapsack::Item;

/// Lazily filled memo of `V(k, j)`: the best value using the first `j` items within a
/// weight budget of `k`.
pub struct Table<'a> {
    items: &'a [Item],
    width: usize,
    cells: Vec<Option<u64>>,
}

impl<'a> Table<'a> {
    pub fn new(items: &'a [Item], capacity: usize) -> Self {
        let width = items.len() + 1;
        let mut cells = vec![None; (capacity + 1) * width];
        for k in 0..=capacity {
            cells[k * width] = Some(0);
        }
        Table {
            items,
            width,
            cells,
        }
    }

    fn get(&self, k: usize, j: usize) -> Option<u64> {
        self.cells[k * self.width + j]
    }

    fn set(&mut self, k: usize, j: usize, value: u64) {
        self.cells[k * self.width + j] = Some(value);
    }

    /// Evaluates `V(k, j)`, filling in only the cells it depends on.
    pub fn optimal_value(&mut self, k: usize, j: usize) -> u64 {
        if let Some(value) = self.get(k, j) {
            return value;
        }

        // Column 0 is pre-filled, so every pending cell has j >= 1
        let mut resolved = 0;
        let mut pending = vec![(k, j)];
        while let Some(&(k, j)) = pending.last() {
            if self.get(k, j).is_some() {
                pending.pop();
                continue;
            }
            let item = &self.items[j - 1];
            let weight = item.weight as usize;

            let Some(skip) = self.get(k, j - 1) else {
                pending.push((k, j - 1));
                continue;
            };
            let value = if weight > k {
                skip
            } else {
                match self.get(k - weight, j - 1) {
                    Some(rest) => skip.max(item.value as u64 + rest),
                    None => {
                        pending.push((k - weight, j - 1));
                        continue;
                    }
                }
            };

            self.set(k, j, value);
            resolved = value;
            pending.pop();
        }
        resolved
    }
}
