use std::collections::HashMap;

/// Position keys seen so far in one game, in play order, with per-key counts.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    keys: Vec<u64>,
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Table holding just the starting key.
    pub(crate) fn starting_from(key: u64) -> Self {
        let mut table = Self::new();
        table.push(key);
        table
    }

    pub(crate) fn count(&self, key: u64) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Record a key; returns how often it has now occurred.
    pub(crate) fn push(&mut self, key: u64) -> u32 {
        self.keys.push(key);
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub(crate) fn pop(&mut self) -> Option<u64> {
        let key = self.keys.pop()?;
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
        Some(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_push_and_pop() {
        let mut table = RepetitionTable::starting_from(7);
        assert_eq!(table.push(9), 1);
        assert_eq!(table.push(7), 2);
        assert_eq!(table.count(7), 2);
        assert_eq!(table.len(), 3);

        assert_eq!(table.pop(), Some(7));
        assert_eq!(table.count(7), 1);
        assert_eq!(table.pop(), Some(9));
        assert_eq!(table.count(9), 0);
        assert_eq!(table.pop(), Some(7));
        assert_eq!(table.pop(), None);
    }
}
