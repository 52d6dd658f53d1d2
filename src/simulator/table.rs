//! Score frequency table.

use std::collections::BTreeMap;

/// Count of games ending with each final score, ordered by score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more game ending with `score`.
    pub fn record(&mut self, score: u32) {
        *self.counts.entry(score).or_insert(0) += 1;
    }

    /// Fold another table into this one.
    pub fn merge(mut self, other: FrequencyTable) -> FrequencyTable {
        for (score, count) in other.counts {
            *self.counts.entry(score).or_insert(0) += count;
        }
        self
    }

    pub fn count(&self, score: u32) -> u64 {
        self.counts.get(&score).copied().unwrap_or(0)
    }

    /// Total games recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Share of games ending with `score`; 0.0 for an empty table.
    pub fn proportion(&self, score: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(score) as f64 / total as f64
    }

    /// Distinct scores with their counts, ascending by score.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Number of distinct scores.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn min_score(&self) -> Option<u32> {
        self.counts.keys().next().copied()
    }

    pub fn max_score(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let sum: u64 = self.iter().map(|(s, c)| s as u64 * c).sum();
        sum as f64 / total as f64
    }

    /// Lower median: the score of game `total / 2` in sorted order.
    pub fn median(&self) -> Option<u32> {
        let target = self.total() / 2;
        let mut seen = 0;
        for (score, count) in self.iter() {
            seen += count;
            if seen > target {
                return Some(score);
            }
        }
        None
    }
}

impl FromIterator<u32> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for score in iter {
            table.record(score);
        }
        table
    }
}
