//! Frequency distributions over token streams.
//!
//! ```
//! use sapling::analysis::frequency::FrequencyDistribution;
//!
//! let freq: FrequencyDistribution = ["ai", "models", "ai"].into_iter().collect();
//! assert_eq!(freq.most_common(1), vec![("ai".to_string(), 2)]);
//! assert_eq!(freq.total(), 3);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Counts of distinct items, remembering the order in which each item was
/// first seen. Ties in [`most_common`](Self::most_common) are broken by that
/// order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    entries: Vec<(String, usize)>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl FrequencyDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `item`.
    pub fn add<S: AsRef<str>>(&mut self, item: S) {
        self.add_count(item, 1);
    }

    /// Count `count` occurrences of `item`.
    pub fn add_count<S: AsRef<str>>(&mut self, item: S, count: usize) {
        let item = item.as_ref();
        match self.index.get(item) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(item.to_string(), self.entries.len());
                self.entries.push((item.to_string(), count));
            }
        }
    }

    /// Count of `item`, zero when unseen.
    pub fn get(&self, item: &str) -> usize {
        self.index
            .get(item)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The highest count, if any item was counted.
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).max()
    }

    /// The `n` most frequent items, highest count first; equal counts keep
    /// first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so insertion order survives among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// All items in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(item, count)| (item.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyDistribution {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freq = FrequencyDistribution::new();
        for item in iter {
            freq.add(item);
        }
        freq
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyDistribution {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
