//! Token frequency table.
//!
//! # Examples
//!
//! ```
//! use bindo::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_tokens(["가을", "하늘", "공활한데", "가을", "하늘"]);
//!
//! assert_eq!(table.get("가을"), 2);
//! assert_eq!(table.total(), 5);
//! assert_eq!(
//!     table.top_n(2),
//!     vec![("가을".to_string(), 2), ("하늘".to_string(), 2)]
//! );
//! ```

use ahash::AHashMap;
use serde::{Serialize, Serializer};

/// Occurrence counts of distinct tokens.
///
/// Entries are kept in first-seen order, which is the tie-breaker for
/// ranking. Every stored count is at least 1.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: AHashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Count every token of the sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.increment(token.as_ref());
        }
        table
    }

    fn increment(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Get the count of a token, 0 if it never occurred.
    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Check whether a token occurred.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// All entries ranked by descending count, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-ranked entries; all of them if `n` exceeds the table.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Drop entries counted fewer than `min_count` times.
    pub fn retain_min_count(self, min_count: usize) -> Self {
        Self::from_entries(
            self.entries
                .into_iter()
                .filter(|(_, count)| *count >= min_count),
        )
    }

    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut table = Self::new();
        for (token, count) in entries {
            table.index.insert(token.clone(), table.entries.len());
            table.entries.push((token, count));
        }
        table
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyTable {}

impl Serialize for FrequencyTable {
    /// Serializes as a ranked list of `[token, count]` pairs.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ranked().serialize(serializer)
    }
}
