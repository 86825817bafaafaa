// ============================================================
// Layer 3 — Tokenized Corpus Counter
// ============================================================
// Counts how often every token occurs across a whole corpus
// (a sequence of token sequences, one per record).
//
// Ordering guarantee:
//   Entries are kept in the order each token was FIRST seen
//   while walking the corpus record by record, token by token.
//   A plain HashMap would lose that order, so TokenCounts is an
//   explicit ordered map: a Vec of (token, count) entries plus a
//   HashMap from token to its slot in that Vec.
//
//   The vocabulary relies on this: after a stable sort by count,
//   tokens with equal counts stay in first-occurrence order.
//
// Example:
//   corpus = [["a","b","a"], ["b","c"]]
//   entries = [("a",2), ("b",2), ("c",1)]
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

/// Token → occurrence count, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    /// (token, count) in first-occurrence order
    entries: Vec<(String, usize)>,
    /// token → position in `entries`
    slots: HashMap<String, usize>,
}

impl TokenCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `token`
    pub fn add(&mut self, token: &str) {
        match self.slots.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Occurrence count of `token`, 0 if never seen
    pub fn get(&self, token: &str) -> usize {
        self.slots
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of token occurrences
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, n)| (t.as_str(), *n))
    }

    /// Entries sorted by descending count.
    ///
    /// `sort_by` is stable, so equal counts keep first-occurrence order.
    pub fn sorted_by_freq(&self) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Count every token of every record in `corpus`.
///
/// Accepts anything shaped like a list of token lists, e.g.
/// `&[Vec<String>]` or `&[Vec<&str>]`.
pub fn count_corpus<C, R, T>(corpus: C) -> TokenCounts
where
    C: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut counts = TokenCounts::new();
    for record in corpus {
        for token in record {
            counts.add(token.as_ref());
        }
    }
    counts
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_records() {
        let corpus = vec![vec!["a", "b", "a"], vec!["b", "c"]];
        let counts = count_corpus(&corpus);

        assert_eq!(counts.get("a"), 2);
        assert_eq!(counts.get("b"), 2);
        assert_eq!(counts.get("c"), 1);
        assert_eq!(counts.get("z"), 0);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_iteration_follows_first_occurrence() {
        let corpus = vec![vec!["x", "y"], vec!["z", "y", "x", "w"]];
        let counts = count_corpus(&corpus);
        let order: Vec<&str> = counts.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        // "c" and "a" both occur twice; "c" was seen first
        let corpus = vec![vec!["c", "b", "a"], vec!["a", "c", "d", "d", "d"]];
        let sorted = count_corpus(&corpus).sorted_by_freq();
        let order: Vec<&str> = sorted.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Vec<Vec<String>> = Vec::new();
        let counts = count_corpus(&corpus);
        assert!(counts.is_empty());
        assert!(counts.sorted_by_freq().is_empty());
    }
}
