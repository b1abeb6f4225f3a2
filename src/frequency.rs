// src/frequency.rs
//! Byte frequency counting.
//!
//! One pass over the input fills a 256-slot table. Symbols that never occur
//! keep a count of zero and are skipped by every iterator on the table.

/// Occurrence count for each byte value of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total:  u64,
    used:   usize,
}

impl FrequencyTable {
    /// Count byte frequencies in `input`.
    pub fn count(input: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Self::from_counts(counts)
    }

    /// Build a table from explicit per-byte counts.
    pub fn from_counts(counts: [u64; 256]) -> Self {
        let total = counts.iter().sum();
        let used  = counts.iter().filter(|&&c| c > 0).count();
        Self { counts, total, used }
    }

    /// Count for one byte value (zero if absent).
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Sum of all counts, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Present symbols with their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(s, &c)| (s as u8, c))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.iter()
            .map(|(_, c)| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::from_counts([0u64; 256])
    }
}
