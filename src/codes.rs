// src/codes.rs
//! Code table derivation.
//!
//! A depth-first walk of the tree appends `0` going left and `1` going right;
//! each leaf receives the path that reached it. A tree that is a lone leaf
//! gets the one-bit code `0` instead of an empty path.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{self, Node};

/// An ordered bit string, most significant (first emitted) bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new() -> Self {
        Code(Vec::new())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// A copy of this code extended by one bit.
    pub fn with(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(bit);
        Code(bits)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl FromIterator<bool> for Code {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Code(iter.into_iter().collect())
    }
}

impl FromStr for Code {
    type Err = Error;

    /// Parse a string of `0`/`1` characters.
    fn from_str(bits: &str) -> Result<Self> {
        bits.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidCodeString { found }),
            })
            .collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the code table for a frequency table.
    ///
    /// Fails with [`Error::EmptyAlphabet`] before touching the tree builder
    /// when `freq` has no symbols.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let root = tree::build(freq).ok_or(Error::EmptyAlphabet)?;
        Ok(Self::from_tree(&root))
    }

    /// Walk `root` and assign every leaf its path code.
    pub fn from_tree(root: &Node) -> Self {
        let mut table = Self::new();
        match root {
            Node::Leaf { symbol, .. } => {
                table.insert(*symbol, Code::new().with(false));
            }
            Node::Internal { .. } => table.assign(root, Code::new()),
        }
        table
    }

    fn assign(&mut self, node: &Node, prefix: Code) {
        match node {
            Node::Leaf { symbol, .. } => {
                self.insert(*symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                self.assign(left, prefix.with(false));
                self.assign(right, prefix.with(true));
            }
        }
    }

    /// Insert or replace the code for `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.codes.iter(),
        }
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Total payload bits needed to encode an input with these frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .filter_map(|(s, c)| self.get(s).map(|code| c * code.len() as u64))
            .sum()
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

/// Iterator over `(symbol, code)` pairs of a [`CodeTable`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, u8, Code>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u8, &'a Code);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&s, c)| (s, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (u8, &'a Code);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(u8, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, Code)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}
