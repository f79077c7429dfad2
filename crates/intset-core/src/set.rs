use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canonical::canonicalize;
use crate::config::ParseConfig;
use crate::constants::{CLOSE_BRACE, OPEN_BRACE, SEPARATOR};
use crate::error::{IntSetError, Result};
use crate::tokenizer::tokenize;

/// An immutable, finite set of distinct `i32` values.
///
/// Elements are held strictly ascending, so two sets are equal exactly
/// when their canonical encodings (`{-3,5,10}`) are byte-identical.
/// Values are only built by parsing or by the set-algebra operations;
/// there is no in-place mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntSet {
    elems: Vec<i32>,
}

impl IntSet {
    /// The empty set `{}`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a vector that already satisfies the ordering invariant.
    pub(crate) fn from_canonical(elems: Vec<i32>) -> Self {
        debug_assert!(elems.windows(2).all(|w| w[0] < w[1]));
        Self { elems }
    }

    /// Parse with the default [`ParseConfig`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &ParseConfig::default())
    }

    pub fn parse_with(text: &str, config: &ParseConfig) -> Result<Self> {
        let tokens = tokenize(text, config)?;
        Ok(canonicalize(tokens))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.elems
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.elems.iter().copied()
    }

    pub fn first(&self) -> Option<i32> {
        self.elems.first().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.elems.last().copied()
    }

    /// Length in bytes of the canonical text, computed without rendering.
    pub fn encoded_len(&self) -> usize {
        let digits: usize = self.elems.iter().map(|&e| decimal_len(e)).sum();
        let separators = self.elems.len().saturating_sub(1);
        2 + digits + separators
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.elems
    }
}

/// Parse text into a canonical set with the default configuration.
pub fn parse(text: &str) -> Result<IntSet> {
    IntSet::parse(text)
}

/// Render a set in its canonical external form.
pub fn format(set: &IntSet) -> String {
    set.to_string()
}

fn decimal_len(value: i32) -> usize {
    let sign = usize::from(value < 0);
    let mut magnitude = value.unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    sign + digits
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN_BRACE}")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "{CLOSE_BRACE}")
    }
}

impl FromStr for IntSet {
    type Err = IntSetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IntSet {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        canonicalize(iter)
    }
}

impl Serialize for IntSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IntSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        IntSet::parse(&text).map_err(serde::de::Error::custom)
    }
}
