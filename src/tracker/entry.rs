//! A tracked word and where it was seen

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A word together with every file and line it occurs on.
///
/// Entries are ordered, and compared for equality, by their word alone, so a tree of entries
/// can be searched with a plain `&str`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    /// File name to the distinct line numbers (starting at 1) the word appears on.
    occurrences: BTreeMap<String, BTreeSet<usize>>,
}

impl WordEntry {
    /// An entry for `word` with no occurrences yet.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            occurrences: BTreeMap::new(),
        }
    }

    /// The word itself.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Records that the word appears on `line` of `file`. Recording the same line twice has no
    /// further effect.
    pub fn add_occurrence(&mut self, file: &str, line: usize) {
        match self.occurrences.get_mut(file) {
            Some(lines) => {
                lines.insert(line);
            }
            None => {
                self.occurrences
                    .insert(file.to_string(), BTreeSet::from([line]));
            }
        }
    }

    /// Each file the word was seen in, with its lines, both in ascending order.
    pub fn occurrences(&self) -> &BTreeMap<String, BTreeSet<usize>> {
        &self.occurrences
    }

    /// How many distinct lines of `file` hold the word.
    pub fn frequency(&self, file: &str) -> usize {
        self.occurrences.get(file).map_or(0, BTreeSet::len)
    }

    /// How many distinct (file, line) pairs hold the word.
    pub fn total_entries(&self) -> usize {
        self.occurrences.values().map(BTreeSet::len).sum()
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordEntry {}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl Borrow<str> for WordEntry {
    fn borrow(&self) -> &str {
        &self.word
    }
}
