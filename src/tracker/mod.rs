//! Tracks which words appear on which lines of which files.
//!
//! Every distinct word becomes one [`WordEntry`] in a [`Tree`]. Reading text looks each token up
//! and either adds a fresh entry or updates the existing one in place, and reports walk the tree
//! once in order.
//!
//! # Examples
//!
//! ```
//! use bstree::tracker::{write_report, ReportKind, WordTracker};
//!
//! let mut tracker = WordTracker::new();
//! let text = "The quick fox.\nThe lazy dog!\n";
//! tracker.ingest(text.as_bytes(), "story.txt")?;
//!
//! let mut out = Vec::new();
//! write_report(&tracker, ReportKind::Lines, &mut out)?;
//! let report = String::from_utf8(out).unwrap();
//!
//! assert_eq!(
//!     report.lines().last(),
//!     Some("Key : ===the===  found in file:  story.txt  on lines: 1, 2")
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Tree;

mod entry;
mod error;
mod report;
mod repository;

pub use entry::WordEntry;
pub use error::{TrackerError, TrackerResult};
pub use report::{format_line, report_lines, write_report, ReportKind};
pub use repository::{Repository, DEFAULT_REPOSITORY};

/// Splits a line into lowercase words. Anything other than an ASCII letter, digit or underscore
/// separates words.
///
/// # Examples
///
/// ```
/// use bstree::tracker::tokenize;
///
/// let words: Vec<_> = tokenize("It's a snake_case, 2-part line!").collect();
/// assert_eq!(words, ["it", "s", "a", "snake_case", "2", "part", "line"]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// The words seen so far and where they were seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordTracker {
    words: Tree<WordEntry>,
}

impl WordTracker {
    /// A tracker that has seen nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree of tracked words.
    pub fn words(&self) -> &Tree<WordEntry> {
        &self.words
    }

    /// How many distinct words have been seen.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words have been seen.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Records one occurrence of `word` on `line` of `file`.
    pub fn record(&mut self, word: &str, file: &str, line: usize) {
        self.words
            .get_or_insert_with(word, || WordEntry::new(word))
            .add_occurrence(file, line);
    }

    /// Records every word read from `reader` as belonging to `file`. Lines are numbered from 1.
    /// Bytes that aren't valid UTF-8 only separate words. Returns how many words were recorded.
    pub fn ingest<R>(&mut self, reader: R, file: &str) -> io::Result<usize>
    where
        R: BufRead,
    {
        let mut recorded = 0;
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let line = String::from_utf8_lossy(&bytes);
            for word in tokenize(&line) {
                self.record(&word, file, index + 1);
                recorded += 1;
            }
        }

        Ok(recorded)
    }

    /// Reads and records the file at `path`, naming it by its path as given.
    #[instrument(level = "debug", skip(self))]
    pub fn ingest_file(&mut self, path: &Path) -> TrackerResult<usize> {
        let file = File::open(path).map_err(|e| TrackerError::io(path, e))?;
        let name = path.display().to_string();
        let recorded = self
            .ingest(BufReader::new(file), &name)
            .map_err(|e| TrackerError::io(path, e))?;

        debug!(
            "ingest_file: {} words from {}, {} distinct overall",
            recorded,
            name,
            self.len()
        );
        Ok(recorded)
    }
}
