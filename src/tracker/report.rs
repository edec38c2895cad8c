//! Text reports over every tracked word

use std::io;

use super::{WordEntry, WordTracker};

/// How much detail each report line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// The files each word was found in (`-pf`).
    Files,
    /// The files and the lines within them (`-pl`).
    Lines,
    /// The files, the lines, and the total number of entries (`-po`).
    Occurrences,
}

/// Formats the report line for one word.
///
/// # Examples
///
/// ```
/// use bstree::tracker::{format_line, ReportKind, WordEntry};
///
/// let mut entry = WordEntry::new("fox");
/// entry.add_occurrence("a.txt", 1);
/// entry.add_occurrence("a.txt", 4);
///
/// assert_eq!(
///     format_line(&entry, ReportKind::Occurrences),
///     "Key : ===fox===   number of entries: 2  found in file:  a.txt  on lines: 1, 4"
/// );
/// ```
pub fn format_line(entry: &WordEntry, kind: ReportKind) -> String {
    let mut line = format!("Key : ==={}===", entry.word());
    if kind == ReportKind::Occurrences {
        line += &format!("   number of entries: {}", entry.total_entries());
    }

    for (file, lines) in entry.occurrences() {
        line += &format!("  found in file:  {}", file);
        if kind != ReportKind::Files {
            let lines: Vec<String> = lines.iter().map(usize::to_string).collect();
            line += &format!("  on lines: {}", lines.join(", "));
        }
    }

    line
}

/// One line per tracked word, in ascending word order.
pub fn report_lines(
    tracker: &WordTracker,
    kind: ReportKind,
) -> impl Iterator<Item = String> + '_ {
    tracker
        .words()
        .inorder_iter()
        .map(move |entry| format_line(entry, kind))
}

/// Writes the full report to `out`, one word per line.
pub fn write_report<W>(tracker: &WordTracker, kind: ReportKind, mut out: W) -> io::Result<()>
where
    W: io::Write,
{
    for line in report_lines(tracker, kind) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
