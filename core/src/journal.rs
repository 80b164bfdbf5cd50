//! # Journal
//!
//! A [`Journal`] only manages its list of entries. Saving and loading live in
//! [`crate::persistence`].

use std::fmt;

use solid_common::{Result, SolidError};
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` numbered after the last entry added to this journal and
    /// returns that number.
    ///
    /// Entries are stored one per line, so `text` may not contain a line break.
    /// Numbers are never reused, removing an entry leaves a gap.
    pub fn add_entry(&mut self, text: &str) -> Result<usize> {
        if text.contains(['\n', '\r']) {
            return Err(SolidError::InvalidArgument(
                "journal entries must fit on one line".to_string(),
            ));
        }
        Ok(self.push(text))
    }

    fn push(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
        debug!(number = self.count, "journal entry added");
        self.count
    }

    /// Removes the entry at position `index` (zero based).
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(SolidError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds a journal from its [`Display`](fmt::Display) output.
    ///
    /// Blank lines are skipped and a leading `"<n>:"` plus one space is dropped
    /// before the text is added again, so entries are renumbered from 1. The
    /// rest of the line is kept as is, whitespace included.
    pub fn restore(saved: &str) -> Self {
        let mut journal = Self::new();
        saved
            .lines()
            .filter(|line| !line.trim().is_empty())
            .for_each(|line| {
                journal.push(strip_number(line));
            });
        journal
    }
}

fn strip_number(line: &str) -> &str {
    match line.split_once(':') {
        Some((number, text)) if number.parse::<usize>().is_ok() => {
            text.strip_prefix(' ').unwrap_or(text)
        }
        _ => line,
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_numbered_per_journal() {
        let mut first = Journal::new();
        assert_eq!(first.add_entry("I was crying today").unwrap(), 1);
        assert_eq!(first.add_entry("I ate a bug").unwrap(), 2);

        let mut second = Journal::new();
        assert_eq!(second.add_entry("fresh start").unwrap(), 1);

        assert_eq!(first.to_string(), "1: I was crying today\n2: I ate a bug");
    }

    #[test]
    fn removal_leaves_a_gap_in_numbering() {
        let mut journal = Journal::new();
        journal.add_entry("a").unwrap();
        journal.add_entry("b").unwrap();

        assert_eq!(journal.remove_entry(0).unwrap(), "1: a");
        assert_eq!(journal.add_entry("c").unwrap(), 3);
        assert_eq!(journal.entries(), ["2: b", "3: c"]);
    }

    #[test]
    fn removing_past_the_end_fails() {
        let mut journal = Journal::new();
        journal.add_entry("only").unwrap();

        let err = journal.remove_entry(1).unwrap_err();
        assert!(matches!(err, SolidError::EntryOutOfRange { index: 1, len: 1 }));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn multi_line_entries_are_rejected() {
        let mut journal = Journal::new();

        let err = journal.add_entry("line one\nline two").unwrap_err();
        assert!(matches!(err, SolidError::InvalidArgument(_)));
        assert!(journal.add_entry("carriage\rreturn").is_err());

        assert!(journal.is_empty());
        assert_eq!(journal.add_entry("next").unwrap(), 1);
    }

    #[test]
    fn restore_round_trips() {
        let mut journal = Journal::new();
        journal.add_entry("I was crying today").unwrap();
        journal.add_entry("I ate a bug").unwrap();

        assert_eq!(Journal::restore(&journal.to_string()), journal);
    }

    #[test]
    fn restore_keeps_empty_entries() {
        let mut journal = Journal::new();
        journal.add_entry("").unwrap();
        journal.add_entry("next").unwrap();

        let restored = Journal::restore(&journal.to_string());
        assert_eq!(restored.entries(), ["1: ", "2: next"]);
        assert_eq!(restored, journal);
    }

    #[test]
    fn restore_keeps_padding_inside_entries() {
        let mut journal = Journal::new();
        journal.add_entry("  indented  ").unwrap();
        journal.add_entry("time: 10:30").unwrap();

        let restored = Journal::restore(&journal.to_string());
        assert_eq!(restored.entries(), ["1:   indented  ", "2: time: 10:30"]);
    }

    #[test]
    fn restore_renumbers_and_skips_blank_lines() {
        let restored = Journal::restore("7: seven\n\n  \nplain text\n9: nine\r\n");
        assert_eq!(restored.entries(), ["1: seven", "2: plain text", "3: nine"]);
    }

    #[test]
    fn restore_of_nothing_is_empty() {
        assert!(Journal::restore("").is_empty());
    }
}
