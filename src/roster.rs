//! Authorized-participant roster loaded from a line-oriented text file.
//!
//! Each line maps a host handle to a display name: `handle,Display Name`.
//! Handles are the identity key everywhere else in the crate, so they are
//! normalized to trimmed lowercase on load.

use std::collections::HashMap;
use std::path::Path;

use crate::ports::FileSystem;

/// One roster line: a normalized handle and the display name to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Lowercased, trimmed host handle.
    pub handle: String,
    /// Real name shown in the published report.
    pub name: String,
}

/// The fixed set of participants eligible to be graded.
///
/// Insertion order is preserved so that synthesized "Not Done" rows come
/// out in a stable order across runs. A handle appearing twice keeps its
/// first position but takes the last display name (last write wins).
#[derive(Debug, Default, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Parses roster text, skipping malformed lines.
    ///
    /// A line is well-formed when it has exactly two comma-separated
    /// fields and a non-empty handle. Anything else is skipped with a
    /// warning; parsing never fails.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut roster = Self::default();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 2 {
                eprintln!("Warning: skipping malformed roster line: {line}");
                continue;
            }
            let handle = fields[0].trim().to_lowercase();
            let name = fields[1].trim().to_string();
            if handle.is_empty() {
                eprintln!("Warning: skipping roster line with empty handle: {line}");
                continue;
            }
            roster.insert(handle, name);
        }
        roster
    }

    /// Loads and parses the roster file at `path`.
    ///
    /// An unreadable file degrades to an empty roster with a warning;
    /// a missing roster should not abort reporting for configuration
    /// review, it just produces no rows.
    #[must_use]
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Self {
        match fs.read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                eprintln!("Warning: could not read roster {}: {err}", path.display());
                Self::default()
            }
        }
    }

    fn insert(&mut self, handle: String, name: String) {
        if let Some(&pos) = self.index.get(&handle) {
            self.entries[pos].name = name;
        } else {
            self.index.insert(handle.clone(), self.entries.len());
            self.entries.push(RosterEntry { handle, name });
        }
    }

    /// Returns the display name for a normalized handle.
    #[must_use]
    pub fn name_of(&self, handle: &str) -> Option<&str> {
        self.index.get(handle).map(|&pos| self.entries[pos].name.as_str())
    }

    /// Returns `true` if the handle belongs to an authorized participant.
    #[must_use]
    pub fn contains(&self, handle: &str) -> bool {
        self.index.contains_key(handle)
    }

    /// Iterates entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Number of authorized participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no participants are authorized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let roster = Roster::parse("octocat,Mona Lisa\nhubber, Jane Doe \n");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.name_of("octocat"), Some("Mona Lisa"));
        assert_eq!(roster.name_of("hubber"), Some("Jane Doe"));
    }

    #[test]
    fn normalizes_handles_to_lowercase() {
        let roster = Roster::parse("OctoCat,Mona Lisa");
        assert!(roster.contains("octocat"));
        assert!(!roster.contains("OctoCat"));
    }

    #[test]
    fn skips_malformed_lines() {
        let roster = Roster::parse("just-a-handle\na,b,c\n,Anonymous\nok,Fine");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.name_of("ok"), Some("Fine"));
    }

    #[test]
    fn skips_blank_lines() {
        let roster = Roster::parse("\na,Alice\n\n\nb,Bob\n");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn duplicate_handle_last_write_wins() {
        let roster = Roster::parse("a,First\nb,Bob\na,Second");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.name_of("a"), Some("Second"));
        // First position is kept.
        let order: Vec<&str> = roster.entries().map(|e| e.handle.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn preserves_insertion_order() {
        let roster = Roster::parse("zeta,Z\nalpha,A\nmid,M");
        let order: Vec<&str> = roster.entries().map(|e| e.handle.as_str()).collect();
        assert_eq!(order, ["zeta", "alpha", "mid"]);
    }
}
