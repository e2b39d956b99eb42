//! Report rows and the run-wide row accumulator.

use serde::Serialize;

/// Placeholder written for fields with no value. The sink renders it
/// verbatim, so the exact spelling is part of the wire contract.
pub const NOT_AVAILABLE: &str = "N/A";

/// Completion status of one participant on one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Every target file appears in the participant's changed files.
    Done,
    /// At least one target file was not touched (or no submission exists).
    #[serde(rename = "Not Done")]
    NotDone,
}

impl Status {
    /// The score credited for this status.
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::Done => 1,
            Self::NotDone => 0,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "Done"),
            Self::NotDone => write!(f, "Not Done"),
        }
    }
}

/// One published row: one participant's result on one assignment.
///
/// Serialized field names are the sink's column headers and must not
/// change. `Date` is the only field that may be null — non-participants
/// have no activity date at all; every other field falls back to the
/// [`NOT_AVAILABLE`] placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Sanitized repository name.
    #[serde(rename = "Repo")]
    pub repo: String,
    /// Participant display name from the roster.
    #[serde(rename = "Name")]
    pub name: String,
    /// Assignment label.
    #[serde(rename = "Assignment")]
    pub assignment: String,
    /// Latest activity date, clamped; null for non-participants.
    #[serde(rename = "Date")]
    pub date: Option<String>,
    /// Comma-joined changed files, or "N/A".
    #[serde(rename = "Files")]
    pub files: String,
    /// Comma-joined target files.
    #[serde(rename = "Target Files")]
    pub target_files: String,
    /// Completion status.
    #[serde(rename = "Status")]
    pub status: Status,
    /// 1 for Done, 0 for Not Done.
    #[serde(rename = "Score")]
    pub score: u8,
    /// Latest activity time of day, clamped, or "N/A".
    #[serde(rename = "Time")]
    pub time: String,
    /// Assignment launch date, or "N/A".
    #[serde(rename = "Launched")]
    pub launched: String,
    /// Entry type passed through from the feed.
    #[serde(rename = "Type")]
    pub entry_type: String,
}

/// Ordered accumulator for all rows of a run.
///
/// Rows are appended per assignment in processing order; nothing is
/// deduplicated or merged across assignments.
#[derive(Debug, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Appends the rows of one assignment.
    pub fn extend(&mut self, rows: Vec<ReportRow>) {
        self.rows.extend(rows);
    }

    /// All accumulated rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of accumulated rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
