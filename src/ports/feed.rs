//! Assignment feed port for the remote assignment table.

use serde::Deserialize;

/// One raw row of the assignment table, exactly as the sheet serves it.
///
/// Field semantics are resolved later by [`crate::assignment::AssignmentSpec`];
/// this type only mirrors the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedEntry {
    /// Repository URL the assignment was issued against.
    #[serde(rename = "Repo URL", default)]
    pub repo_url: String,
    /// Assignment label shown in the report.
    #[serde(rename = "Assignment", default)]
    pub assignment: String,
    /// Free-form entry type (e.g. "Raw Code").
    #[serde(rename = "Type", default)]
    pub entry_type: String,
    /// Comma-separated target file names, or "N/A"/"NA"/empty for wildcard.
    #[serde(rename = "Target File", default)]
    pub target_file: String,
    /// Launch date of the assignment, or empty when unknown.
    #[serde(rename = "Date", default)]
    pub date: String,
}

/// Provides the ordered list of assignment entries to grade.
pub trait AssignmentFeed: Send + Sync {
    /// Fetches all assignment entries from the remote table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be reached or its response
    /// is not the expected JSON array.
    fn fetch(&self) -> Result<Vec<FeedEntry>, Box<dyn std::error::Error + Send + Sync>>;
}
