//! Submission source port for pull-request queries.

use chrono::{DateTime, FixedOffset};

/// A single pull request: one author, the basenames of the files it
/// changed, and its creation time in the reporting time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Host-assigned submission identifier (PR number).
    pub id: u64,
    /// Raw author handle as reported by the host.
    pub author: String,
    /// Basenames of the files changed by this submission.
    pub files: Vec<String>,
    /// Creation time, already converted to the reporting offset.
    pub created_at: DateTime<FixedOffset>,
}

/// Provides read access to the pull requests of a repository.
///
/// Abstracting the pull-request host (subprocess CLI, HTTP API, test
/// fixture) keeps the reconciliation core free of process and network
/// concerns. Callers treat any error as "no data" for that one query;
/// a failure here never aborts the run.
pub trait SubmissionSource: Send + Sync {
    /// Lists the open pull requests of `repo_url` with their changed files.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be queried or its response
    /// cannot be parsed.
    fn list_submissions(
        &self,
        repo_url: &str,
    ) -> Result<Vec<Submission>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the latest commit time recorded on one submission, or
    /// `None` if the host reports no commits for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be queried or its response
    /// cannot be parsed.
    fn latest_activity(
        &self,
        repo_url: &str,
        id: u64,
    ) -> Result<Option<DateTime<FixedOffset>>, Box<dyn std::error::Error + Send + Sync>>;
}
