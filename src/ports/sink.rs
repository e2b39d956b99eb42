//! Report sink port for publishing the finished report.

use crate::report::ReportRow;

/// Receives the finished report with clear-then-replace semantics.
///
/// The sink is the one boundary whose failure is fatal to a run: every
/// other external call degrades to "no data", but a report that cannot
/// be published is a run that did not happen.
pub trait ReportSink: Send + Sync {
    /// Deletes all previously published rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the clear request fails.
    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Publishes the full row sequence, replacing prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be delivered.
    fn replace(&self, rows: &[ReportRow]) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
