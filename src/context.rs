//! Service context bundling all port trait objects.

use crate::adapters::live::{GhSubmissionSource, GitWorkdir, LiveFileSystem, SheetsClient};
use crate::config::Config;
use crate::ports::{AssignmentFeed, FileSystem, ReportSink, SubmissionSource, Workdir};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The pipeline
/// only ever sees this struct, so tests can wire in fixture adapters
/// field by field.
pub struct ServiceContext {
    /// Pull-request host queries.
    pub submissions: Box<dyn SubmissionSource>,
    /// Remote assignment table.
    pub feed: Box<dyn AssignmentFeed>,
    /// Published report destination.
    pub sink: Box<dyn ReportSink>,
    /// Local repository working copies.
    pub workdir: Box<dyn Workdir>,
    /// Filesystem for local resources (roster).
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    ///
    /// The sheet client backs both the feed and the sink; they share the
    /// endpoint configuration.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let sheets = SheetsClient::new(config);
        Self {
            submissions: Box::new(GhSubmissionSource::new(config.tz())),
            feed: Box::new(sheets.clone()),
            sink: Box::new(sheets),
            workdir: Box::new(GitWorkdir::new(config.clone_root.clone())),
            fs: Box::new(LiveFileSystem),
        }
    }
}
