//! The reconciliation run: one linear pass over all assignments.
//!
//! Per assignment: resolve the target set, fetch submissions, reconcile,
//! and accumulate rows; after all assignments, clear-then-replace
//! publish. Every external read degrades locally to "no data"; only the
//! final publish failure aborts the run.

use crate::assignment::AssignmentSpec;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::reconcile;
use crate::report::Report;
use crate::roster::Roster;

/// Runs the whole grading pipeline.
///
/// # Errors
///
/// Returns an error only when the final publish to the report sink
/// fails; all other external failures degrade with a warning.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<(), String> {
    let roster = Roster::load(ctx.fs.as_ref(), &config.roster_path);
    if roster.is_empty() {
        eprintln!(
            "Warning: roster {} is empty; no participants will be graded",
            config.roster_path.display()
        );
    }

    let entries = match ctx.feed.fetch() {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Warning: could not fetch assignment feed: {err}");
            Vec::new()
        }
    };
    if entries.is_empty() {
        println!("No assignment entries fetched; nothing to publish.");
        return Ok(());
    }

    let tz = config.tz();
    let mut report = Report::default();
    for entry in &entries {
        let Some(spec) = AssignmentSpec::from_entry(entry, tz) else {
            eprintln!("Skipping feed entry with missing repo or assignment: {entry:?}");
            continue;
        };
        println!("Processing {} / {}", spec.repo_name, spec.label);

        let target = spec.resolve_target(ctx.workdir.as_ref(), &config.wildcard_extensions);
        let submissions = match ctx.submissions.list_submissions(&spec.repo_url) {
            Ok(submissions) => submissions,
            Err(err) => {
                eprintln!("Warning: could not list submissions for {}: {err}", spec.repo_url);
                Vec::new()
            }
        };

        report.extend(reconcile::reconcile_assignment(
            &spec,
            &target,
            &submissions,
            &roster,
            ctx.submissions.as_ref(),
            config.cutoff_time,
        ));
    }

    if let Err(err) = ctx.sink.clear() {
        eprintln!("Warning: could not clear previous report data: {err}");
    }
    ctx.sink
        .replace(report.rows())
        .map_err(|err| format!("Failed to publish report: {err}"))?;
    println!("Published {} report row(s).", report.len());
    Ok(())
}
