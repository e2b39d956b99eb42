//! Status reconciliation: per-author aggregation, classification, and
//! non-participant synthesis for one assignment.
//!
//! The reconciler owns the invariant that every authorized roster handle
//! yields exactly one row per assignment, whether or not the participant
//! submitted anything.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::assignment::AssignmentSpec;
use crate::constraint;
use crate::ports::{Submission, SubmissionSource};
use crate::report::{ReportRow, Status, NOT_AVAILABLE};
use crate::roster::Roster;

/// The merged activity of one authorized author on one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorActivity {
    /// Normalized (lowercase) author handle.
    pub handle: String,
    /// Union of changed-file basenames across all the author's
    /// submissions, in first-seen order.
    pub files: Vec<String>,
    /// Ids of every submission by this author, for activity queries.
    pub submission_ids: Vec<u64>,
}

/// Groups submissions by author and merges each author's file sets.
///
/// Author handles compare case-insensitively. Submissions from handles
/// outside the roster are dropped here; those authors are not graded.
/// Authors appear in first-submission order so repeated runs over the
/// same retrieval order produce identical output.
#[must_use]
pub fn aggregate(submissions: &[Submission], roster: &Roster) -> Vec<AuthorActivity> {
    let mut authors: Vec<AuthorActivity> = Vec::new();
    for submission in submissions {
        let handle = submission.author.to_lowercase();
        if !roster.contains(&handle) {
            continue;
        }
        let idx = match authors.iter().position(|a| a.handle == handle) {
            Some(idx) => idx,
            None => {
                authors.push(AuthorActivity {
                    handle,
                    files: Vec::new(),
                    submission_ids: Vec::new(),
                });
                authors.len() - 1
            }
        };
        let activity = &mut authors[idx];
        activity.submission_ids.push(submission.id);
        for file in &submission.files {
            if !activity.files.contains(file) {
                activity.files.push(file.clone());
            }
        }
    }
    authors
}

/// Classifies one author's merged file set against the target set.
///
/// Both sides are lowercased before the subset test, so status is
/// invariant under case and ordering. An empty target set is vacuously
/// a subset of anything and classifies as Done.
#[must_use]
pub fn classify(target: &[String], changed: &[String]) -> Status {
    let changed: HashSet<String> = changed.iter().map(|f| f.to_lowercase()).collect();
    let done = target.iter().all(|f| changed.contains(&f.to_lowercase()));
    if done {
        Status::Done
    } else {
        Status::NotDone
    }
}

/// Resolves the latest activity timestamp across an author's submissions.
///
/// Each submission is queried individually and the maximum taken. Query
/// failures are warned and skipped; if every query fails the result is
/// `None` and the row reports unspecified time and date.
fn resolve_latest(
    source: &dyn SubmissionSource,
    repo_url: &str,
    ids: &[u64],
) -> Option<DateTime<FixedOffset>> {
    let mut latest = None;
    for &id in ids {
        match source.latest_activity(repo_url, id) {
            Ok(Some(at)) => {
                if latest.map_or(true, |prev| at > prev) {
                    latest = Some(at);
                }
            }
            Ok(None) => {}
            Err(err) => {
                eprintln!("Warning: could not get activity for submission #{id}: {err}");
            }
        }
    }
    latest
}

/// Produces the full row set for one assignment.
///
/// Attended authors come first in submission retrieval order, then one
/// synthesized Not Done row for every roster handle with no submission.
#[must_use]
pub fn reconcile_assignment(
    spec: &AssignmentSpec,
    target: &[String],
    submissions: &[Submission],
    roster: &Roster,
    source: &dyn SubmissionSource,
    cutoff: NaiveTime,
) -> Vec<ReportRow> {
    let launched = spec
        .launched
        .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.format("%Y-%m-%d").to_string());
    let target_summary = target.join(", ");

    let attended = aggregate(submissions, roster);
    let mut rows = Vec::with_capacity(roster.len());

    for activity in &attended {
        let latest = resolve_latest(source, &spec.repo_url, &activity.submission_ids);
        let (time, date) = constraint::enforce(
            latest.map(|at| at.time()),
            latest.map(|at| at.date_naive()),
            spec.launched,
            cutoff,
        );
        let status = classify(target, &activity.files);
        rows.push(ReportRow {
            repo: spec.repo_name.clone(),
            name: roster.name_of(&activity.handle).unwrap_or(&activity.handle).to_string(),
            assignment: spec.label.clone(),
            date: Some(date.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |d| d.format("%Y-%m-%d").to_string(),
            )),
            files: if activity.files.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                activity.files.join(", ")
            },
            target_files: target_summary.clone(),
            status,
            score: status.score(),
            time: time.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |t| t.format("%H:%M:%S").to_string(),
            ),
            launched: launched.clone(),
            entry_type: spec.entry_type.clone(),
        });
    }

    let attended_handles: HashSet<&str> =
        attended.iter().map(|a| a.handle.as_str()).collect();
    for entry in roster.entries() {
        if attended_handles.contains(entry.handle.as_str()) {
            continue;
        }
        rows.push(ReportRow {
            repo: spec.repo_name.clone(),
            name: entry.name.clone(),
            assignment: spec.label.clone(),
            date: None,
            files: NOT_AVAILABLE.to_string(),
            target_files: target_summary.clone(),
            status: Status::NotDone,
            score: 0,
            time: NOT_AVAILABLE.to_string(),
            launched: launched.clone(),
            entry_type: spec.entry_type.clone(),
        });
    }

    rows
}
