//! Submission source backed by the GitHub CLI (`gh`).
//!
//! Three `gh` invocations cover the whole port: `pr list` for the
//! summary, `pr view --json ...,files` for per-PR changed files, and
//! `pr view --json commits` for activity times. All JSON parsing is kept
//! in free functions so it can be tested against canned CLI output.

use std::process::Command;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::ports::{Submission, SubmissionSource};

/// Submission source that shells out to the `gh` CLI.
pub struct GhSubmissionSource {
    tz: FixedOffset,
    available: OnceLock<bool>,
}

/// One row of `gh pr list --json number,author,createdAt`.
#[derive(Debug, Deserialize)]
struct PrSummary {
    number: u64,
    #[serde(rename = "createdAt")]
    created_at: DateTime<FixedOffset>,
}

/// Response of `gh pr view --json title,author,files,createdAt`.
#[derive(Debug, Deserialize)]
struct PrDetail {
    author: PrAuthor,
    files: Vec<PrFile>,
    #[serde(rename = "createdAt")]
    created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Deserialize)]
struct PrAuthor {
    login: String,
}

#[derive(Debug, Deserialize)]
struct PrFile {
    path: String,
}

/// Response of `gh pr view --json commits`.
#[derive(Debug, Deserialize)]
struct PrCommits {
    commits: Vec<PrCommit>,
}

#[derive(Debug, Deserialize)]
struct PrCommit {
    #[serde(rename = "committedDate")]
    committed_date: DateTime<FixedOffset>,
}

impl GhSubmissionSource {
    /// Creates a source reporting timestamps in the given offset.
    #[must_use]
    pub fn new(tz: FixedOffset) -> Self {
        Self { tz, available: OnceLock::new() }
    }

    /// Verifies once per process that the `gh` CLI is on PATH.
    fn ensure_available(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let available = *self.available.get_or_init(|| {
            match Command::new("gh").arg("--version").output() {
                Ok(output) if output.status.success() => {
                    println!(
                        "'gh' command is available:\n{}",
                        String::from_utf8_lossy(&output.stdout)
                    );
                    true
                }
                _ => false,
            }
        });
        if available {
            Ok(())
        } else {
            Err("'gh' command is not recognized; install the GitHub CLI and add it to PATH".into())
        }
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.ensure_available()?;
        let output = Command::new("gh").args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("gh {} failed: {stderr}", args.join(" ")).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SubmissionSource for GhSubmissionSource {
    fn list_submissions(
        &self,
        repo_url: &str,
    ) -> Result<Vec<Submission>, Box<dyn std::error::Error + Send + Sync>> {
        let stdout = self.run_gh(&[
            "pr",
            "list",
            "--repo",
            repo_url,
            "--json",
            "number,author,createdAt",
        ])?;
        let numbers = parse_pr_numbers(&stdout)?;

        let mut submissions = Vec::with_capacity(numbers.len());
        for number in numbers {
            let id = number.to_string();
            let stdout = match self.run_gh(&[
                "pr",
                "view",
                "--repo",
                repo_url,
                &id,
                "--json",
                "title,author,files,createdAt",
            ]) {
                Ok(stdout) => stdout,
                Err(err) => {
                    eprintln!("Warning: could not view PR #{number} of {repo_url}: {err}");
                    continue;
                }
            };
            match parse_pr_detail(&stdout, number, self.tz) {
                Ok(submission) => {
                    println!(
                        "PR #{}: author {}, files {:?}, created at {}",
                        submission.id, submission.author, submission.files, submission.created_at
                    );
                    submissions.push(submission);
                }
                Err(err) => {
                    eprintln!("Warning: unparseable PR #{number} of {repo_url}: {err}");
                }
            }
        }
        Ok(submissions)
    }

    fn latest_activity(
        &self,
        repo_url: &str,
        id: u64,
    ) -> Result<Option<DateTime<FixedOffset>>, Box<dyn std::error::Error + Send + Sync>> {
        let pr = id.to_string();
        let stdout =
            self.run_gh(&["pr", "view", "--repo", repo_url, &pr, "--json", "commits"])?;
        parse_latest_commit_time(&stdout, self.tz)
    }
}

/// Extracts PR numbers from `gh pr list` output, most recent first.
fn parse_pr_numbers(json: &str) -> Result<Vec<u64>, Box<dyn std::error::Error + Send + Sync>> {
    let mut summaries: Vec<PrSummary> =
        serde_json::from_str(json).map_err(|e| format!("unexpected gh pr list output: {e}"))?;
    summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(summaries.into_iter().map(|pr| pr.number).collect())
}

/// Builds a [`Submission`] from `gh pr view` output.
fn parse_pr_detail(
    json: &str,
    number: u64,
    tz: FixedOffset,
) -> Result<Submission, Box<dyn std::error::Error + Send + Sync>> {
    let parsed: PrDetail =
        serde_json::from_str(json).map_err(|e| format!("unexpected gh pr view output: {e}"))?;
    let files = parsed
        .files
        .iter()
        .filter_map(|file| file.path.rsplit('/').next())
        .map(String::from)
        .collect();
    Ok(Submission {
        id: number,
        author: parsed.author.login,
        files,
        created_at: parsed.created_at.with_timezone(&tz),
    })
}

/// Extracts the newest commit time from `gh pr view --json commits`
/// output, converted to the reporting offset.
fn parse_latest_commit_time(
    json: &str,
    tz: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>, Box<dyn std::error::Error + Send + Sync>> {
    let parsed: PrCommits =
        serde_json::from_str(json).map_err(|e| format!("unexpected gh commits output: {e}"))?;
    Ok(parsed
        .commits
        .iter()
        .map(|commit| commit.committed_date)
        .max()
        .map(|at| at.with_timezone(&tz)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn pr_numbers_sort_most_recent_first() {
        let json = r#"[
            {"number": 3, "author": {"login": "a"}, "createdAt": "2024-01-09T10:00:00Z"},
            {"number": 7, "author": {"login": "b"}, "createdAt": "2024-01-11T10:00:00Z"},
            {"number": 5, "author": {"login": "c"}, "createdAt": "2024-01-10T10:00:00Z"}
        ]"#;
        assert_eq!(parse_pr_numbers(json).unwrap(), vec![7, 5, 3]);
    }

    #[test]
    fn pr_detail_takes_file_basenames() {
        let json = r#"{
            "title": "Week 1 solution",
            "author": {"login": "OctoCat"},
            "files": [
                {"path": "src/main/java/Main.java", "additions": 10, "deletions": 0},
                {"path": "app.js", "additions": 2, "deletions": 1}
            ],
            "createdAt": "2024-01-10T05:00:00Z"
        }"#;
        let submission = parse_pr_detail(json, 7, ist()).unwrap();
        assert_eq!(submission.id, 7);
        assert_eq!(submission.author, "OctoCat");
        assert_eq!(submission.files, vec!["Main.java".to_string(), "app.js".to_string()]);
        assert_eq!(submission.created_at.to_rfc3339(), "2024-01-10T10:30:00+05:30");
    }

    #[test]
    fn latest_commit_time_is_the_maximum() {
        let json = r#"{"commits": [
            {"committedDate": "2024-01-10T05:00:00Z"},
            {"committedDate": "2024-01-10T09:15:00Z"},
            {"committedDate": "2024-01-09T23:00:00Z"}
        ]}"#;
        let latest = parse_latest_commit_time(json, ist()).unwrap().unwrap();
        assert_eq!(latest.to_rfc3339(), "2024-01-10T14:45:00+05:30");
    }

    #[test]
    fn no_commits_means_no_activity() {
        assert_eq!(parse_latest_commit_time(r#"{"commits": []}"#, ist()).unwrap(), None);
    }

    #[test]
    fn malformed_output_is_an_error() {
        assert!(parse_pr_numbers("not json").is_err());
        assert!(parse_pr_detail("{}", 1, ist()).is_err());
        assert!(parse_latest_commit_time("[]", ist()).is_err());
    }
}
