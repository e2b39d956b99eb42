//! Assignment specs parsed from raw feed entries.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::ports::{FeedEntry, Workdir};

/// The set of files whose modification completes an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetFiles {
    /// Match every tracked source file in the repository working copy
    /// whose name carries one of the configured extensions.
    Wildcard,
    /// An explicit list of file basenames from the assignment table.
    Explicit(Vec<String>),
}

impl TargetFiles {
    /// Parses the raw `Target File` cell.
    ///
    /// "N/A", "NA" (any case) or an empty cell mean wildcard; otherwise
    /// the cell is a comma-separated list, trimmed, empty names dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let first = raw.split(',').next().unwrap_or("").trim().to_lowercase();
        if first.is_empty() || first == "n/a" || first == "na" {
            return Self::Wildcard;
        }
        let files = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Self::Explicit(files)
    }
}

/// One assignment to grade: a repository, a label, and a target file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSpec {
    /// Repository URL as given in the feed.
    pub repo_url: String,
    /// Sanitized repository name used for clone directories and report rows.
    pub repo_name: String,
    /// Assignment label.
    pub label: String,
    /// Free-form entry type, passed through to the report.
    pub entry_type: String,
    /// Target file set.
    pub target: TargetFiles,
    /// Launch date, when the feed supplied one.
    pub launched: Option<NaiveDate>,
}

impl AssignmentSpec {
    /// Builds a spec from a raw feed entry.
    ///
    /// Returns `None` when the entry is missing a repository URL or an
    /// assignment label; such rows cannot be graded. An unparseable
    /// launch date degrades to "unknown" with a warning.
    #[must_use]
    pub fn from_entry(entry: &FeedEntry, tz: FixedOffset) -> Option<Self> {
        if entry.repo_url.trim().is_empty() || entry.assignment.trim().is_empty() {
            return None;
        }
        let launched = parse_launch_date(&entry.date, tz);
        Some(Self {
            repo_url: entry.repo_url.trim().to_string(),
            repo_name: sanitize_repo_name(&entry.repo_url),
            label: entry.assignment.trim().to_string(),
            entry_type: entry.entry_type.clone(),
            target: TargetFiles::parse(&entry.target_file),
            launched,
        })
    }

    /// Resolves the target set to a concrete list of basenames.
    ///
    /// Explicit targets are returned as-is. Wildcard targets are derived
    /// from the tracked files of a local working copy, keeping basenames
    /// that end with one of `extensions`. Clone or listing failures
    /// degrade to an empty target set with a warning, never an error.
    #[must_use]
    pub fn resolve_target(&self, workdir: &dyn Workdir, extensions: &[String]) -> Vec<String> {
        match &self.target {
            TargetFiles::Explicit(files) => files.clone(),
            TargetFiles::Wildcard => {
                let dir = match workdir.ensure_clone(&self.repo_url) {
                    Ok(dir) => dir,
                    Err(err) => {
                        eprintln!("Warning: could not clone {}: {err}", self.repo_url);
                        return Vec::new();
                    }
                };
                let files = match workdir.tracked_files(&dir) {
                    Ok(files) => files,
                    Err(err) => {
                        eprintln!(
                            "Warning: could not list files in {}: {err}",
                            dir.display()
                        );
                        return Vec::new();
                    }
                };
                files
                    .iter()
                    .filter_map(|path| path.rsplit('/').next())
                    .filter(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
                    .map(String::from)
                    .collect()
            }
        }
    }
}

/// Extracts the final path segment of a repository URL and replaces
/// characters that are invalid in directory names with `_`.
#[must_use]
pub fn sanitize_repo_name(repo_url: &str) -> String {
    let name = repo_url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    name.chars()
        .map(|c| {
            if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || (c as u32) < 0x20
            {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Parses the feed's launch-date cell to a date in the reporting zone.
///
/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn parse_launch_date(raw: &str, tz: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => Some(datetime.with_timezone(&tz).date_naive()),
        Err(err) => {
            eprintln!("Warning: unparseable launch date {raw:?}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    fn entry(repo: &str, assignment: &str, target: &str, date: &str) -> FeedEntry {
        FeedEntry {
            repo_url: repo.into(),
            assignment: assignment.into(),
            entry_type: "Raw Code".into(),
            target_file: target.into(),
            date: date.into(),
        }
    }

    struct FakeWorkdir {
        files: Vec<String>,
        fail_clone: bool,
    }

    impl Workdir for FakeWorkdir {
        fn ensure_clone(
            &self,
            _repo_url: &str,
        ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
            if self.fail_clone {
                return Err("clone failed".into());
            }
            Ok(PathBuf::from("clone"))
        }

        fn tracked_files(
            &self,
            _dir: &Path,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.files.clone())
        }
    }

    #[test]
    fn explicit_target_list_is_trimmed() {
        let target = TargetFiles::parse("Main.java, Util.java ,,Extra.js");
        assert_eq!(
            target,
            TargetFiles::Explicit(vec![
                "Main.java".into(),
                "Util.java".into(),
                "Extra.js".into()
            ])
        );
    }

    #[test]
    fn na_markers_mean_wildcard() {
        assert_eq!(TargetFiles::parse("N/A"), TargetFiles::Wildcard);
        assert_eq!(TargetFiles::parse("na"), TargetFiles::Wildcard);
        assert_eq!(TargetFiles::parse("  "), TargetFiles::Wildcard);
        assert_eq!(TargetFiles::parse(""), TargetFiles::Wildcard);
    }

    #[test]
    fn skips_entries_without_repo_or_label() {
        assert!(AssignmentSpec::from_entry(&entry("", "Lab 1", "a.java", ""), ist()).is_none());
        assert!(
            AssignmentSpec::from_entry(&entry("https://x/repo", "", "a.java", ""), ist()).is_none()
        );
    }

    #[test]
    fn parses_plain_and_rfc3339_launch_dates() {
        let spec =
            AssignmentSpec::from_entry(&entry("https://x/repo", "Lab", "a.java", "2024-01-10"), ist())
                .unwrap();
        assert_eq!(spec.launched, NaiveDate::from_ymd_opt(2024, 1, 10));

        let spec = AssignmentSpec::from_entry(
            &entry("https://x/repo", "Lab", "a.java", "2024-01-09T22:00:00Z"),
            ist(),
        )
        .unwrap();
        // 22:00 UTC is already Jan 10 at +05:30.
        assert_eq!(spec.launched, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn sanitizes_repo_names() {
        assert_eq!(sanitize_repo_name("https://github.com/org/lab-01/"), "lab-01");
        assert_eq!(sanitize_repo_name("https://github.com/org/we?ird*name"), "we_ird_name");
    }

    #[test]
    fn wildcard_resolution_filters_by_extension() {
        let spec = AssignmentSpec::from_entry(
            &entry("https://x/repo", "Lab", "N/A", ""),
            ist(),
        )
        .unwrap();
        let workdir = FakeWorkdir {
            files: vec![
                "src/Main.java".into(),
                "web/app.js".into(),
                "README.md".into(),
                "notes.txt".into(),
            ],
            fail_clone: false,
        };
        let target = spec.resolve_target(&workdir, &[".java".into(), ".js".into()]);
        assert_eq!(target, vec!["Main.java".to_string(), "app.js".to_string()]);
    }

    #[test]
    fn wildcard_clone_failure_degrades_to_empty() {
        let spec = AssignmentSpec::from_entry(
            &entry("https://x/repo", "Lab", "N/A", ""),
            ist(),
        )
        .unwrap();
        let workdir = FakeWorkdir { files: vec!["src/Main.java".into()], fail_clone: true };
        assert!(spec.resolve_target(&workdir, &[".java".into()]).is_empty());
    }

    #[test]
    fn explicit_target_ignores_workdir() {
        let spec = AssignmentSpec::from_entry(
            &entry("https://x/repo", "Lab", "Main.java", ""),
            ist(),
        )
        .unwrap();
        let workdir = FakeWorkdir { files: vec![], fail_clone: true };
        assert_eq!(spec.resolve_target(&workdir, &[".java".into()]), vec!["Main.java".to_string()]);
    }
}
