//! Run configuration, constructed once at startup.
//!
//! All tunables the tracker used to hard-code live here: service
//! endpoints, roster location, clone root, the reporting time zone, the
//! evening cutoff, and the wildcard extension allowlist. Values come
//! from an optional YAML file with environment-variable overrides for
//! the endpoints and roster path (a local `.env` is honored).

use std::env;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, NaiveTime};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "gradewatch.yaml";

/// Environment override for the assignment feed URL.
pub const ENV_FETCH_URL: &str = "GRADEWATCH_FETCH_URL";
/// Environment override for the report sink URL.
pub const ENV_UPDATE_URL: &str = "GRADEWATCH_UPDATE_URL";
/// Environment override for the roster file path.
pub const ENV_ROSTER: &str = "GRADEWATCH_ROSTER";

/// Explicit run configuration passed into the pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Endpoint serving the assignment table as a JSON array.
    pub fetch_url: String,
    /// Endpoint accepting the clear request and the published rows.
    pub update_url: String,
    /// Path of the `handle,displayName` roster file.
    pub roster_path: PathBuf,
    /// Directory under which repository working copies are cloned.
    pub clone_root: PathBuf,
    /// Latest time-of-day credited for activity on a date.
    pub cutoff_time: NaiveTime,
    /// Reporting time zone as minutes east of UTC (default +05:30).
    pub utc_offset_minutes: i32,
    /// File extensions matched in wildcard target mode.
    pub wildcard_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_url: String::new(),
            update_url: String::new(),
            roster_path: PathBuf::from("roster.txt"),
            clone_root: PathBuf::from("."),
            cutoff_time: NaiveTime::from_hms_opt(21, 0, 0).expect("valid cutoff constant"),
            utc_offset_minutes: 330,
            wildcard_extensions: vec![".java".into(), ".js".into()],
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from `gradewatch.yaml` in the
    /// working directory if present, or built-in defaults otherwise.
    /// Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given or discovered config file
    /// cannot be read or parsed. A missing default file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        serde_yaml::from_str(&text)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(ENV_FETCH_URL) {
            self.fetch_url = url;
        }
        if let Ok(url) = env::var(ENV_UPDATE_URL) {
            self.update_url = url;
        }
        if let Ok(path) = env::var(ENV_ROSTER) {
            self.roster_path = PathBuf::from(path);
        }
    }

    /// The reporting time zone as a fixed offset.
    ///
    /// An out-of-range configured offset falls back to UTC with a
    /// warning rather than failing the run.
    #[must_use]
    pub fn tz(&self) -> FixedOffset {
        match FixedOffset::east_opt(self.utc_offset_minutes * 60) {
            Some(offset) => offset,
            None => {
                eprintln!(
                    "Warning: utc_offset_minutes {} out of range, using UTC",
                    self.utc_offset_minutes
                );
                FixedOffset::east_opt(0).expect("zero offset is valid")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let config = Config::default();
        assert_eq!(config.cutoff_time, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
        assert_eq!(config.utc_offset_minutes, 330);
        assert_eq!(config.wildcard_extensions, vec![".java".to_string(), ".js".to_string()]);
        assert_eq!(config.roster_path, PathBuf::from("roster.txt"));
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let yaml = "fetch_url: https://example.com/exec\ncutoff_time: \"20:30:00\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fetch_url, "https://example.com/exec");
        assert_eq!(config.cutoff_time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(config.utc_offset_minutes, 330);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "fetch_url: x\nno_such_field: 1\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn tz_is_plus_0530_by_default() {
        let config = Config::default();
        assert_eq!(config.tz().local_minus_utc(), 330 * 60);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = Config { utc_offset_minutes: 100_000, ..Config::default() };
        assert_eq!(config.tz().local_minus_utc(), 0);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = Config::default();
        env::set_var(ENV_FETCH_URL, "https://env.example/fetch");
        env::set_var(ENV_UPDATE_URL, "https://env.example/update");
        env::set_var(ENV_ROSTER, "/tmp/names.txt");
        config.apply_env();
        env::remove_var(ENV_FETCH_URL);
        env::remove_var(ENV_UPDATE_URL);
        env::remove_var(ENV_ROSTER);

        assert_eq!(config.fetch_url, "https://env.example/fetch");
        assert_eq!(config.update_url, "https://env.example/update");
        assert_eq!(config.roster_path, PathBuf::from("/tmp/names.txt"));
    }
}
