//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `gradewatch`.
///
/// There are no subcommands: invoking the binary runs the whole grading
/// pipeline once. The flags only relocate startup configuration.
#[derive(Debug, Parser)]
#[command(
    name = "gradewatch",
    version,
    about = "Grade pull-request assignments and publish the report"
)]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Roster file, overriding the configured path.
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_without_flags() {
        let cli = Cli::parse_from(["gradewatch"]);
        assert!(cli.config.is_none());
        assert!(cli.roster.is_none());
    }

    #[test]
    fn parses_config_and_roster_paths() {
        let cli =
            Cli::parse_from(["gradewatch", "--config", "gw.yaml", "--roster", "names.txt"]);
        assert_eq!(cli.config, Some(PathBuf::from("gw.yaml")));
        assert_eq!(cli.roster, Some(PathBuf::from("names.txt")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["gradewatch", "--publish-twice"]).is_err());
    }
}
