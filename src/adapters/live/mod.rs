//! Live adapters backed by real external systems: the `gh` CLI, the
//! `git` CLI, the sheet web endpoint, and the local filesystem.

pub mod filesystem;
pub mod gh;
pub mod git;
pub mod sheets;

pub use filesystem::LiveFileSystem;
pub use gh::GhSubmissionSource;
pub use git::GitWorkdir;
pub use sheets::SheetsClient;
