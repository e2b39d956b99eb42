//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the reconciliation core and an
//! external system (pull-request host, assignment sheet, report sink, local
//! working copies, filesystem). Implementations live in `src/adapters/`.

pub mod feed;
pub mod filesystem;
pub mod sink;
pub mod submissions;
pub mod workdir;

pub use feed::{AssignmentFeed, FeedEntry};
pub use filesystem::FileSystem;
pub use sink::ReportSink;
pub use submissions::{Submission, SubmissionSource};
pub use workdir::Workdir;
