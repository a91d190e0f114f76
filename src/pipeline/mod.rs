//! Pipeline orchestration for metadata diffs.
//!
//! Shared read → diff → report logic used by the CLI command handlers. The
//! two snapshots of a diff are read in parallel; everything after that is
//! single-threaded.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::{compute_diff, exit_code_for};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{
    parse_file_pair, parse_snapshot_file, read_version, read_version_pair, ParsedSnapshot,
};
pub use report_stage::{output_report, output_view_report, render_diff_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, or changes found without `--fail-on-change`
    pub const SUCCESS: i32 = 0;
    /// Changes were detected and `--fail-on-change` was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
