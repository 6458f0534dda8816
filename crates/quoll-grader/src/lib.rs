//! Grading orchestration: configuration, suite sequencing, reporting.
//!
//! The checkers in `quoll-checks` are pure; this crate owns every side
//! effect of a grading run (console lines, report files, submission) and
//! the policy around failures: collaborator trouble on one suite is
//! recorded and the run continues, while an unloadable target document
//! aborts because no result mapping can exist without it.

pub mod config;
pub mod runner;

pub use config::{CheckSuite, GradeConfig, SubmitConfig};
pub use runner::{GradeSummary, SuiteOutcome, grade};

use std::path::PathBuf;

use thiserror::Error;

use quoll_dom::DocumentError;
use quoll_report::ReportError;

/// A failure that prevents a grading run from producing outcomes at all.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration file is not valid grading JSON.
    #[error("invalid grading config '{}': {source}", path.display())]
    ConfigParse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying parse failure.
        source: serde_json::Error,
    },
    /// The target document could not be loaded. This is the single hard
    /// checker fault; everything else degrades to fail entries or issues.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// Previous report files could not be cleared before the run.
    #[error(transparent)]
    Clear(#[from] ReportError),
}
