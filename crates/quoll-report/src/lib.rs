//! Reporting and submission collaborators for grading runs.
//!
//! Everything downstream of verdict aggregation lives here: the wire-shaped
//! result records, the per-kind status-line files, the XML report, and the
//! HTTP submitter. Nothing in this crate decides pass or fail; it carries
//! already-decided results outward, and each piece can fail independently
//! without affecting the others.

pub mod files;
pub mod record;
pub mod submit;
pub mod xml;

pub use files::{append_status_line, clear_report_files, read_custom_data};
pub use record::{CaseKind, CaseResult, CaseStatus, DEFAULT_CASE_ID, ResultsEnvelope};
pub use submit::{SubmitError, Submitter};
pub use xml::{render_case_report, write_xml_report};

use std::path::PathBuf;

use thiserror::Error;

/// Failure while producing a report artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading, writing, or removing a report file failed.
    #[error("report file '{}': {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
    /// XML event writing failed.
    #[error("failed to render the XML report: {0}")]
    Render(std::io::Error),
}
