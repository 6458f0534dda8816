//! Grading run configuration, declared as JSON.
//!
//! A configuration names one target document and any number of suites; each
//! suite pairs a check with the reporting identity (name, kind, case id)
//! its outcome is published under. Example:
//!
//! ```json
//! {
//!   "target": "index.html",
//!   "suites": [
//!     {
//!       "name": "HTML Tags Test",
//!       "kind": "boundary",
//!       "check": { "kind": "tag_presence", "tags": ["html", "body", "title", "h1", "p"] }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quoll_checks::Check;
use quoll_report::CaseKind;

use crate::GradeError;

/// Where and how to submit results. Absent from the configuration means
/// the run stays local.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Grading service URL the envelope is posted to.
    pub endpoint: String,
    /// Per-request timeout override, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// One named, kinded check and its reporting identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSuite {
    /// Case name reported for the suite.
    pub name: String,
    /// Case category, selecting the report files and the wire `methodType`.
    pub kind: CaseKind,
    /// Case identifier in the submission envelope. Defaults to
    /// [`quoll_report::DEFAULT_CASE_ID`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    /// The check to run.
    pub check: Check,
}

/// A full grading run, deserialized from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeConfig {
    /// The HTML document to grade.
    pub target: PathBuf,
    /// Directory report files are written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// File whose contents ride along as the envelope's custom data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data_file: Option<PathBuf>,
    /// Submission settings; absent disables submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit: Option<SubmitConfig>,
    /// The suites to run, in declared order.
    pub suites: Vec<CheckSuite>,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl GradeConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::ConfigRead`] when the file cannot be read and
    /// [`GradeError::ConfigParse`] when its contents are not a valid
    /// grading configuration.
    pub fn from_file(path: &Path) -> Result<Self, GradeError> {
        let text = fs::read_to_string(path).map_err(|source| GradeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| GradeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
