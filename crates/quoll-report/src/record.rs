//! Result records in the grading service's wire shape.
//!
//! Field names and casing are fixed by the service; serde renames keep the
//! Rust shapes idiomatic while serializing to the exact historical JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use quoll_checks::Verdict;

/// Case identifier used when a suite does not declare its own.
pub const DEFAULT_CASE_ID: &str = "218f52f6-d55f-477f-9c9e-a9c33b5d5df0";

/// Category a graded case belongs to. Selects the status-line file and the
/// XML report name; the service also receives it as `methodType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    /// Core behavior cases.
    Functional,
    /// Edge and limit cases.
    Boundary,
    /// Failure-mode cases.
    Exception,
}

impl CaseKind {
    /// Name of the status-line file this kind's results append to.
    #[must_use]
    pub const fn status_file_name(self) -> &'static str {
        match self {
            Self::Functional => "output_revised.txt",
            Self::Boundary => "output_boundary_revised.txt",
            Self::Exception => "output_exception_revised.txt",
        }
    }

    /// Name of the XML report file for this kind.
    #[must_use]
    pub fn report_file_name(self) -> String {
        format!("{self}-test-report.xml")
    }
}

/// Wire status of a graded case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum CaseStatus {
    /// The case's verdict was pass.
    Passed,
    /// The case's verdict was fail.
    Failed,
}

impl CaseStatus {
    /// Map an aggregated verdict to the wire status.
    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Self::Passed,
            Verdict::Fail => Self::Failed,
        }
    }

    /// The status-line token (`PASS` / `FAIL`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
        }
    }
}

/// One graded case in the shape the grading service expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    /// Human-readable case name, also the key in status lines.
    pub method_name: String,
    /// The case's category.
    pub method_type: CaseKind,
    /// Points available for the case.
    pub actual_score: u32,
    /// Points earned (all or nothing).
    pub earned_score: u32,
    /// Pass/fail status.
    pub status: CaseStatus,
    /// Whether the case counts towards the grade. Always `true` here; the
    /// service supports optional cases, this grader does not emit them.
    pub is_mandatory: bool,
    /// Service-side error text. Empty unless the service fills it in.
    pub error_message: String,
}

impl CaseResult {
    /// Build the record for one aggregated verdict. Scoring is all or
    /// nothing: one point available, earned only on pass.
    #[must_use]
    pub fn from_verdict(method_name: impl Into<String>, kind: CaseKind, verdict: Verdict) -> Self {
        Self {
            method_name: method_name.into(),
            method_type: kind,
            actual_score: 1,
            earned_score: if verdict.is_pass() { 1 } else { 0 },
            status: CaseStatus::from_verdict(verdict),
            is_mandatory: true,
            error_message: String::new(),
        }
    }

    /// The `NAME=PASS|FAIL` line (newline included) appended to the status
    /// file.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{}={}\n", self.method_name, self.status.token())
    }
}

/// Submission payload wrapping case results keyed by case identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsEnvelope {
    /// Graded cases by identifier. Ordered map so the payload serializes
    /// deterministically.
    pub test_case_results: BTreeMap<String, CaseResult>,
    /// Opaque passthrough data the service associates with the submission.
    pub custom_data: String,
}

impl ResultsEnvelope {
    /// Envelope holding a single case under `case_id`.
    #[must_use]
    pub fn single(
        case_id: impl Into<String>,
        case: CaseResult,
        custom_data: impl Into<String>,
    ) -> Self {
        let mut test_case_results = BTreeMap::new();
        let _ = test_case_results.insert(case_id.into(), case);
        Self {
            test_case_results,
            custom_data: custom_data.into(),
        }
    }
}
