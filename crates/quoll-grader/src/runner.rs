//! The grading run: load the document once, then run every suite through
//! check, aggregate, report, submit.

use std::time::Duration;

use owo_colors::OwoColorize;

use quoll_checks::{CheckResults, Verdict, aggregate};
use quoll_common::warning::clear_warnings;
use quoll_dom::DocumentView;
use quoll_report::{
    CaseKind, CaseResult, DEFAULT_CASE_ID, ResultsEnvelope, Submitter, append_status_line,
    clear_report_files, read_custom_data, write_xml_report,
};

use crate::GradeError;
use crate::config::GradeConfig;

/// One suite's outcome, kept in full so callers can render or re-aggregate
/// without rerunning the check.
#[derive(Debug, Clone)]
pub struct SuiteOutcome {
    /// The suite's reported case name.
    pub name: String,
    /// The suite's case category.
    pub kind: CaseKind,
    /// Per-expectation results, in declaration order.
    pub results: CheckResults,
    /// The aggregated verdict.
    pub verdict: Verdict,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct GradeSummary {
    /// One outcome per suite, in run order.
    pub outcomes: Vec<SuiteOutcome>,
    /// Collaborator failures that did not stop the run (report files,
    /// submission).
    pub issues: Vec<String>,
}

impl GradeSummary {
    /// Verdict across all suites: pass only when every suite passed.
    #[must_use]
    pub fn overall(&self) -> Verdict {
        if self
            .outcomes
            .iter()
            .all(|outcome| outcome.verdict.is_pass())
        {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Run every suite in the configuration against its target document.
///
/// Report files from previous runs are cleared first, then the document is
/// loaded once and shared by all suites. Per-suite reporting or submission
/// failures are recorded as issues and the run continues; `no_submit`
/// skips submission even when the configuration enables it.
///
/// # Errors
///
/// Returns [`GradeError::Clear`] when previous report files cannot be
/// removed and [`GradeError::Document`] when the target cannot be loaded.
/// Both happen before any suite runs; afterwards the run always completes.
pub fn grade(config: &GradeConfig, no_submit: bool) -> Result<GradeSummary, GradeError> {
    clear_warnings();

    let removed = clear_report_files(&config.report_dir)?;
    for path in &removed {
        println!("Deleted: {}", path.display());
    }

    let doc = DocumentView::from_file(&config.target)?;

    let custom_data = config
        .custom_data_file
        .as_deref()
        .map(read_custom_data)
        .unwrap_or_default();

    let submitter = if no_submit {
        None
    } else {
        config.submit.as_ref().map(|submit| {
            let submitter = Submitter::new(&submit.endpoint);
            match submit.timeout_secs {
                Some(secs) => submitter.with_timeout(Duration::from_secs(secs)),
                None => submitter,
            }
        })
    };

    let mut summary = GradeSummary::default();

    for suite in &config.suites {
        let results = suite.check.run(&doc);
        let verdict = aggregate(&results);
        print_results(&suite.name, &results);

        let case = CaseResult::from_verdict(&suite.name, suite.kind, verdict);
        let case_id = suite
            .case_id
            .clone()
            .unwrap_or_else(|| DEFAULT_CASE_ID.to_string());
        let envelope = ResultsEnvelope::single(case_id, case.clone(), custom_data.clone());

        if let Err(e) = append_status_line(&config.report_dir, &case) {
            summary.issues.push(format!("{}: {e}", suite.name));
        }
        if let Err(e) = write_xml_report(&config.report_dir, &case) {
            summary.issues.push(format!("{}: {e}", suite.name));
        }
        if let Some(submitter) = &submitter {
            println!(
                "Sending data as: {}",
                serde_json::to_string(&envelope).unwrap_or_default()
            );
            match submitter.submit(&envelope) {
                Ok(body) => println!("{} server response: {body}", suite.name),
                Err(e) => summary.issues.push(format!("{}: {e}", suite.name)),
            }
        }

        summary.outcomes.push(SuiteOutcome {
            name: suite.name.clone(),
            kind: suite.kind,
            results,
            verdict,
        });
    }

    Ok(summary)
}

/// Per-entry console lines, colored the way graders expect: yellow for a
/// satisfied expectation, red for a missed one.
fn print_results(name: &str, results: &CheckResults) {
    println!("{name}:");
    for (key, status) in results.iter() {
        let line = format!("  {key} => {status}");
        if status.is_pass() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.red());
        }
    }
}
