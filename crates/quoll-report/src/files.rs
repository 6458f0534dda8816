//! Status-line report files and the custom data passthrough.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use quoll_common::warning::warn_once;

use crate::ReportError;
use crate::record::{CaseKind, CaseResult};

/// Every status file a run can produce.
const ALL_KINDS: [CaseKind; 3] = [CaseKind::Functional, CaseKind::Boundary, CaseKind::Exception];

/// Append the case's status line to the file matching its kind, creating
/// the file on first append. Returns the path written to.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the file cannot be opened or written.
pub fn append_status_line(dir: &Path, case: &CaseResult) -> Result<PathBuf, ReportError> {
    let path = dir.join(case.method_type.status_file_name());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
    file.write_all(case.status_line().as_bytes())
        .map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Delete status files left over from a previous run. Returns the paths
/// that were actually removed so the caller can log them.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when an existing file cannot be removed.
pub fn clear_report_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut removed = Vec::new();
    for kind in ALL_KINDS {
        let path = dir.join(kind.status_file_name());
        if path.exists() {
            fs::remove_file(&path).map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
            removed.push(path);
        }
    }
    Ok(removed)
}

/// Read the configured custom data file. A missing or unreadable file
/// degrades to the empty string with a one-time warning; custom data is
/// passthrough, never a reason to abort a run.
#[must_use]
pub fn read_custom_data(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            warn_once(
                "Report",
                &format!("could not read custom data '{}': {e}", path.display()),
            );
            String::new()
        }
    }
}
