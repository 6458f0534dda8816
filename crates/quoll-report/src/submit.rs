//! Posting result envelopes to the grading service.

use std::time::Duration;

use thiserror::Error;

use crate::record::ResultsEnvelope;

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Submission failure taxonomy. Retry policy belongs to the caller, not
/// here.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The HTTP client could not be built, or the request never completed.
    #[error("submission transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("grading service rejected the submission: HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Blocking client for one grading service endpoint.
///
/// The endpoint is always supplied by configuration; nothing in this crate
/// knows a default service URL.
#[derive(Debug, Clone)]
pub struct Submitter {
    endpoint: String,
    timeout: Duration,
}

impl Submitter {
    /// Submitter for `endpoint` with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint this submitter posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the envelope as JSON and return the service's response body.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] when the request cannot be built
    /// or sent, and [`SubmitError::Status`] when the service answers with a
    /// non-success status.
    pub fn submit(&self, envelope: &ResultsEnvelope) -> Result<String, SubmitError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client.post(&self.endpoint).json(envelope).send()?;

        if !response.status().is_success() {
            return Err(SubmitError::Status(response.status()));
        }

        Ok(response.text()?)
    }
}
