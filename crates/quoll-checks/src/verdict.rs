//! Collapsing a result mapping into a single pass/fail verdict.

use strum_macros::Display;

use crate::results::CheckResults;

/// Overall outcome of one checker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// Every expectation passed (vacuously true for an empty mapping).
    Pass,
    /// At least one expectation failed.
    Fail,
}

impl Verdict {
    /// Whether the run passed.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Fold a result mapping into its verdict. Pure and deterministic; the
/// mapping is not consumed or modified.
#[must_use]
pub fn aggregate(results: &CheckResults) -> Verdict {
    if results.has_failure() {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}
