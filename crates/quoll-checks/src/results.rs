//! The result mapping every checker invocation produces.

use strum_macros::Display;

/// Outcome of a single expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CheckStatus {
    /// The expectation was met.
    Pass,
    /// The expectation was not met (or matching degraded; same thing to
    /// consumers).
    Fail,
}

impl CheckStatus {
    /// Map the "did any element/block satisfy it" flag to a status.
    #[must_use]
    pub const fn from_found(found: bool) -> Self {
        if found { Self::Pass } else { Self::Fail }
    }

    /// Whether this entry passed.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Insertion-ordered mapping from result key to [`CheckStatus`].
///
/// Keys keep the order the expectations were declared in, which is what
/// makes report output deterministic. Inserting an existing key overwrites
/// the entry in place (last write wins, original position kept), so
/// duplicate requirements collapse into a single entry.
///
/// The mapping is created fresh per checker invocation and owned by the
/// caller; checkers hold no state between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResults {
    entries: Vec<(String, CheckStatus)>,
}

impl CheckResults {
    /// Empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expectation's outcome. Re-inserting a key overwrites its
    /// status without moving it.
    pub fn insert(&mut self, key: impl Into<String>, status: CheckStatus) {
        let key = key.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            entry.1 = status;
        } else {
            self.entries.push((key, status));
        }
    }

    /// Status recorded under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<CheckStatus> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, status)| *status)
    }

    /// Number of entries (= number of distinct declared expectations).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CheckStatus)> {
        self.entries
            .iter()
            .map(|(key, status)| (key.as_str(), *status))
    }

    /// Whether any entry failed.
    #[must_use]
    pub fn has_failure(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, status)| *status == CheckStatus::Fail)
    }
}
