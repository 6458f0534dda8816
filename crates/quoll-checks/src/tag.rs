//! Tag presence checker.

use quoll_dom::DocumentView;

use crate::results::{CheckResults, CheckStatus};

/// Check that each named tag appears at least once anywhere in the
/// document. Matching is case-insensitive and ignores nesting depth and
/// element count; one occurrence is enough.
///
/// Every requested tag gets exactly one entry keyed by the tag name as
/// given. Duplicate names collapse into a single entry.
#[must_use]
pub fn check_tags(doc: &DocumentView, tags: &[String]) -> CheckResults {
    let mut results = CheckResults::new();
    for tag in tags {
        results.insert(tag.clone(), CheckStatus::from_found(doc.has_element(tag)));
    }
    results
}
