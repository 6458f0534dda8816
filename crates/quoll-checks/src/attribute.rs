//! Attribute presence checker.

use quoll_dom::DocumentView;

use crate::requirement::AttributeRequirement;
use crate::results::{CheckResults, CheckStatus};

/// Check attribute requirements against the document.
///
/// A presence-only requirement passes when any element with the tag
/// carries the attribute, whatever its value (including the empty
/// string). A valued requirement additionally demands an exact,
/// case-sensitive value match on at least one such element. A tag that
/// never occurs fails all of its requirements.
#[must_use]
pub fn check_attributes(doc: &DocumentView, requirements: &[AttributeRequirement]) -> CheckResults {
    let mut results = CheckResults::new();
    for requirement in requirements {
        let found = doc.elements_by_tag(&requirement.tag).iter().any(|element| {
            match element.attribute(&requirement.attribute) {
                None => false,
                Some(actual) => requirement
                    .value
                    .as_deref()
                    .is_none_or(|expected| actual == expected),
            }
        });
        results.insert(requirement.result_key(), CheckStatus::from_found(found));
    }
    results
}
